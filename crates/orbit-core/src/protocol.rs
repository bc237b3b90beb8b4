//! Relay event contract.
//!
//! Frames are JSON objects of the form `{"event": "<name>", "data": <payload>}`.
//! The relay itself lives outside this crate; it fans mobile samples out to
//! every display.

use crate::orbit::Orientation;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed event frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Role announced once after connecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Display,
    Mobile,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GyroscopeSample {
    pub user_id: String,
    #[serde(flatten)]
    pub orientation: Orientation,
}

/// Events the relay sends to a display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    UserConnected(String),
    UserDisconnected(String),
    GyroscopeData(GyroscopeSample),
}

/// Events a client sends to the relay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    SetClientType(ClientType),
}

pub fn decode_server_event(frame: &str) -> Result<ServerEvent, ProtocolError> {
    Ok(serde_json::from_str(frame)?)
}

pub fn encode_client_event(event: &ClientEvent) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(event)?)
}
