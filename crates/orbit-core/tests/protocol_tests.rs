use orbit_core::orbit::Orientation;
use orbit_core::protocol::{
    decode_server_event, encode_client_event, ClientEvent, ClientType, GyroscopeSample,
    ProtocolError, ServerEvent,
};

#[test]
fn decodes_connection_events() {
    assert_eq!(
        decode_server_event(r#"{"event":"userConnected","data":"abc123"}"#).unwrap(),
        ServerEvent::UserConnected("abc123".into())
    );
    assert_eq!(
        decode_server_event(r#"{"event":"userDisconnected","data":"abc123"}"#).unwrap(),
        ServerEvent::UserDisconnected("abc123".into())
    );
}

#[test]
fn decodes_gyroscope_samples() {
    let frame = r#"{"event":"gyroscopeData","data":{"userId":"u1","alpha":10,"beta":-20.5,"gamma":3.25}}"#;
    assert_eq!(
        decode_server_event(frame).unwrap(),
        ServerEvent::GyroscopeData(GyroscopeSample {
            user_id: "u1".into(),
            orientation: Orientation::new(10.0, -20.5, 3.25),
        })
    );
}

#[test]
fn rejects_malformed_frames() {
    for frame in [
        "not json",
        r#"{"event":"somethingElse","data":1}"#,
        r#"{"event":"gyroscopeData","data":{"userId":"u1"}}"#,
    ] {
        assert!(matches!(
            decode_server_event(frame),
            Err(ProtocolError::Malformed(_))
        ));
    }
}

#[test]
fn encodes_client_role_announcement() {
    let json = encode_client_event(&ClientEvent::SetClientType(ClientType::Display)).unwrap();
    assert_eq!(json, r#"{"event":"setClientType","data":"display"}"#);
    let json = encode_client_event(&ClientEvent::SetClientType(ClientType::Mobile)).unwrap();
    assert_eq!(json, r#"{"event":"setClientType","data":"mobile"}"#);
}
