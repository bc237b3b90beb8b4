//! Relay connection. Decoded events are queued here and applied by the
//! frame loop, so the scene only ever changes between frames.

use orbit_core::protocol::{decode_server_event, encode_client_event, ClientEvent, ClientType};
use orbit_core::ServerEvent;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type EventQueue = Rc<RefCell<Vec<ServerEvent>>>;

pub struct RelaySocket {
    ws: web::WebSocket,
    queue: EventQueue,
}

impl RelaySocket {
    pub fn connect(url: &str) -> anyhow::Result<Self> {
        let ws = web::WebSocket::new(url).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let queue: EventQueue = Rc::new(RefCell::new(Vec::new()));

        let ws_open = ws.clone();
        let onopen = Closure::wrap(Box::new(move || {
            match encode_client_event(&ClientEvent::SetClientType(ClientType::Display)) {
                Ok(frame) => {
                    if let Err(e) = ws_open.send_with_str(&frame) {
                        log::error!("[socket] announce failed: {:?}", e);
                    } else {
                        log::info!("[socket] connected as display");
                    }
                }
                Err(e) => log::error!("[socket] {}", e),
            }
        }) as Box<dyn FnMut()>);
        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();

        let queue_msg = queue.clone();
        let onmessage = Closure::wrap(Box::new(move |ev: web::MessageEvent| {
            let Some(text) = ev.data().as_string() else {
                log::warn!("[socket] ignoring non-text frame");
                return;
            };
            match decode_server_event(&text) {
                Ok(event) => queue_msg.borrow_mut().push(event),
                Err(e) => log::warn!("[socket] {}", e),
            }
        }) as Box<dyn FnMut(_)>);
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();

        let onclose = Closure::wrap(Box::new(move |ev: web::CloseEvent| {
            log::warn!("[socket] closed (code {})", ev.code());
        }) as Box<dyn FnMut(_)>);
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
        onclose.forget();

        Ok(Self { ws, queue })
    }

    pub fn queue(&self) -> EventQueue {
        self.queue.clone()
    }

    pub fn close(&self) {
        _ = self.ws.close();
    }
}

/// Take every queued event, oldest first.
pub fn drain(queue: &EventQueue) -> Vec<ServerEvent> {
    std::mem::take(&mut *queue.borrow_mut())
}
