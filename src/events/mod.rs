pub mod pointer;
pub mod touch;

use crate::dom;
use crate::input::DragTracker;
use crate::socket::RelaySocket;
use orbit_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub drag: Rc<RefCell<DragTracker>>,
}

/// Pick touch or mouse handlers based on what the browser reports.
pub fn wire_input_handlers(w: InputWiring) {
    if dom::is_touch_device() {
        log::info!("[input] touch controls");
        touch::wire_touch_handlers(&w);
    } else {
        log::info!("[input] mouse controls");
        pointer::wire_pointer_handlers(&w);
    }
}

/// Keep the backing store, viewport centre and aspect in step with the window.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<Scene>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        scene.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Release scene resources and close the relay socket when the page unloads.
pub fn wire_teardown(scene: Rc<RefCell<Scene>>, socket: Rc<RelaySocket>) {
    let closure = Closure::wrap(Box::new(move || {
        scene.borrow_mut().teardown();
        socket.close();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
