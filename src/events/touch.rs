use super::InputWiring;
use crate::constants::TOUCH_DRAG_DEADZONE_PX;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_touch_handlers(w: &InputWiring) {
    wire_touchstart(w);
    wire_touchmove(w);
    wire_touchend(w);
}

/// First active touch point, in client pixels.
fn first_touch(ev: &web::TouchEvent) -> Option<Vec2> {
    let t = ev.touches().get(0)?;
    Some(Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

fn wire_touchstart(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(pos) = first_touch(&ev) else {
            return;
        };
        w.drag.borrow_mut().begin(pos);
        w.scene.borrow_mut().begin_drag();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        let Some(pos) = first_touch(&ev) else {
            return;
        };
        let Some(delta) = w.drag.borrow_mut().move_to(pos) else {
            return;
        };
        if delta.length() < TOUCH_DRAG_DEADZONE_PX {
            return;
        }
        w.scene.borrow_mut().drag_by(delta);
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

fn wire_touchend(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        w.drag.borrow_mut().end();
        w.scene.borrow_mut().end_drag();
    }) as Box<dyn FnMut(_)>);
    for name in ["touchend", "touchcancel"] {
        _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
