use crate::canvas::CanvasSurface;
use crate::constants::BACKGROUND_ID;
use crate::dom;
use crate::input;
use crate::socket::{self, EventQueue};
use instant::Instant;
use orbit_core::constants::FRAME_UNITS_PER_SECOND;
use orbit_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub surface: CanvasSurface,
    pub queue: EventQueue,
    pub document: web::Document,
    pub last_instant: Instant,
    pub last_opacity: Option<f32>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_instant;
        self.last_instant = now;

        let mut scene = self.scene.borrow_mut();
        let delta = input::frame_units(
            elapsed.as_secs_f32(),
            FRAME_UNITS_PER_SECOND,
            scene.config().max_frame_delta,
        );

        for event in socket::drain(&self.queue) {
            scene.apply_event(event);
        }

        let stats = scene.tick(delta);
        if stats.trails_expired > 0 {
            log::trace!(
                "[frame] spawned={} expired={} live={}",
                stats.trails_spawned,
                stats.trails_expired,
                scene.trails().len()
            );
        }
        scene.render(&mut self.surface);

        // Only touch the DOM when the audience size changed the gradient.
        let opacity = scene.background_opacity();
        if self.last_opacity != Some(opacity) {
            dom::set_element_opacity(&self.document, BACKGROUND_ID, opacity);
            self.last_opacity = Some(opacity);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
