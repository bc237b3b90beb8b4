#![cfg(target_arch = "wasm32")]
use instant::Instant;
use orbit_core::{Scene, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod socket;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) = dom::sync_canvas_backing_size(&canvas);
    let surface = canvas::CanvasSurface::new(&canvas)?;

    let scene = Rc::new(RefCell::new(Scene::new(
        SceneConfig::default(),
        width,
        height,
        rand::random::<u64>(),
    )));
    log::info!(
        "[scene] {}x{} css px, {} centre points",
        width,
        height,
        scene.borrow().center().geometry.point_count()
    );

    events::wire_resize(&canvas, scene.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        drag: Rc::new(RefCell::new(input::DragTracker::default())),
    });

    let url = dom::relay_url(constants::RELAY_PATH)
        .ok_or_else(|| anyhow::anyhow!("cannot resolve relay url"))?;
    let socket = Rc::new(socket::RelaySocket::connect(&url)?);
    log::info!("[socket] connecting to {}", url);
    events::wire_teardown(scene.clone(), socket.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        surface,
        queue: socket.queue(),
        document,
        last_instant: Instant::now(),
        last_opacity: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
