use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS box × devicePixelRatio.
/// Returns the CSS size, which is what the scene lays out in.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (rect.width() as f32, rect.height() as f32)
}

/// Set the page gradient's opacity; a missing element is ignored.
pub fn set_element_opacity(document: &web::Document, element_id: &str, opacity: f32) {
    let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    _ = el
        .style()
        .set_property("opacity", &format!("{:.3}", opacity.clamp(0.0, 1.0)));
}

/// True when the browser reports touch input.
pub fn is_touch_device() -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let has_ontouchstart =
        js_sys::Reflect::has(&window, &wasm_bindgen::JsValue::from_str("ontouchstart"))
            .unwrap_or(false);
    has_ontouchstart || window.navigator().max_touch_points() > 0
}

/// `ws(s)://<host><path>` for the current page.
pub fn relay_url(path: &str) -> Option<String> {
    let location = web::window()?.location();
    let protocol = location.protocol().ok()?;
    let host = location.host().ok()?;
    Some(input::relay_url(&protocol, &host, path))
}
