use glam::Vec2;

/// Turns successive pointer positions into per-event drag deltas.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragTracker {
    last: Option<Vec2>,
}

impl DragTracker {
    pub fn begin(&mut self, pos: Vec2) {
        self.last = Some(pos);
    }

    /// Delta since the previous position, or `None` when no drag is active.
    pub fn move_to(&mut self, pos: Vec2) -> Option<Vec2> {
        let last = self.last.replace(pos)?;
        Some(pos - last)
    }

    pub fn end(&mut self) {
        self.last = None;
    }

    pub fn active(&self) -> bool {
        self.last.is_some()
    }
}

/// Elapsed wall time expressed in frame units (1.0 = one frame at 60 fps),
/// clamped to `[0, max_delta]`.
#[inline]
pub fn frame_units(elapsed_sec: f32, units_per_sec: f32, max_delta: f32) -> f32 {
    if !elapsed_sec.is_finite() {
        return 0.0;
    }
    (elapsed_sec * units_per_sec).max(0.0).min(max_delta)
}

/// Canvas backing-store size for a CSS box at the given device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Backing pixels per CSS pixel along one axis; 1.0 while the CSS size is unknown.
#[inline]
pub fn device_scale(backing_px: u32, css_px: f32) -> f64 {
    if css_px > 0.0 && css_px.is_finite() {
        backing_px as f64 / css_px as f64
    } else {
        1.0
    }
}

/// `ws://` or `wss://` relay URL matching the page's own scheme.
pub fn relay_url(page_protocol: &str, host: &str, path: &str) -> String {
    let scheme = if page_protocol == "https:" { "wss" } else { "ws" };
    format!("{}://{}{}", scheme, host, path)
}
