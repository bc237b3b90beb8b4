/// DOM wiring and transport constants for the browser client.
// Element ids in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const BACKGROUND_ID: &str = "gradient-background";

// Relay endpoint, relative to the page host
pub const RELAY_PATH: &str = "/ws";

// Drag deltas smaller than this (px) are ignored on touch screens
pub const TOUCH_DRAG_DEADZONE_PX: f32 = 0.5;

// Stroke cap for trail curves
pub const TRAIL_LINE_CAP: &str = "round";
