//! Hand-rolled perspective projection from world space to screen space.
//!
//! Screen coordinates are relative to the viewport centre; callers offset them
//! by half the canvas size when drawing.

use crate::config::CameraConfig;
use crate::constants::DISPLAY_SCALE;
use glam::{Vec2, Vec3};

/// Viewer state. `yaw` and `pitch` are kept for callers but the projection
/// does not read them.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub fov_deg: f32,
    pub aspect: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, config.initial_z),
            fov_deg: config.fov_deg,
            aspect,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Dolly along Z by a wheel delta, clamped to the configured range.
    pub fn zoom(&mut self, wheel_delta_y: f32, config: &CameraConfig) {
        let z = self.position.z + wheel_delta_y * config.zoom_sensitivity;
        self.position.z = z.clamp(config.min_z, config.max_z);
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }

    pub fn perspective_scale(&self) -> f32 {
        perspective_scale(self.fov_deg)
    }
}

#[inline]
pub fn perspective_scale(fov_deg: f32) -> f32 {
    1.0 / (fov_deg.to_radians() / 2.0).tan()
}

/// Result of projecting one point of a cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    /// Straight-line distance from the camera.
    pub distance: f32,
    /// Camera-relative Z (dz). Zero for the degenerate dz == 0 case.
    pub depth: f32,
    pub visible: bool,
}

/// Single-point helper: anything at or behind the camera plane is rejected.
pub fn project_point(point: Vec3, camera: &Camera) -> Option<Vec2> {
    let d = point - camera.position;
    if d.z <= 0.0 {
        return None;
    }
    let scale = camera.perspective_scale();
    Some(Vec2::new(
        (d.x / d.z) * scale * DISPLAY_SCALE,
        (d.y / d.z) * scale * DISPLAY_SCALE,
    ))
}

/// Bulk projector used by the cloud renderer.
///
/// Only dz == 0 short-circuits. A point behind the camera (dz < 0) still gets
/// projected coordinates and is marked invisible, so it participates in depth
/// sorting and the Y extent but is never drawn.
pub fn project_bulk(point: Vec3, camera: &Camera, scale: f32) -> Projected {
    let d = point - camera.position;
    let distance = d.length();
    if d.z == 0.0 {
        return Projected {
            screen: Vec2::ZERO,
            distance,
            depth: 0.0,
            visible: false,
        };
    }
    Projected {
        screen: Vec2::new(
            (d.x / d.z) * scale * DISPLAY_SCALE,
            (d.y / d.z) * scale * DISPLAY_SCALE,
        ),
        distance,
        depth: d.z,
        visible: d.z > 0.0,
    }
}
