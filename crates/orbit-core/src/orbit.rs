//! Remote users and the mapping from their phone orientation to an orbit.

use crate::cloud::PointCloud;
use crate::color::Rgb;
use crate::config::UserSphereConfig;
use crate::glow::{GlowComposite, GlowStyle};
use crate::graphics::{Layer, Stage};
use crate::transform::Rotation;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Device orientation sample, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Orientation {
    pub const fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self { alpha, beta, gamma }
    }
}

/// World position on the orbit shell of radius `radius`.
///
/// Alpha spins around the vertical axis; beta tilts. Beta is converted with a
/// divisor of 90 instead of 180 and then scaled by `beta_multiplier`.
pub fn orbit_position(orientation: Orientation, radius: f32, beta_multiplier: f32) -> Vec3 {
    let alpha = orientation.alpha * (std::f32::consts::PI / 180.0);
    let beta = orientation.beta * (std::f32::consts::PI / 90.0);
    let tilt = beta * beta_multiplier;
    Vec3::new(
        radius * alpha.sin() * tilt.cos(),
        radius * tilt.sin(),
        radius * alpha.cos() * tilt.cos(),
    )
}

/// Spin of a user's own sphere for an orientation sample.
pub fn sphere_rotation(orientation: Orientation, sensitivity: f32) -> Rotation {
    Rotation::new(
        orientation.beta * sensitivity,
        orientation.gamma * sensitivity,
        orientation.alpha * sensitivity,
    )
}

#[derive(Debug)]
pub struct RemoteUser {
    pub id: String,
    pub orientation: Orientation,
    /// Tracked distance from the centre; currently pinned to the configured default.
    pub distance: f32,
    pub color: Rgb,
    pub sphere: PointCloud,
    pub visual: GlowComposite,
}

impl RemoteUser {
    pub fn new(
        id: String,
        color: Rgb,
        distance: f32,
        config: &UserSphereConfig,
        glow: &GlowStyle,
        stage: &mut Stage,
    ) -> Self {
        Self {
            id,
            orientation: Orientation::default(),
            distance,
            color,
            sphere: PointCloud::sphere(config.radius, config.segments, vec![color]),
            visual: GlowComposite::new(stage, Layer::Orbits, glow),
        }
    }

    /// Store a new sample and derive the sphere spin from it.
    pub fn apply_orientation(&mut self, orientation: Orientation, config: &UserSphereConfig) {
        self.orientation = orientation;
        self.sphere.rotation = sphere_rotation(orientation, config.rotation_sensitivity);
        self.distance = config
            .default_distance
            .max(config.min_distance)
            .min(config.max_distance);
    }

    pub fn orbit_position(&self, config: &UserSphereConfig) -> Vec3 {
        orbit_position(self.orientation, config.orbit_radius, config.beta_multiplier)
    }

    /// Release the user's visual resources.
    pub fn destroy(self, stage: &mut Stage) {
        self.visual.destroy(stage);
    }
}
