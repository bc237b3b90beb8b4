//! Typed scene configuration. `Default` reproduces the values in
//! [`crate::constants`]; tests and embedders override individual fields.

use crate::color::{palette_from_hex, Rgb};
use crate::constants::*;
use crate::glow::GlowStyle;
use crate::renderer::PointStyle;

#[derive(Clone, Debug)]
pub struct CameraConfig {
    pub initial_z: f32,
    pub fov_deg: f32,
    pub min_z: f32,
    pub max_z: f32,
    pub zoom_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_z: CAMERA_INITIAL_Z,
            fov_deg: CAMERA_FOV_DEG,
            min_z: CAMERA_MIN_Z,
            max_z: CAMERA_MAX_Z,
            zoom_sensitivity: CAMERA_ZOOM_SENSITIVITY,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CenterSphereConfig {
    pub radius: f32,
    pub segments: u32,
    pub auto_rotation: [f32; 3],
    pub drag_sensitivity: f32,
    pub point_style: PointStyle,
    pub palette: Vec<Rgb>,
}

impl Default for CenterSphereConfig {
    fn default() -> Self {
        Self {
            radius: CENTER_RADIUS,
            segments: CENTER_SEGMENTS,
            auto_rotation: CENTER_AUTO_ROTATION,
            drag_sensitivity: CENTER_DRAG_SENSITIVITY,
            point_style: PointStyle {
                size_base: CENTER_POINT_SIZE_BASE,
                size_falloff: CENTER_POINT_SIZE_FALLOFF,
            },
            palette: palette_from_hex(&CENTER_PALETTE),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UserSphereConfig {
    pub radius: f32,
    pub segments: u32,
    pub orbit_radius: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub default_distance: f32,
    pub join_distance_jitter: f32,
    pub rotation_sensitivity: f32,
    pub beta_multiplier: f32,
    pub point_style: PointStyle,
    /// Colors handed out to joining users, cycled by user count.
    pub palette: Vec<Rgb>,
}

impl Default for UserSphereConfig {
    fn default() -> Self {
        Self {
            radius: USER_RADIUS,
            segments: USER_SEGMENTS,
            orbit_radius: USER_ORBIT_RADIUS,
            min_distance: USER_MIN_DISTANCE,
            max_distance: USER_MAX_DISTANCE,
            default_distance: USER_DEFAULT_DISTANCE,
            join_distance_jitter: USER_JOIN_DISTANCE_JITTER,
            rotation_sensitivity: USER_ROTATION_SENSITIVITY,
            beta_multiplier: USER_BETA_MULTIPLIER,
            point_style: PointStyle {
                size_base: USER_POINT_SIZE_BASE,
                size_falloff: USER_POINT_SIZE_FALLOFF,
            },
            palette: palette_from_hex(&USER_PALETTE),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TrailConfig {
    pub capacity: usize,
    pub lifespan: f32,
    pub size: f32,
    pub alpha: f32,
    pub line_width_multiplier: f32,
    pub surface_offset: f32,
    pub control_points: usize,
    pub deviation_factor: f32,
    pub tension: f32,
    pub per_frame: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: TRAIL_CAPACITY,
            lifespan: TRAIL_LIFESPAN,
            size: TRAIL_SIZE,
            alpha: TRAIL_ALPHA,
            line_width_multiplier: TRAIL_LINE_WIDTH_MULTIPLIER,
            surface_offset: TRAIL_SURFACE_OFFSET,
            control_points: TRAIL_CONTROL_POINTS,
            deviation_factor: TRAIL_DEVIATION_FACTOR,
            tension: TRAIL_TENSION,
            per_frame: TRAILS_PER_FRAME,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BackgroundConfig {
    pub users_for_full: usize,
    pub min_opacity: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            users_for_full: BACKGROUND_USERS_FOR_FULL,
            min_opacity: BACKGROUND_MIN_OPACITY,
        }
    }
}

impl BackgroundConfig {
    /// Gradient opacity for the given number of connected users.
    pub fn opacity(&self, users: usize) -> f32 {
        let intensity = (users as f32 / self.users_for_full.max(1) as f32).min(1.0);
        self.min_opacity + intensity * (1.0 - self.min_opacity)
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub center: CenterSphereConfig,
    pub user: UserSphereConfig,
    pub trail: TrailConfig,
    pub center_glow: GlowStyle,
    pub user_glow: GlowStyle,
    pub background: BackgroundConfig,
    pub max_frame_delta: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            center: CenterSphereConfig::default(),
            user: UserSphereConfig::default(),
            trail: TrailConfig::default(),
            center_glow: GlowStyle::center(),
            user_glow: GlowStyle::user(),
            background: BackgroundConfig::default(),
            max_frame_delta: MAX_FRAME_DELTA,
        }
    }
}
