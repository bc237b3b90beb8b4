//! The render context: every piece of per-display state and the per-frame update.
//!
//! All mutation happens through `&mut Scene` on one thread. Transport events
//! are applied between frames, so a frame never observes a half-applied event.

use crate::cloud::PointCloud;
use crate::color::Rgb;
use crate::config::SceneConfig;
use crate::geometry::Geometry;
use crate::glow::GlowComposite;
use crate::graphics::{Layer, Stage, Surface};
use crate::orbit::{Orientation, RemoteUser};
use crate::projection::{project_point, Camera};
use crate::protocol::ServerEvent;
use crate::renderer::{draw_point_cloud, PipelineScratch};
use crate::trail::{Emission, TrailPool, TrailSpawn};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What one `tick` did, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub center_points: usize,
    pub user_points: usize,
    pub trails_spawned: usize,
    pub trails_expired: usize,
}

pub struct Scene {
    config: SceneConfig,
    camera: Camera,
    stage: Stage,
    center: PointCloud,
    center_visual: Option<GlowComposite>,
    users: Vec<RemoteUser>,
    trails: TrailPool,
    scratch: PipelineScratch,
    rng: StdRng,
    viewport: Vec2,
    dragging: bool,
}

impl Scene {
    pub fn new(config: SceneConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut stage = Stage::new();
        let camera = Camera::new(&config.camera, width / height.max(1.0));
        let center = PointCloud::sphere(
            config.center.radius,
            config.center.segments,
            config.center.palette.clone(),
        );
        let center_visual = GlowComposite::with_layers(
            &mut stage,
            Layer::Center,
            Layer::CenterGlow,
            &config.center_glow,
        );
        let trails = TrailPool::new(config.trail.clone());
        Self {
            config,
            camera,
            stage,
            center,
            center_visual: Some(center_visual),
            users: Vec::new(),
            trails,
            scratch: PipelineScratch::new(),
            rng: StdRng::seed_from_u64(seed),
            viewport: Vec2::new(width, height),
            dragging: false,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn center(&self) -> &PointCloud {
        &self.center
    }

    /// Swap the centre geometry (e.g. the cube-edge variant); the point cache is reset.
    pub fn set_center_geometry(&mut self, geometry: Geometry) {
        self.center.geometry = geometry;
        self.center.clear_points();
    }

    pub fn users(&self) -> &[RemoteUser] {
        &self.users
    }

    pub fn user(&self, id: &str) -> Option<&RemoteUser> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn trails(&self) -> &TrailPool {
        &self.trails
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    // ---------------- Transport events ----------------

    pub fn apply_event(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::UserConnected(id) => {
                self.user_connected(&id);
            }
            ServerEvent::UserDisconnected(id) => {
                self.user_disconnected(&id);
            }
            ServerEvent::GyroscopeData(sample) => {
                self.apply_orientation(&sample.user_id, sample.orientation);
            }
        }
    }

    /// Add a user with a zero orientation and the next palette color.
    /// Returns false if the id is already present.
    pub fn user_connected(&mut self, id: &str) -> bool {
        if self.user(id).is_some() {
            log::debug!("[user] duplicate connect ignored: {}", id);
            return false;
        }
        let palette = &self.config.user.palette;
        let color = if palette.is_empty() {
            Rgb::WHITE
        } else {
            palette[self.users.len() % palette.len()]
        };
        let distance = self.config.user.min_distance
            + self.rng.gen::<f32>() * self.config.user.join_distance_jitter;
        let mut user = RemoteUser::new(
            id.to_owned(),
            color,
            distance,
            &self.config.user,
            &self.config.user_glow,
            &mut self.stage,
        );
        user.sphere.points();
        log::info!("[user] connected {} color={}", id, color.css());
        self.users.push(user);
        true
    }

    /// Remove a user and release its visuals. Unknown ids are ignored.
    pub fn user_disconnected(&mut self, id: &str) -> bool {
        let Some(index) = self.users.iter().position(|u| u.id == id) else {
            return false;
        };
        let user = self.users.remove(index);
        user.destroy(&mut self.stage);
        log::info!("[user] disconnected {}", id);
        true
    }

    /// Store a sample for a known user. Samples for unknown ids are dropped.
    pub fn apply_orientation(&mut self, id: &str, orientation: Orientation) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.apply_orientation(orientation, &self.config.user);
                true
            }
            None => {
                log::debug!("[user] sample for unknown id dropped: {}", id);
                false
            }
        }
    }

    // ---------------- Window input ----------------

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Rotate the centre sphere by a pointer delta in pixels while dragging.
    pub fn drag_by(&mut self, delta: Vec2) {
        if !self.dragging {
            return;
        }
        let s = self.config.center.drag_sensitivity;
        self.center.rotation.y += delta.x * s;
        self.center.rotation.x += delta.y * s;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn zoom(&mut self, wheel_delta_y: f32) {
        self.camera.zoom(wheel_delta_y, &self.config.camera);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.camera.set_aspect(width, height.max(1.0));
    }

    /// Opacity of the page background gradient for the current user count.
    pub fn background_opacity(&self) -> f32 {
        self.config.background.opacity(self.users.len())
    }

    // ---------------- Frame ----------------

    /// Advance by `delta` frame units (1.0 = one frame at 60 fps) and
    /// rebuild every graphics object for this frame.
    pub fn tick(&mut self, delta: f32) -> FrameStats {
        let delta = if delta.is_finite() {
            delta.max(0.0).min(self.config.max_frame_delta)
        } else {
            0.0
        };
        let mut stats = FrameStats::default();

        if !self.dragging {
            let [rx, ry, rz] = self.config.center.auto_rotation;
            self.center.rotation.accumulate(rx * delta, ry * delta, rz * delta);
        }

        if let Some(visual) = &self.center_visual {
            let center = &mut self.center;
            let camera = &self.camera;
            let style = &self.config.center.point_style;
            let scratch = &mut self.scratch;
            stats.center_points = visual.redraw(&mut self.stage, |g| {
                draw_point_cloud(center, camera, style, scratch, g)
            });
        }

        let (user_points, spawned) = self.update_orbits();
        stats.user_points = user_points;
        stats.trails_spawned = spawned;
        stats.trails_expired = self.trails.advance(delta, &mut self.stage);
        stats
    }

    fn update_orbits(&mut self) -> (usize, usize) {
        let mut points = 0;
        let mut spawned = 0;
        let user_config = &self.config.user;
        let trail_config = &self.config.trail;
        for user in &mut self.users {
            let position = user.orbit_position(user_config);
            user.sphere.center = position;

            let sphere = &mut user.sphere;
            let camera = &self.camera;
            let scratch = &mut self.scratch;
            points += user.visual.redraw(&mut self.stage, |g| {
                draw_point_cloud(sphere, camera, &user_config.point_style, scratch, g)
            });

            let Some(screen) = project_point(position, &self.camera) else {
                continue;
            };
            for _ in 0..trail_config.per_frame {
                let angle = self.rng.gen::<f32>() * std::f32::consts::TAU;
                let spawn = TrailSpawn {
                    origin: screen,
                    color: user.color,
                    size: trail_config.size,
                    emission: Emission::Surface { angle: Some(angle) },
                };
                if self
                    .trails
                    .spawn(spawn, &self.camera, &mut self.stage, &mut self.rng)
                    .is_some()
                {
                    spawned += 1;
                }
            }
        }
        (points, spawned)
    }

    pub fn render(&self, surface: &mut impl Surface) {
        self.stage.render(surface, self.viewport.x, self.viewport.y);
    }

    /// Release every graphics resource the scene owns.
    pub fn teardown(&mut self) {
        self.trails.clear(&mut self.stage);
        for user in self.users.drain(..) {
            user.destroy(&mut self.stage);
        }
        if let Some(visual) = self.center_visual.take() {
            visual.destroy(&mut self.stage);
        }
        log::info!("[scene] teardown, {} graphics left", self.stage.live_count());
    }
}
