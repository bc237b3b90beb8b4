//! Droplet trails: short-lived curves that collapse from a user sphere into
//! the projected centre of the scene.

use crate::color::Rgb;
use crate::config::TrailConfig;
use crate::constants::{FRAME_UNITS_PER_SECOND, TRAIL_MAX_CONTROL_POINTS, TRAIL_POINT_SPEEDUP};
use crate::graphics::{CubicSegment, CurvePath, Graphics, GraphicsId, Layer, Stage};
use crate::projection::{project_point, Camera};
use glam::{Vec2, Vec3};
use rand::Rng;
use smallvec::SmallVec;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrailId(u64);

/// Where a trail starts relative to the spawn point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Emission {
    /// Exactly at the spawn point.
    Center,
    /// Pushed out by the surface offset along `angle`, or a random angle when
    /// `None`. `Some(0.0)` is a real angle and is used as given.
    Surface { angle: Option<f32> },
}

#[derive(Clone, Copy, Debug)]
pub struct TrailSpawn {
    /// Screen-space spawn point.
    pub origin: Vec2,
    pub color: Rgb,
    pub size: f32,
    pub emission: Emission,
}

#[derive(Debug)]
pub struct Trail {
    id: TrailId,
    graphics: GraphicsId,
    start: Vec2,
    end: Vec2,
    control_points: SmallVec<[Vec2; TRAIL_MAX_CONTROL_POINTS]>,
    life: f32,
    color: Rgb,
    size: f32,
}

impl Trail {
    pub fn id(&self) -> TrailId {
        self.id
    }

    pub fn graphics(&self) -> GraphicsId {
        self.graphics
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Control points as placed at spawn time.
    pub fn control_points(&self) -> &[Vec2] {
        &self.control_points
    }

    pub fn life(&self) -> f32 {
        self.life
    }

    /// Control points after `animation_ratio` of the collapse toward `end`.
    /// Later points move faster and may overshoot the end point.
    pub fn animated_points(
        &self,
        animation_ratio: f32,
    ) -> SmallVec<[Vec2; TRAIL_MAX_CONTROL_POINTS]> {
        self.control_points
            .iter()
            .enumerate()
            .map(|(i, &cp)| {
                let ratio = animation_ratio * (1.0 + i as f32 * TRAIL_POINT_SPEEDUP);
                cp + (self.end - cp) * ratio
            })
            .collect()
    }

    fn draw(&self, config: &TrailConfig, g: &mut Graphics) {
        g.clear();
        let life_ratio = (self.life / config.lifespan).clamp(0.0, 1.0);
        if life_ratio <= 0.0 {
            return;
        }
        let current = self.animated_points(1.0 - life_ratio);
        let alpha = life_ratio * config.alpha;

        let mut through: SmallVec<[Vec2; TRAIL_MAX_CONTROL_POINTS + 2]> = SmallVec::new();
        through.push(self.start);
        through.extend(current.iter().copied());
        through.push(self.end);
        g.stroke_curve(
            CurvePath {
                start: self.start,
                segments: catmull_rom_segments(&through, config.tension),
            },
            self.size * life_ratio * config.line_width_multiplier,
            self.color,
            alpha,
        );

        for (j, &p) in current.iter().enumerate() {
            let radius = self.size * 0.8 * life_ratio * (1.0 - j as f32 * 0.2);
            g.fill_circle(p, radius, self.color, alpha * 0.7);
        }
        g.fill_circle(self.start, self.size * life_ratio, self.color, alpha);
    }
}

/// Cubic segments through `points` with Catmull-Rom style tangents.
///
/// Interior tangents use the neighbours on either side scaled by `tension`;
/// the first and last segments clamp their outer handle to the endpoint.
pub fn catmull_rom_segments(points: &[Vec2], tension: f32) -> Vec<CubicSegment> {
    let n = points.len();
    (0..n.saturating_sub(1))
        .map(|j| {
            let start = points[j];
            let end = points[j + 1];
            let ctrl1 = if j > 0 {
                start + (end - points[j - 1]) * tension
            } else {
                start
            };
            let ctrl2 = if j + 2 < n {
                end - (points[j + 2] - start) * tension
            } else {
                end
            };
            CubicSegment { ctrl1, ctrl2, end }
        })
        .collect()
}

/// Bounded FIFO of live trails. Each trail owns one graphics object on the stage.
pub struct TrailPool {
    config: TrailConfig,
    trails: VecDeque<Trail>,
    next_id: u64,
}

impl TrailPool {
    pub fn new(config: TrailConfig) -> Self {
        Self {
            trails: VecDeque::with_capacity(config.capacity),
            config,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    pub fn contains(&self, id: TrailId) -> bool {
        self.trails.iter().any(|t| t.id == id)
    }

    pub fn get(&self, id: TrailId) -> Option<&Trail> {
        self.trails.iter().find(|t| t.id == id)
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Trail> {
        self.trails.iter()
    }

    /// Start a trail from `spawn.origin` toward the projected world origin.
    ///
    /// A full pool drops its oldest trail first. Returns `None` when the pool
    /// has zero capacity or the world origin is behind the camera; an eviction
    /// made before that check stands.
    pub fn spawn(
        &mut self,
        spawn: TrailSpawn,
        camera: &Camera,
        stage: &mut Stage,
        rng: &mut impl Rng,
    ) -> Option<TrailId> {
        if self.config.capacity == 0 {
            return None;
        }
        while self.trails.len() >= self.config.capacity {
            let Some(oldest) = self.trails.pop_front() else {
                break;
            };
            stage.destroy(oldest.graphics);
            log::debug!("[trail] evicted {:?}", oldest.id);
        }

        let end = project_point(Vec3::ZERO, camera)?;
        let start = match spawn.emission {
            Emission::Center => spawn.origin,
            Emission::Surface { angle } => {
                let angle =
                    angle.unwrap_or_else(|| rng.gen::<f32>() * std::f32::consts::TAU);
                spawn.origin + Vec2::new(angle.cos(), angle.sin()) * self.config.surface_offset
            }
        };

        let delta = end - start;
        let distance = delta.length();
        let perp_angle = delta.y.atan2(delta.x) + std::f32::consts::FRAC_PI_2;
        let perp = Vec2::new(perp_angle.cos(), perp_angle.sin());
        let count = self.config.control_points.clamp(1, TRAIL_MAX_CONTROL_POINTS);
        let control_points = (1..=count)
            .map(|i| {
                let ratio = i as f32 / (count + 1) as f32;
                let deviation =
                    (rng.gen::<f32>() - 0.5) * distance * self.config.deviation_factor;
                start + delta * ratio + perp * deviation
            })
            .collect();

        let id = TrailId(self.next_id);
        self.next_id += 1;
        self.trails.push_back(Trail {
            id,
            graphics: stage.create(Layer::Trails),
            start,
            end,
            control_points,
            life: self.config.lifespan,
            color: spawn.color,
            size: spawn.size,
        });
        Some(id)
    }

    /// Age every trail by `delta` frame units, redraw the survivors and
    /// release the expired ones. Returns how many expired.
    pub fn advance(&mut self, delta: f32, stage: &mut Stage) -> usize {
        let config = &self.config;
        let mut expired = 0;
        self.trails.retain_mut(|trail| {
            trail.life -= delta / FRAME_UNITS_PER_SECOND;
            if trail.life <= 0.0 {
                stage.destroy(trail.graphics);
                expired += 1;
                return false;
            }
            if let Some(g) = stage.get_mut(trail.graphics) {
                trail.draw(config, g);
            }
            true
        });
        expired
    }

    /// Release every trail.
    pub fn clear(&mut self, stage: &mut Stage) {
        for trail in self.trails.drain(..) {
            stage.destroy(trail.graphics);
        }
    }
}
