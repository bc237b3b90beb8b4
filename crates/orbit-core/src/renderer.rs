//! Shared cloud pipeline: generate → rotate → project → depth sort → shade → draw.

use crate::cloud::PointCloud;
use crate::color::{blend_palette, YRange};
use crate::graphics::Graphics;
use crate::projection::{project_bulk, Camera, Projected};
use crate::transform::rotate_translate;
use glam::Vec3;

/// Point radius, shrinking with distance from the camera down to one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
    pub size_base: f32,
    pub size_falloff: f32,
}

impl PointStyle {
    #[inline]
    pub fn radius_at(&self, distance: f32) -> f32 {
        (self.size_base - distance / self.size_falloff).max(1.0)
    }
}

/// Per-frame buffers kept between draws so the pipeline does not allocate.
#[derive(Default)]
pub struct PipelineScratch {
    world: Vec<Vec3>,
    projected: Vec<Projected>,
}

impl PipelineScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projected points of the last draw, in paint order.
    pub fn projected(&self) -> &[Projected] {
        &self.projected
    }
}

/// Draw one cloud into `out` (appending). Returns the number of circles drawn.
///
/// Points are sorted by ascending camera-relative depth and painted in that
/// order; there is no depth buffer. Points that fail the visibility test stay
/// in the sort and in the Y extent but are not drawn.
pub fn draw_point_cloud(
    cloud: &mut PointCloud,
    camera: &Camera,
    style: &PointStyle,
    scratch: &mut PipelineScratch,
    out: &mut Graphics,
) -> usize {
    let rotation = cloud.rotation;
    let center = cloud.center;
    rotate_translate(cloud.points(), rotation, center, &mut scratch.world);

    let scale = camera.perspective_scale();
    scratch.projected.clear();
    scratch
        .projected
        .extend(scratch.world.iter().map(|&p| project_bulk(p, camera, scale)));
    scratch
        .projected
        .sort_by(|a, b| a.depth.total_cmp(&b.depth));

    let Some(range) = YRange::from_values(scratch.projected.iter().map(|p| p.screen.y)) else {
        return 0;
    };

    let mut drawn = 0;
    for p in scratch.projected.iter().filter(|p| p.visible) {
        let color = blend_palette(range.normalize(p.screen.y), &cloud.palette);
        out.fill_circle(p.screen, style.radius_at(p.distance), color, 1.0);
        drawn += 1;
    }
    drawn
}
