use crate::color::Rgb;
use crate::geometry::Geometry;
use crate::transform::Rotation;
use glam::Vec3;

/// A point-sampled solid: the centre sphere or one user's orbiting sphere.
///
/// Points are offsets from `center`, generated on first use and cached. The
/// cache is not invalidated when `geometry` changes; call
/// [`PointCloud::clear_points`] after changing it.
#[derive(Clone, Debug)]
pub struct PointCloud {
    pub center: Vec3,
    pub geometry: Geometry,
    pub rotation: Rotation,
    pub palette: Vec<Rgb>,
    points: Vec<Vec3>,
}

impl PointCloud {
    pub fn new(geometry: Geometry, palette: Vec<Rgb>) -> Self {
        Self {
            center: Vec3::ZERO,
            geometry,
            rotation: Rotation::default(),
            palette,
            points: Vec::new(),
        }
    }

    pub fn sphere(radius: f32, segments: u32, palette: Vec<Rgb>) -> Self {
        Self::new(Geometry::FibonacciSphere { radius, segments }, palette)
    }

    /// Cached points, generating them if the cache is empty.
    pub fn points(&mut self) -> &[Vec3] {
        if self.points.is_empty() {
            self.points = self.geometry.generate();
        }
        &self.points
    }

    pub fn is_generated(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn clear_points(&mut self) {
        self.points = Vec::new();
    }
}
