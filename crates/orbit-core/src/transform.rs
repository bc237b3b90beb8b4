use glam::Vec3;

/// Euler angles applied X, then Y, then Z. Angles are never wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn accumulate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

#[inline]
pub fn rotate_point(p: Vec3, r: Rotation) -> Vec3 {
    let (sx, cx) = r.x.sin_cos();
    let (sy, cy) = r.y.sin_cos();
    let (sz, cz) = r.z.sin_cos();

    // X axis
    let y1 = p.y * cx - p.z * sx;
    let z1 = p.y * sx + p.z * cx;
    // Y axis
    let x2 = p.x * cy + z1 * sy;
    let z2 = -p.x * sy + z1 * cy;
    // Z axis
    let x3 = x2 * cz - y1 * sz;
    let y3 = x2 * sz + y1 * cz;

    Vec3::new(x3, y3, z2)
}

/// Rotate every point and move it to `center`, writing into `out`.
pub fn rotate_translate(points: &[Vec3], rotation: Rotation, center: Vec3, out: &mut Vec<Vec3>) {
    out.clear();
    out.extend(points.iter().map(|&p| rotate_point(p, rotation) + center));
}
