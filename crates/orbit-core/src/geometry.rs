//! Point generators for the clouds the renderer draws.

use glam::Vec3;

/// Shape strategy fed to the shared cloud pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    /// `segments²` points spread over a sphere surface.
    FibonacciSphere { radius: f32, segments: u32 },
    /// Points along the 12 edges of an axis-aligned cube.
    CubeEdges { size: f32, points_per_edge: u32 },
}

impl Geometry {
    pub fn generate(&self) -> Vec<Vec3> {
        match *self {
            Geometry::FibonacciSphere { radius, segments } => fibonacci_sphere(radius, segments),
            Geometry::CubeEdges {
                size,
                points_per_edge,
            } => cube_edges(size, points_per_edge),
        }
    }

    pub fn point_count(&self) -> usize {
        match *self {
            Geometry::FibonacciSphere { segments, .. } => (segments as usize).pow(2),
            Geometry::CubeEdges {
                points_per_edge, ..
            } => CUBE_EDGES.len() * points_per_edge.max(2) as usize,
        }
    }
}

/// Golden-ratio spiral: deterministic, near-uniform coverage of the sphere.
pub fn fibonacci_sphere(radius: f32, segments: u32) -> Vec<Vec3> {
    let n = (segments as usize).pow(2);
    let golden_ratio = (1.0 + 5.0_f32.sqrt()) / 2.0;
    (0..n)
        .map(|i| {
            let theta = std::f32::consts::TAU * i as f32 / golden_ratio;
            let phi = (1.0 - 2.0 * (i as f32 + 0.5) / n as f32).acos();
            Vec3::new(
                radius * theta.cos() * phi.sin(),
                radius * theta.sin() * phi.sin(),
                radius * phi.cos(),
            )
        })
        .collect()
}

// Corner indices per edge: front face, back face, then the connectors.
const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 3),
    (3, 2),
    (2, 0),
    (4, 5),
    (5, 7),
    (7, 6),
    (6, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Cube wireframe as points. Shared corners are emitted once per edge.
pub fn cube_edges(size: f32, points_per_edge: u32) -> Vec<Vec3> {
    let half = size / 2.0;
    let mut corners = [Vec3::ZERO; 8];
    let mut c = 0;
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                corners[c] = Vec3::new(x * half, y * half, z * half);
                c += 1;
            }
        }
    }

    let per_edge = points_per_edge.max(2);
    let mut points = Vec::with_capacity(CUBE_EDGES.len() * per_edge as usize);
    for (a, b) in CUBE_EDGES {
        let (start, end) = (corners[a], corners[b]);
        points.push(start);
        for i in 1..per_edge - 1 {
            let t = i as f32 / (per_edge - 1) as f32;
            points.push(start.lerp(end, t));
        }
        points.push(end);
    }
    points
}
