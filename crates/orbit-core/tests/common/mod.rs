// Shared helpers for orbit-core integration tests.

#![allow(dead_code)]

use glam::Vec2;
use orbit_core::color::Rgb;
use orbit_core::graphics::{CurvePath, LayerStyle, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Begin(f32, f32),
    Push(Vec2, LayerStyle),
    Circle(Vec2, f32, Rgb, f32),
    Curve(usize, f32, Rgb, f32),
    Pop,
}

/// Surface that records every call instead of drawing.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Circle(..)))
            .count()
    }

    pub fn curves(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Curve(..)))
            .count()
    }

    pub fn layers(&self) -> Vec<LayerStyle> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Push(_, style) => Some(*style),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn begin_frame(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Begin(width, height));
    }

    fn push_layer(&mut self, origin: Vec2, style: &LayerStyle) {
        self.ops.push(Op::Push(origin, *style));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.ops.push(Op::Circle(center, radius, color, alpha));
    }

    fn stroke_curve(&mut self, path: &CurvePath, width: f32, color: Rgb, alpha: f32) {
        self.ops
            .push(Op::Curve(path.segments.len(), width, color, alpha));
    }

    fn pop_layer(&mut self) {
        self.ops.push(Op::Pop);
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
