//! Canvas 2D backend for the retained display list.

use crate::constants::TRAIL_LINE_CAP;
use crate::input;
use glam::Vec2;
use orbit_core::color::Rgb;
use orbit_core::graphics::{CurvePath, LayerStyle, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draws in CSS pixels; the context is scaled up to the backing store.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ctx.set_line_cap(TRAIL_LINE_CAP);
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }
}

impl Surface for CanvasSurface {
    fn begin_frame(&mut self, width: f32, height: f32) {
        let sx = input::device_scale(self.canvas.width(), width);
        let sy = input::device_scale(self.canvas.height(), height);
        _ = self.ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn push_layer(&mut self, origin: Vec2, style: &LayerStyle) {
        let ctx = &self.ctx;
        ctx.save();
        _ = ctx.translate(
            (origin.x + style.position.x) as f64,
            (origin.y + style.position.y) as f64,
        );
        if style.scale != 1.0 {
            _ = ctx.scale(style.scale as f64, style.scale as f64);
        }
        ctx.set_global_alpha(style.alpha.clamp(0.0, 1.0) as f64);
        if style.blur > 0.0 {
            ctx.set_filter(&format!("blur({}px)", style.blur));
        } else {
            ctx.set_filter("none");
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        let ctx = &self.ctx;
        let layer_alpha = ctx.global_alpha();
        ctx.set_global_alpha(layer_alpha * alpha as f64);
        ctx.set_fill_style_str(&color.css());
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        ctx.fill();
        ctx.set_global_alpha(layer_alpha);
    }

    fn stroke_curve(&mut self, path: &CurvePath, width: f32, color: Rgb, alpha: f32) {
        if path.segments.is_empty() {
            return;
        }
        let ctx = &self.ctx;
        let layer_alpha = ctx.global_alpha();
        ctx.set_global_alpha(layer_alpha * alpha as f64);
        ctx.set_stroke_style_str(&color.css());
        ctx.set_line_width(width as f64);
        ctx.begin_path();
        ctx.move_to(path.start.x as f64, path.start.y as f64);
        for seg in &path.segments {
            ctx.bezier_curve_to(
                seg.ctrl1.x as f64,
                seg.ctrl1.y as f64,
                seg.ctrl2.x as f64,
                seg.ctrl2.y as f64,
                seg.end.x as f64,
                seg.end.y as f64,
            );
        }
        ctx.stroke();
        ctx.set_global_alpha(layer_alpha);
    }

    fn pop_layer(&mut self) {
        self.ctx.restore();
    }
}
