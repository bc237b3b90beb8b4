//! Bloom imitation: a base graphics object plus blurred, fading clones.

use crate::color::Rgb;
use crate::constants::*;
use crate::graphics::{Graphics, GraphicsId, Layer, Stage};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GlowStyle {
    pub layers: usize,
    pub alpha_base: f32,
    pub alpha_step: f32,
    pub blur_base: f32,
    pub blur_step: f32,
}

impl GlowStyle {
    pub const fn user() -> Self {
        Self {
            layers: USER_GLOW_LAYERS,
            alpha_base: USER_GLOW_ALPHA_BASE,
            alpha_step: USER_GLOW_ALPHA_STEP,
            blur_base: USER_GLOW_BLUR_BASE,
            blur_step: USER_GLOW_BLUR_STEP,
        }
    }

    pub const fn center() -> Self {
        Self {
            layers: CENTER_GLOW_LAYERS,
            alpha_base: CENTER_GLOW_ALPHA_BASE,
            alpha_step: CENTER_GLOW_ALPHA_STEP,
            blur_base: CENTER_GLOW_BLUR_BASE,
            blur_step: CENTER_GLOW_BLUR_STEP,
        }
    }

    /// Opacity of clone `i`; outer clones fade out.
    pub fn layer_alpha(&self, i: usize) -> f32 {
        (self.alpha_base - i as f32 * self.alpha_step).max(0.0)
    }

    /// Blur radius (px) of clone `i`; outer clones spread further.
    pub fn layer_blur(&self, i: usize) -> f32 {
        self.blur_base + i as f32 * self.blur_step
    }
}

/// A base graphics object and its glow clones, mutated and destroyed as one.
///
/// Clone `i` is stored at `layers[i]`. Outer clones paint first, so the
/// composite reads back-to-front as outermost clone, ..., clone 0, base.
#[derive(Debug)]
pub struct GlowComposite {
    base: GraphicsId,
    layers: Vec<GraphicsId>,
}

impl GlowComposite {
    /// Base and clones share `layer`.
    pub fn new(stage: &mut Stage, layer: Layer, style: &GlowStyle) -> Self {
        Self::with_layers(stage, layer, layer, style)
    }

    /// Base in `base_layer`, clones in `glow_layer`.
    pub fn with_layers(
        stage: &mut Stage,
        base_layer: Layer,
        glow_layer: Layer,
        style: &GlowStyle,
    ) -> Self {
        // Stage paints in creation order within a layer: create outermost first.
        let mut layers = vec![None; style.layers];
        for i in (0..style.layers).rev() {
            let mut g = Graphics::default();
            g.alpha = style.layer_alpha(i);
            g.blur = style.layer_blur(i);
            layers[i] = Some(stage.create_with(glow_layer, g));
        }
        let base = stage.create(base_layer);
        Self {
            base,
            layers: layers.into_iter().flatten().collect(),
        }
    }

    pub fn base(&self) -> GraphicsId {
        self.base
    }

    pub fn layers(&self) -> &[GraphicsId] {
        &self.layers
    }

    fn ids(&self) -> impl Iterator<Item = GraphicsId> + '_ {
        std::iter::once(self.base).chain(self.layers.iter().copied())
    }

    fn for_each(&self, stage: &mut Stage, mut f: impl FnMut(&mut Graphics)) {
        for id in self.ids() {
            if let Some(g) = stage.get_mut(id) {
                f(g);
            }
        }
    }

    pub fn set_position(&self, stage: &mut Stage, position: Vec2) {
        self.for_each(stage, |g| g.position = position);
    }

    pub fn set_scale(&self, stage: &mut Stage, scale: f32) {
        self.for_each(stage, |g| g.scale = scale);
    }

    pub fn set_color(&self, stage: &mut Stage, tint: Rgb) {
        self.for_each(stage, |g| g.tint = tint);
    }

    pub fn set_visibility(&self, stage: &mut Stage, visible: bool) {
        self.for_each(stage, |g| g.visible = visible);
    }

    /// Clear the base, let `draw` record new shapes into it, then mirror the
    /// result onto every clone. Returns whatever `draw` returns.
    pub fn redraw<R>(&self, stage: &mut Stage, draw: impl FnOnce(&mut Graphics) -> R) -> R {
        let (result, snapshot) = match stage.get_mut(self.base) {
            Some(base) => {
                base.clear();
                let result = draw(base);
                (result, base.clone())
            }
            None => {
                let mut scratch = Graphics::default();
                return draw(&mut scratch);
            }
        };
        for &id in &self.layers {
            if let Some(layer) = stage.get_mut(id) {
                layer.copy_shapes_from(&snapshot);
            }
        }
        result
    }

    /// Release the base and every clone.
    pub fn destroy(self, stage: &mut Stage) {
        for id in self.ids() {
            stage.destroy(id);
        }
    }
}
