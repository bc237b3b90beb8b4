//! Retained display list.
//!
//! Subsystems record shapes into [`Graphics`] objects owned by a [`Stage`];
//! once per frame the stage replays them, layer by layer, onto a [`Surface`]
//! (the browser canvas, or a recorder in tests). Releasing a graphics object
//! is explicit via [`Stage::destroy`].

use crate::color::Rgb;
use fnv::FnvHashMap;
use glam::Vec2;

/// Back-to-front draw bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    CenterGlow,
    Trails,
    Orbits,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphicsId(u64);

/// One cubic Bezier segment; the segment starts where the previous one ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub ctrl1: Vec2,
    pub ctrl2: Vec2,
    pub end: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurvePath {
    pub start: Vec2,
    pub segments: Vec<CubicSegment>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
        alpha: f32,
    },
    Curve {
        path: CurvePath,
        width: f32,
        color: Rgb,
        alpha: f32,
    },
}

/// Display properties applied to a whole graphics object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    pub position: Vec2,
    pub scale: f32,
    pub alpha: f32,
    pub blur: f32,
}

#[derive(Clone, Debug)]
pub struct Graphics {
    shapes: Vec<Shape>,
    pub position: Vec2,
    pub scale: f32,
    pub alpha: f32,
    pub tint: Rgb,
    pub blur: f32,
    pub visible: bool,
}

impl Default for Graphics {
    fn default() -> Self {
        Self {
            shapes: Vec::new(),
            position: Vec2::ZERO,
            scale: 1.0,
            alpha: 1.0,
            tint: Rgb::WHITE,
            blur: 0.0,
            visible: true,
        }
    }
}

impl Graphics {
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.shapes.push(Shape::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    pub fn stroke_curve(&mut self, path: CurvePath, width: f32, color: Rgb, alpha: f32) {
        self.shapes.push(Shape::Curve {
            path,
            width,
            color,
            alpha,
        });
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Replace the shape list with a copy of another object's shapes.
    pub fn copy_shapes_from(&mut self, other: &Graphics) {
        self.shapes.clone_from(&other.shapes);
    }

    pub fn style(&self) -> LayerStyle {
        LayerStyle {
            position: self.position,
            scale: self.scale,
            alpha: self.alpha,
            blur: self.blur,
        }
    }
}

/// Immediate-mode drawing backend.
pub trait Surface {
    fn begin_frame(&mut self, width: f32, height: f32);
    fn push_layer(&mut self, origin: Vec2, style: &LayerStyle);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);
    fn stroke_curve(&mut self, path: &CurvePath, width: f32, color: Rgb, alpha: f32);
    fn pop_layer(&mut self);
}

struct Entry {
    layer: Layer,
    graphics: Graphics,
}

#[derive(Default)]
pub struct Stage {
    entries: FnvHashMap<GraphicsId, Entry>,
    next_id: u64,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, layer: Layer) -> GraphicsId {
        self.create_with(layer, Graphics::default())
    }

    pub fn create_with(&mut self, layer: Layer, graphics: Graphics) -> GraphicsId {
        let id = GraphicsId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, Entry { layer, graphics });
        id
    }

    pub fn get(&self, id: GraphicsId) -> Option<&Graphics> {
        self.entries.get(&id).map(|e| &e.graphics)
    }

    pub fn get_mut(&mut self, id: GraphicsId) -> Option<&mut Graphics> {
        self.entries.get_mut(&id).map(|e| &mut e.graphics)
    }

    /// Release a graphics object. Returns false if it was already gone.
    pub fn destroy(&mut self, id: GraphicsId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn contains(&self, id: GraphicsId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn live_count(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Ids in paint order: by layer, then by creation.
    pub fn draw_order(&self) -> Vec<GraphicsId> {
        let mut order: Vec<(Layer, GraphicsId)> =
            self.entries.iter().map(|(id, e)| (e.layer, *id)).collect();
        order.sort_unstable();
        order.into_iter().map(|(_, id)| id).collect()
    }

    /// Replay every visible graphics object, centred in a `width`×`height` viewport.
    pub fn render(&self, surface: &mut impl Surface, width: f32, height: f32) {
        surface.begin_frame(width, height);
        let origin = Vec2::new(width / 2.0, height / 2.0);
        for id in self.draw_order() {
            let Some(entry) = self.entries.get(&id) else {
                continue;
            };
            let g = &entry.graphics;
            if !g.visible || g.shapes.is_empty() {
                continue;
            }
            surface.push_layer(origin, &g.style());
            for shape in &g.shapes {
                match shape {
                    Shape::Circle {
                        center,
                        radius,
                        color,
                        alpha,
                    } => surface.fill_circle(*center, *radius, color.tinted(g.tint), *alpha),
                    Shape::Curve {
                        path,
                        width,
                        color,
                        alpha,
                    } => surface.stroke_curve(path, *width, color.tinted(g.tint), *alpha),
                }
            }
            surface.pop_layer();
        }
    }
}
