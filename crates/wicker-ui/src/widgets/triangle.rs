use wicker_engine::coords::{vec2, Color, Vec2};
use wicker_engine::render::Vertex;

use crate::context::DrawCtx;
use crate::widget::Widget;

/// A single fixed triangle.
///
/// `Triangle::default()` is the bring-up triangle: (-0.5, -0.5), (0.5, -0.5),
/// (0, 0.5), opaque white. Handy for checking a new backend end to end.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(vertices: [Vertex; 3]) -> Self {
        Self { vertices }
    }

    /// Triangle with one color on every corner.
    pub fn solid(a: Vec2, b: Vec2, c: Vec2, color: Color) -> Self {
        Self::new([Vertex::new(a, color), Vertex::new(b, color), Vertex::new(c, color)])
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.vertices
    }

    pub fn set_color(&mut self, color: Color) {
        for v in &mut self.vertices {
            v.color = color;
        }
    }

    /// Moves every corner by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for v in &mut self.vertices {
            v.position += delta;
        }
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::solid(vec2(-0.5, -0.5), vec2(0.5, -0.5), vec2(0.0, 0.5), Color::WHITE)
    }
}

impl Widget for Triangle {
    fn draw(&self, cx: &mut DrawCtx<'_, '_>) {
        cx.draw(&self.vertices);
    }
}
