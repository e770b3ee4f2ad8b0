use bytemuck::{Pod, Zeroable};

use crate::coords::{vec2, Color, Vec2};

/// One corner of a triangle: position plus color.
///
/// Layout is `#[repr(C)]` with no padding (24 bytes), so a `&[Vertex]` can be
/// handed to a GPU buffer as-is via [`as_bytes`].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Color,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec2, color: Color) -> Self {
        Self { position, color }
    }
}

/// Zero-copy byte view of a vertex batch.
#[inline]
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Two triangles covering the axis-aligned rectangle `min..max`.
///
/// Winding is consistent (min, max.x/min.y, max) then (min, max, min.x/max.y).
pub fn quad(min: Vec2, max: Vec2, color: Color) -> [Vertex; 6] {
    let a = Vertex::new(min, color);
    let b = Vertex::new(vec2(max.x(), min.y()), color);
    let c = Vertex::new(max, color);
    let d = Vertex::new(vec2(min.x(), max.y()), color);
    [a, b, c, a, c, d]
}

/// Number of whole triangles in a batch of `len` vertices.
#[inline]
pub const fn triangle_count(len: usize) -> usize {
    len / 3
}
