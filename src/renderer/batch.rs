//! Tessellating surface
//!
//! Turns surface calls into a flat triangle list ready for upload with
//! [`VertexBatch::layout`]. Positions stay in window pixels; the shader is expected
//! to map them to clip space.

use glam::Vec2;

use super::shapes;
use super::surface::{Color, Surface};
use super::vertex::Vertex;

#[derive(Debug, Clone)]
pub struct VertexBatch {
    size: Vec2,
    clear_color: Color,
    vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Color of the most recent clear
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex buffer layout for uploading [`Self::as_bytes`]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        Vertex::desc()
    }
}

impl Surface for VertexBatch {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.vertices.extend(shapes::rect(origin, size, color));
    }

    fn gradient_fill_rect(
        &mut self,
        origin: Vec2,
        size: Vec2,
        top_left: Color,
        top_right: Color,
        bottom_left: Color,
        bottom_right: Color,
    ) {
        self.vertices.extend(shapes::gradient_rect(
            origin,
            size,
            [top_left, top_right, bottom_left, bottom_right],
        ));
    }
}
