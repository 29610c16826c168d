//! Axis-aligned rectangular components
//!
//! Positions are relative to the owning simulation's viewport origin.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::{Color, Surface};

/// A drawable rectangle with a fill color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Top-left corner, viewport-relative
    pub position: Vec2,
    pub size: Vec2,
    pub color: Color,
    /// Centerline color. When set the component is shaded as a cylinder.
    pub inner_color: Option<Color>,
}

impl Component {
    pub fn new(color: Color) -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            color,
            inner_color: None,
        }
    }

    /// A component drawn with a two-sided horizontal gradient
    pub fn shaded(color: Color, inner_color: Color) -> Self {
        Self {
            inner_color: Some(inner_color),
            ..Self::new(color)
        }
    }

    /// Size and place the component around a center point
    pub fn place_centered(&mut self, center: Vec2, size: Vec2) {
        self.size = size;
        self.position = center - size / 2.0;
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// Inclusive AABB overlap: touching edges count as overlapping
    #[inline]
    pub fn overlaps(&self, other: &Component) -> bool {
        overlaps(self.position, self.size, other.position, other.size)
    }

    pub fn draw(&self, surface: &mut dyn Surface, viewport_origin: Vec2) {
        if !(self.size.x > 0.0 && self.size.y > 0.0) {
            return;
        }

        let origin = viewport_origin + self.position;
        match self.inner_color {
            None => surface.fill_rect(origin, self.size, self.color),
            Some(inner) => {
                // Outer edge to centerline, then centerline to outer edge
                let half = Vec2::new(self.size.x / 2.0, self.size.y);
                let outer = self.color;
                surface.gradient_fill_rect(origin, half, outer, inner, outer, inner);
                surface.gradient_fill_rect(
                    origin + Vec2::new(half.x, 0.0),
                    half,
                    inner,
                    outer,
                    inner,
                    outer,
                );
            }
        }
    }
}

/// Inclusive overlap test between two axis-aligned rectangles
#[inline]
pub fn overlaps(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    let hit_x = a_pos.x + a_size.x >= b_pos.x && b_pos.x + b_size.x >= a_pos.x;
    let hit_y = a_pos.y + a_size.y >= b_pos.y && b_pos.y + b_size.y >= a_pos.y;
    hit_x && hit_y
}
