//! Host rendering surface boundary
//!
//! The simulation core never talks to a window directly. It only needs a
//! surface that can report its size and paint flat or gradient rectangles.

use glam::Vec2;

/// Linear RGBA color
pub type Color = [f32; 4];

/// Build an opaque color from 8-bit channels
#[inline]
pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for simulation elements
pub mod colors {
    use super::{Color, rgb8};

    pub const BACKGROUND: Color = rgb8(0, 0, 0);
    pub const CLEAR: Color = rgb8(0, 0, 0);
    pub const MAGNET: Color = rgb8(165, 165, 165);
    pub const PVC: Color = rgb8(128, 128, 160);
    pub const COPPER: Color = rgb8(184, 115, 51);
    pub const COPPER_INNER: Color = rgb8(150, 50, 20);
}

/// Drawing capabilities the core requires from the host
///
/// All coordinates are absolute window pixels. Simulations add their own
/// viewport origin before calling in.
pub trait Surface {
    /// Window size in pixels
    fn size(&self) -> Vec2;

    /// Clear the whole surface
    fn clear(&mut self, color: Color);

    /// Fill an axis-aligned rectangle with a flat color
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Fill an axis-aligned rectangle, interpolating between corner colors
    fn gradient_fill_rect(
        &mut self,
        origin: Vec2,
        size: Vec2,
        top_left: Color,
        top_right: Color,
        bottom_left: Color,
        bottom_right: Color,
    );
}
