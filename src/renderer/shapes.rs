//! Shape generation for 2D primitives

use glam::Vec2;

use super::surface::Color;
use super::vertex::Vertex;

/// True when a rectangle covers no pixels
#[inline]
pub fn is_degenerate(size: Vec2) -> bool {
    !(size.x > 0.0 && size.y > 0.0)
}

/// Generate vertices for a flat-colored rectangle
pub fn rect(origin: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    gradient_rect(origin, size, [color; 4])
}

/// Generate vertices for a rectangle with per-corner colors
///
/// Corners are top-left, top-right, bottom-left, bottom-right.
/// Degenerate rectangles yield no vertices.
pub fn gradient_rect(origin: Vec2, size: Vec2, corners: [Color; 4]) -> Vec<Vertex> {
    if is_degenerate(size) {
        return Vec::new();
    }

    let [tl_color, tr_color, bl_color, br_color] = corners;
    let tl = origin;
    let tr = origin + Vec2::new(size.x, 0.0);
    let bl = origin + Vec2::new(0.0, size.y);
    let br = origin + size;

    vec![
        Vertex::at(tl, tl_color),
        Vertex::at(bl, bl_color),
        Vertex::at(tr, tr_color),
        Vertex::at(tr, tr_color),
        Vertex::at(bl, bl_color),
        Vertex::at(br, br_color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_two_triangles() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(4.0, 2.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].position, [10.0, 20.0]);
        assert_eq!(verts[5].position, [14.0, 22.0]);
    }

    #[test]
    fn test_gradient_corners_keep_colors() {
        let red = [1.0, 0.0, 0.0, 1.0];
        let blue = [0.0, 0.0, 1.0, 1.0];
        let verts = gradient_rect(Vec2::ZERO, Vec2::ONE, [red, blue, red, blue]);
        for v in &verts {
            let expected = if v.position[0] == 0.0 { red } else { blue };
            assert_eq!(v.color, expected);
        }
    }

    #[test]
    fn test_degenerate_rect_is_empty() {
        assert!(rect(Vec2::ZERO, Vec2::new(0.0, 5.0), [1.0; 4]).is_empty());
        assert!(rect(Vec2::ZERO, Vec2::new(5.0, -1.0), [1.0; 4]).is_empty());
    }
}
