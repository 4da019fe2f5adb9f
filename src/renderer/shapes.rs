//! Shape generation for 2D primitives
//!
//! Every shape is emitted as a plain triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a single triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Generate vertices for a filled axis-aligned rectangle
///
/// Degenerate rectangles produce no vertices.
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let (x2, y2) = (x + width, y + height);
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x2, y, color),
        Vertex::new(x, y2, color),
        Vertex::new(x, y2, color),
        Vertex::new(x2, y, color),
        Vertex::new(x2, y2, color),
    ]
}

/// Generate vertices for a rectangle border drawn inside the given bounds
pub fn rect_outline(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    thickness: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let t = thickness.min(width / 2.0).min(height / 2.0);
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(x, y, width, t, color));
    vertices.extend(rect(x, y + height - t, width, t, color));
    vertices.extend(rect(x, y + t, t, height - 2.0 * t, color));
    vertices.extend(rect(x + width - t, y + t, t, height - 2.0 * t, color));
    vertices
}

/// Generate vertices for a quad given its corners in winding order
///
/// Splits along the a-c diagonal, so `a` must see every other corner
/// (true for the notched rocket silhouette).
pub fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = triangle(a, b, c, color);
    vertices.extend(triangle(a, c, d, color));
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}
