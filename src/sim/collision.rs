//! Collision detection for axis-aligned geometry
//!
//! Everything in Space Dash collides as a bounding rectangle in screen space
//! (x right, y down). Cosmetic offsets such as the pickup bob never feed in.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { min: pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// True when the rectangle encloses no area
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Overlap test with nonzero shared area
    ///
    /// Rectangles that only touch along an edge or corner do not intersect,
    /// and an empty rectangle never intersects anything. Coordinates are
    /// compared as floats, never snapped to whole pixels first, so a
    /// sub-pixel overlap or gap decides the result.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 40.0, 60.0);
        let b = Rect::new(30.0, 50.0, 30.0, 100.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 40.0, 60.0);
        // Shares the vertical edge x = 40
        let right = Rect::new(40.0, 0.0, 30.0, 60.0);
        assert!(!a.intersects(&right));
        // Shares the horizontal edge y = 60
        let below = Rect::new(0.0, 60.0, 40.0, 10.0);
        assert!(!a.intersects(&below));
        // Corner contact only
        let corner = Rect::new(40.0, 60.0, 5.0, 5.0);
        assert!(!a.intersects(&corner));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = Rect::new(0.0, 0.0, 40.0, 60.0);
        let b = Rect::new(10.0, 100.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0.0, 0.0, 40.0, 60.0);
        let empty = Rect::new(10.0, 10.0, 0.0, 20.0);
        assert!(empty.is_empty());
        assert!(!a.intersects(&empty));
        assert!(!empty.intersects(&a));
    }

    #[test]
    fn test_fractional_overlap_counts() {
        let a = Rect::new(0.0, 0.0, 40.0, 60.0);
        let b = Rect::new(39.5, 59.5, 10.0, 10.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_sub_pixel_gap_does_not_snap() {
        let a = Rect::new(0.0, 0.0, 40.0, 60.0);
        // A quarter pixel of clearance is honoured as a miss
        let b = Rect::new(40.25, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(39.75, 10.0, 10.0, 10.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }
}
