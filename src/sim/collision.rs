//! Collision tests between the player box and round entities
//!
//! The player is an axis-aligned rectangle; clouds, masks and particles are
//! circles. Screen coordinates: y grows downward.

use glam::Vec2;
use serde::Serialize;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Inclusive point test (edges count as inside)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Inclusive overlap test (touching edges overlap)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() >= other.x
            && self.x <= other.right()
            && self.bottom() >= other.y
            && self.y <= other.bottom()
    }

    /// Point on or inside the rectangle closest to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.x, self.right()),
            point.y.clamp(self.y, self.bottom()),
        )
    }
}

/// Rectangle vs circle: true when the circle center is strictly closer than
/// `radius` to the nearest point of the rectangle
pub fn rect_circle_overlap(rect: &Rect, center: Vec2, radius: f32) -> bool {
    let closest = rect.closest_point(center);
    center.distance(closest) < radius
}

/// Circle vs circle, strict
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_circle_center_inside() {
        let rect = Rect::new(0.0, 0.0, 40.0, 60.0);
        assert!(rect_circle_overlap(&rect, Vec2::new(20.0, 30.0), 1.0));
    }

    #[test]
    fn test_rect_circle_side_contact() {
        let rect = Rect::new(0.0, 0.0, 40.0, 60.0);
        // 4px right of the right edge
        assert!(rect_circle_overlap(&rect, Vec2::new(44.0, 30.0), 5.0));
        assert!(!rect_circle_overlap(&rect, Vec2::new(44.0, 30.0), 3.0));
        // Exactly touching is not a hit
        assert!(!rect_circle_overlap(&rect, Vec2::new(44.0, 30.0), 4.0));
    }

    #[test]
    fn test_rect_circle_corner_uses_euclidean_distance() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // 3-4-5 triangle off the bottom-right corner
        let center = Vec2::new(13.0, 14.0);
        assert!(!rect_circle_overlap(&rect, center, 5.0));
        assert!(rect_circle_overlap(&rect, center, 5.1));
    }

    #[test]
    fn test_circles_overlap() {
        assert!(circles_overlap(Vec2::ZERO, 10.0, Vec2::new(15.0, 0.0), 6.0));
        assert!(!circles_overlap(Vec2::ZERO, 10.0, Vec2::new(16.0, 0.0), 6.0));
    }

    #[test]
    fn test_rect_overlap_inclusive() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&Rect::new(10.5, 0.0, 5.0, 5.0)));
        assert!(a.overlaps(&Rect::around_circle(Vec2::new(12.0, 5.0), 2.0)));
    }

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(250.0, 300.0, 300.0, 60.0);
        assert!(r.contains(Vec2::new(250.0, 300.0)));
        assert!(r.contains(Vec2::new(550.0, 360.0)));
        assert!(!r.contains(Vec2::new(551.0, 330.0)));
    }
}
