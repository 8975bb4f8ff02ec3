//! Axis-aligned rectangle geometry
//!
//! Rectangles are derived on demand from entity centres and only live for the
//! duration of an overlap test or a draw call.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{EDGE_MARGIN, HITBOX_SIZE};

/// An axis-aligned box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Box of the given size centred on `center`
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    /// Standard 48x48 collision box around an entity centre
    pub fn hitbox(center: Vec2) -> Self {
        Self::centered(center, HITBOX_SIZE, HITBOX_SIZE)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Strict overlap test: shared edges do not count, empty boxes never overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// Point containment, half-open on the right and bottom edges
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Same box shrunk by `margin` on every side
    pub fn inset(&self, margin: f32) -> Self {
        Self::new(
            self.left + margin,
            self.top + margin,
            self.width - 2.0 * margin,
            self.height - 2.0 * margin,
        )
    }

    /// Bounds a sprite centre may occupy inside this region
    pub fn wander_bounds(&self) -> (Vec2, Vec2) {
        let inner = self.inset(EDGE_MARGIN);
        (
            Vec2::new(inner.left, inner.top),
            Vec2::new(inner.right(), inner.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hitbox_is_centered() {
        let r = Rect::hitbox(Vec2::new(100.0, 200.0));
        assert_eq!(r.left, 76.0);
        assert_eq!(r.top, 176.0);
        assert_eq!(r.center(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 48.0, 48.0);
        // Sharing the right edge only
        let b = Rect::new(48.0, 0.0, 48.0, 48.0);
        assert!(!a.overlaps(&b));

        let c = Rect::new(47.0, 47.0, 48.0, 48.0);
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let a = Rect::new(0.0, 0.0, 48.0, 48.0);
        let empty = Rect::new(10.0, 10.0, 0.0, 20.0);
        assert!(!a.overlaps(&empty));
    }

    #[test]
    fn test_contains_point_half_open() {
        let r = Rect::new(260.0, 200.0, 280.0, 60.0);
        assert!(r.contains_point(Vec2::new(260.0, 200.0)));
        assert!(r.contains_point(Vec2::new(400.0, 230.0)));
        assert!(!r.contains_point(Vec2::new(540.0, 230.0)));
        assert!(!r.contains_point(Vec2::new(400.0, 260.0)));
    }

    #[test]
    fn test_wander_bounds() {
        let area = Rect::new(50.0, 50.0, 300.0, 500.0);
        let (min, max) = area.wander_bounds();
        assert_eq!(min, Vec2::new(82.0, 82.0));
        assert_eq!(max, Vec2::new(318.0, 518.0));
    }
}
