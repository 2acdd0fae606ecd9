//! Axis-aligned rectangles for gates and the flyer hit-box
//!
//! Screen space: origin at the top-left corner, +y points down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle stored as top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of `size` whose center is `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    /// Rectangle of `size` whose top edge midpoint is `mid_top`
    pub fn from_mid_top(mid_top: Vec2, size: Vec2) -> Self {
        Self::new(mid_top.x - size.x / 2.0, mid_top.y, size.x, size.y)
    }

    /// Rectangle of `size` whose bottom edge midpoint is `mid_bottom`
    pub fn from_mid_bottom(mid_bottom: Vec2, size: Vec2) -> Self {
        Self::new(
            mid_bottom.x - size.x / 2.0,
            mid_bottom.y - size.y,
            size.x,
            size.y,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.top + self.height / 2.0)
    }

    /// Shift horizontally by `dx`
    #[inline]
    pub fn translate_x(&mut self, dx: f32) {
        self.left += dx;
    }

    /// True if the interiors overlap. Rectangles that only share an edge do
    /// not intersect, and an empty rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0 {
            return false;
        }
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors() {
        let size = Vec2::new(54.0, 400.0);

        let lower = Rect::from_mid_top(Vec2::new(588.0, 300.0), size);
        assert_eq!(lower.top, 300.0);
        assert_eq!(lower.center_x(), 588.0);
        assert_eq!(lower.left, 561.0);

        let upper = Rect::from_mid_bottom(Vec2::new(588.0, 200.0), size);
        assert_eq!(upper.bottom(), 200.0);
        assert_eq!(upper.top, -200.0);
        assert_eq!(upper.center_x(), 588.0);

        let flyer = Rect::from_center(Vec2::new(50.0, 256.0), Vec2::new(34.0, 24.0));
        assert_eq!(flyer.center(), Vec2::new(50.0, 256.0));
        assert_eq!(flyer.top, 244.0);
        assert_eq!(flyer.right(), 67.0);
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(5.0, 5.0, 0.0, 3.0)));
    }

    #[test]
    fn test_translate_keeps_size() {
        let mut r = Rect::new(100.0, 20.0, 54.0, 400.0);
        r.translate_x(-2.0);
        assert_eq!(r.left, 98.0);
        assert_eq!(r.width, 54.0);
        assert_eq!(r.center_x(), 125.0);
    }
}
