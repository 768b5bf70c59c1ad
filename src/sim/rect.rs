//! Integer pixel rectangles
//!
//! Every entity keeps a float position and derives its rectangle from it by
//! truncation. Rectangles are what collision and drawing read.

use glam::{IVec2, Vec2};

/// Axis-aligned rectangle in pixel coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`x`h` at a float position (truncated toward zero)
    #[inline]
    pub fn at(pos: Vec2, w: i32, h: i32) -> Self {
        Self::new(pos.x as i32, pos.y as i32, w, h)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Integer center (rounds toward the top-left)
    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// True if the interiors overlap (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Half-open point containment
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom
    pub fn inset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w - dx * 2, self.h - dy * 2)
    }

    /// Same size, centered on `center`
    pub fn centered_on(center: IVec2, w: i32, h: i32) -> Rect {
        Rect::new(center.x - w / 2, center.y - h / 2, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10, 20, 30, 41);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 61);
        assert_eq!(r.center(), IVec2::new(25, 40));
    }

    #[test]
    fn test_at_truncates() {
        let r = Rect::at(Vec2::new(12.9, -3.7), 8, 8);
        assert_eq!((r.x, r.y), (12, -3));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.intersects(&b));
        let c = Rect::new(9, 9, 10, 10);
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(IVec2::new(0, 0)));
        assert!(r.contains(IVec2::new(9, 9)));
        assert!(!r.contains(IVec2::new(10, 5)));
    }

    #[test]
    fn test_inset_and_centered_on() {
        let r = Rect::new(0, 0, 128, 128).inset(40, 40);
        assert_eq!(r, Rect::new(40, 40, 48, 48));
        let c = Rect::centered_on(IVec2::new(50, 50), 20, 10);
        assert_eq!(c, Rect::new(40, 45, 20, 10));
    }
}
