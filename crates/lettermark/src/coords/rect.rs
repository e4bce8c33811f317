use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Shrinks the rectangle by `d` on every side.
    ///
    /// A negative `d` grows the rectangle. The size may go negative; callers
    /// that care should check [`is_empty`](Self::is_empty) afterwards.
    #[inline]
    pub fn inset(self, d: f32) -> Self {
        Rect::new(
            self.origin.x + d,
            self.origin.y + d,
            self.size.x - 2.0 * d,
            self.size.y - 2.0 * d,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < (self.origin.x + self.size.x)
            && p.y < (self.origin.y + self.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_every_side() {
        let rect = r(10.0, 20.0, 100.0, 50.0).inset(3.0);
        assert_eq!(rect, r(13.0, 23.0, 94.0, 44.0));
    }

    #[test]
    fn inset_zero_is_identity() {
        let rect = r(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.inset(0.0), rect);
    }

    #[test]
    fn inset_negative_grows() {
        let rect = r(10.0, 10.0, 10.0, 10.0).inset(-2.0);
        assert_eq!(rect, r(8.0, 8.0, 14.0, 14.0));
    }

    #[test]
    fn inset_past_center_is_empty() {
        assert!(r(0.0, 0.0, 4.0, 4.0).inset(3.0).is_empty());
    }

    // ── center / extents ──────────────────────────────────────────────────

    #[test]
    fn center_of_offset_rect() {
        let c = r(10.0, 20.0, 40.0, 60.0).center();
        assert_eq!(c, Vec2::new(30.0, 50.0));
    }

    #[test]
    fn min_max_span_the_rect() {
        let rect = r(10.0, 20.0, 40.0, 60.0);
        assert_eq!(rect.min(), Vec2::new(10.0, 20.0));
        assert_eq!(rect.max(), Vec2::new(50.0, 80.0));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive_bottom_right_exclusive() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(!rect.contains(Vec2::new(10.0, 10.0)));
    }

}
