//! The host drawing surface drawables render onto.
//!
//! Implementations: [`RecordingCanvas`](crate::record::RecordingCanvas) in
//! this crate (command capture, deterministic metrics) and the CPU raster
//! canvas in `lettermark-raster`.

use crate::bitmap::Bitmap;
use crate::coords::{Rect, Vec2};
use crate::paint::{Paint, TextPaint};

/// Ink bounding box of a measured text run, relative to the baseline pen
/// position. `top` is typically negative (above the baseline).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TextBounds {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.bottom - self.top
    }

    /// Exact vertical center of the ink box, as an offset from the baseline.
    #[inline]
    pub fn exact_center_y(self) -> f32 {
        (self.top + self.bottom) * 0.5
    }
}

/// A 2D drawing surface.
///
/// Geometry methods honor `paint.style` (fill or stroke). Coordinates are
/// logical pixels under the current translation; `save` / `translate` /
/// `restore_to_count` manage a translation stack the way host toolkits do.
pub trait Canvas {
    fn draw_rect(&mut self, rect: Rect, paint: &Paint);

    /// Draws the ellipse inscribed in `rect`.
    fn draw_oval(&mut self, rect: Rect, paint: &Paint);

    fn draw_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint);

    /// Draws a single text run. `origin` is the baseline pen position;
    /// `paint.align` positions the run relative to `origin.x`.
    fn draw_text(&mut self, text: &str, origin: Vec2, paint: &TextPaint);

    /// Measures the ink bounds of `text` without drawing it.
    fn measure_text(&mut self, text: &str, paint: &TextPaint) -> TextBounds;

    /// Blits a bitmap with its top-left corner at `origin`.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, origin: Vec2);

    /// Saves the current translation and returns a count to restore to.
    fn save(&mut self) -> usize;

    /// Offsets all subsequent drawing by `offset`.
    fn translate(&mut self, offset: Vec2);

    /// Restores the translation stack to a count returned by [`save`](Self::save).
    fn restore_to_count(&mut self, count: usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_center_y_is_midpoint_of_ink_box() {
        let b = TextBounds::new(0.0, -10.0, 20.0, 4.0);
        assert_eq!(b.exact_center_y(), -3.0);
        assert_eq!(b.width(), 20.0);
        assert_eq!(b.height(), 14.0);
    }

    #[test]
    fn empty_bounds_center_is_zero() {
        assert_eq!(TextBounds::default().exact_center_y(), 0.0);
    }
}
