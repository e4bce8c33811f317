//! Command-recording canvas.
//!
//! Responsibilities:
//! - capture resolved draw operations in insertion order
//! - apply the active translation at push time, so recorded coordinates are
//!   absolute
//! - provide deterministic text metrics so draw contracts can be exercised
//!   without font files
//!
//! Hosts can replay the recorded stream against their native drawing API;
//! tests inspect it directly.

use crate::bitmap::Bitmap;
use crate::canvas::{Canvas, TextBounds};
use crate::coords::{Rect, Vec2};
use crate::paint::{Paint, TextPaint};

// Metric model used by `measure_text`: a fixed-advance run with ascent and
// descent as fractions of the font size. Not a shaping engine.
const ADVANCE_FACTOR: f32 = 0.6;
const ASCENT_FACTOR: f32 = 0.7;
const DESCENT_FACTOR: f32 = 0.2;

/// A single recorded draw operation, in absolute coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Rect {
        rect: Rect,
        paint: Paint,
    },
    Oval {
        rect: Rect,
        paint: Paint,
    },
    RoundRect {
        rect: Rect,
        radius: f32,
        paint: Paint,
    },
    Text {
        text: String,
        origin: Vec2,
        paint: TextPaint,
    },
    Bitmap {
        origin: Vec2,
        width: u32,
        height: u32,
    },
}

/// Canvas implementation that records operations instead of rasterizing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
    /// Translation stack. The top is the current cumulative offset.
    offsets: Vec<Vec2>,
}

impl RecordingCanvas {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations in insertion order.
    #[inline]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Clears recorded operations and the translation stack. Keeps capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.ops.clear();
        self.offsets.clear();
    }

    #[inline]
    fn offset(&self) -> Vec2 {
        self.offsets.last().copied().unwrap_or(Vec2::zero())
    }

    #[inline]
    fn resolve(&self, rect: Rect) -> Rect {
        Rect::from_origin_size(rect.origin + self.offset(), rect.size)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        let rect = self.resolve(rect);
        self.ops.push(CanvasOp::Rect { rect, paint: paint.clone() });
    }

    fn draw_oval(&mut self, rect: Rect, paint: &Paint) {
        let rect = self.resolve(rect);
        self.ops.push(CanvasOp::Oval { rect, paint: paint.clone() });
    }

    fn draw_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint) {
        let rect = self.resolve(rect);
        self.ops.push(CanvasOp::RoundRect { rect, radius, paint: paint.clone() });
    }

    fn draw_text(&mut self, text: &str, origin: Vec2, paint: &TextPaint) {
        self.ops.push(CanvasOp::Text {
            text: text.to_owned(),
            origin: origin + self.offset(),
            paint: paint.clone(),
        });
    }

    fn measure_text(&mut self, text: &str, paint: &TextPaint) -> TextBounds {
        let chars = text.chars().count() as f32;
        if chars == 0.0 {
            return TextBounds::default();
        }
        TextBounds::new(
            0.0,
            -paint.size * ASCENT_FACTOR,
            paint.size * ADVANCE_FACTOR * chars,
            paint.size * DESCENT_FACTOR,
        )
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, origin: Vec2) {
        self.ops.push(CanvasOp::Bitmap {
            origin: origin + self.offset(),
            width: bitmap.width(),
            height: bitmap.height(),
        });
    }

    fn save(&mut self) -> usize {
        self.offsets.push(self.offset());
        self.offsets.len()
    }

    fn translate(&mut self, offset: Vec2) {
        match self.offsets.last_mut() {
            Some(top) => *top = *top + offset,
            // Translation without a save still applies, as on host canvases.
            None => self.offsets.push(offset),
        }
    }

    fn restore_to_count(&mut self, count: usize) {
        debug_assert!(
            count <= self.offsets.len(),
            "restore_to_count({count}) exceeds stack depth {}",
            self.offsets.len()
        );
        if count > self.offsets.len() {
            log::warn!(
                "restore_to_count({count}) exceeds translation stack depth {}",
                self.offsets.len()
            );
            return;
        }
        // `count` is the depth returned by the matching save(); popping back
        // to count - 1 entries undoes that save and everything after it.
        self.offsets.truncate(count.saturating_sub(1));
    }
}
