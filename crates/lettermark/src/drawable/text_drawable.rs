use std::sync::Arc;

use crate::bitmap::Bitmap;
use crate::canvas::Canvas;
use crate::coords::{Rect, Vec2};
use crate::paint::{ColorFilter, Paint, TextAlign, TextPaint};
use crate::shape::Shape;

use super::{Drawable, DrawableConfig, Opacity, TextDrawableBuilder};

/// The visual payload: exactly one of a label or a bitmap.
#[derive(Debug, Clone)]
enum Payload {
    Text(String),
    Bitmap(Arc<Bitmap>),
}

/// A shape tile with a centered label or bitmap and an optional border.
///
/// Paint state is derived once from a [`DrawableConfig`]; draw calls are
/// read-only apart from the host-facing alpha / color-filter overrides.
///
/// # Example
/// ```
/// use lettermark::coords::Rect;
/// use lettermark::drawable::{Drawable, TextDrawable};
/// use lettermark::paint::Color;
/// use lettermark::record::RecordingCanvas;
///
/// let tile = TextDrawable::round().uppercase().build("ab", Color::from_rgb_u32(0x3F51B5));
/// let mut canvas = RecordingCanvas::new();
/// tile.draw(&mut canvas, Rect::new(0.0, 0.0, 48.0, 48.0));
/// ```
#[derive(Debug, Clone)]
pub struct TextDrawable {
    shape: Shape,
    width: i32,
    height: i32,
    font_size: i32,
    border_thickness: i32,
    payload: Payload,
    fill_paint: Paint,
    text_paint: TextPaint,
    border_paint: Paint,
}

impl TextDrawable {
    /// Starts an empty builder (gray rectangle, white centered text).
    pub fn builder() -> TextDrawableBuilder {
        TextDrawableBuilder::new()
    }

    /// Builder preset to a plain rectangle.
    pub fn rect() -> TextDrawableBuilder {
        TextDrawableBuilder::new().rect()
    }

    /// Builder preset to a circle.
    pub fn round() -> TextDrawableBuilder {
        TextDrawableBuilder::new().round()
    }

    /// Builder preset to a rounded rectangle with uniform `radius`.
    pub fn round_rect(radius: f32) -> TextDrawableBuilder {
        TextDrawableBuilder::new().round_rect(radius)
    }

    /// Derives paint state from `config`. Never fails; out-of-range values
    /// pass through to the canvas uninspected.
    pub fn new(config: DrawableConfig) -> Self {
        // Bitmap presence suppresses the label entirely.
        let payload = match config.bitmap {
            Some(bitmap) => Payload::Bitmap(bitmap),
            None => {
                let text = config.text.unwrap_or_default();
                Payload::Text(if config.uppercase { text.to_uppercase() } else { text })
            }
        };

        let mut text_paint = TextPaint::new(config.text_color, config.font_size as f32);
        text_paint.font = config.font;
        text_paint.bold = config.bold;
        text_paint.align = TextAlign::Center;
        // Inert under fill rendering; kept as observable configuration state.
        text_paint.stroke_width = config.border_thickness as f32;

        let border_color = config
            .border_color
            .unwrap_or_else(|| config.fill_color.darker_shade());

        Self {
            shape: config.shape,
            width: config.width,
            height: config.height,
            font_size: config.font_size,
            border_thickness: config.border_thickness,
            payload,
            fill_paint: Paint::fill(config.fill_color),
            text_paint,
            border_paint: Paint::stroke(border_color, config.border_thickness as f32),
        }
    }

    fn draw_border(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        let inset = (self.border_thickness as f32 / 2.0).ceil();
        let rect = bounds.inset(inset);
        match self.shape {
            Shape::Circle => canvas.draw_oval(rect, &self.border_paint),
            Shape::RoundedRect { radius } => {
                canvas.draw_round_rect(rect, radius, &self.border_paint)
            }
            Shape::Rect => canvas.draw_rect(rect, &self.border_paint),
        }
    }
}

impl Drawable for TextDrawable {
    fn draw(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        match self.shape {
            Shape::Rect => canvas.draw_rect(bounds, &self.fill_paint),
            Shape::Circle => canvas.draw_oval(bounds, &self.fill_paint),
            Shape::RoundedRect { radius } => {
                canvas.draw_round_rect(bounds, radius, &self.fill_paint)
            }
        }

        if self.border_thickness > 0 {
            self.draw_border(canvas, bounds);
        }

        let width = if self.width < 0 { bounds.width() } else { self.width as f32 };
        let height = if self.height < 0 { bounds.height() } else { self.height as f32 };

        match &self.payload {
            Payload::Text(text) => {
                let count = canvas.save();
                canvas.translate(bounds.origin);

                let font_size = if self.font_size < 0 {
                    (width.min(height) as i32) / 2
                } else {
                    self.font_size
                };
                // Transient size assignment; the stored paint keeps the
                // configured sentinel.
                let mut paint = self.text_paint.clone();
                paint.size = font_size as f32;

                let ink = canvas.measure_text(text, &paint);
                canvas.draw_text(
                    text,
                    Vec2::new(width / 2.0, height / 2.0 - ink.exact_center_y()),
                    &paint,
                );

                canvas.restore_to_count(count);
            }
            Payload::Bitmap(bitmap) => {
                // Bitmaps center in the effective size without translating to
                // the bounds origin.
                canvas.draw_bitmap(
                    bitmap,
                    Vec2::new(
                        (width - bitmap.width() as f32) / 2.0,
                        (height - bitmap.height() as f32) / 2.0,
                    ),
                );
            }
        }
    }

    fn intrinsic_width(&self) -> i32 {
        self.width
    }

    fn intrinsic_height(&self) -> i32 {
        self.height
    }

    fn opacity(&self) -> Opacity {
        Opacity::Translucent
    }

    /// Forwards only to the text paint; fill and border are unaffected.
    fn set_alpha(&mut self, alpha: u8) {
        self.text_paint.color = self.text_paint.color.with_alpha(alpha);
    }

    /// Forwards only to the text paint; fill and border are unaffected.
    fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        self.text_paint.color_filter = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, PaintStyle};
    use crate::record::{CanvasOp, RecordingCanvas};

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    fn ops_for(drawable: &TextDrawable, bounds: Rect) -> Vec<CanvasOp> {
        let mut canvas = RecordingCanvas::new();
        drawable.draw(&mut canvas, bounds);
        canvas.ops().to_vec()
    }

    fn bitmap(w: u32, h: u32) -> Arc<Bitmap> {
        Arc::new(Bitmap::from_rgba(w, h, vec![255u8; (w * h * 4) as usize]).unwrap())
    }

    // ── default build ─────────────────────────────────────────────────────

    #[test]
    fn default_build_fills_rect_and_centers_text() {
        let red = Color::rgb(255, 0, 0);
        let tile = TextDrawable::builder().build("A", red);
        let ops = ops_for(&tile, BOUNDS);

        assert_eq!(ops.len(), 2, "fill + text, no border");
        match &ops[0] {
            CanvasOp::Rect { rect, paint } => {
                assert_eq!(*rect, BOUNDS);
                assert_eq!(paint.color, red);
                assert_eq!(paint.style, PaintStyle::Fill);
            }
            op => panic!("unexpected op: {op:?}"),
        }
        match &ops[1] {
            CanvasOp::Text { text, origin, paint } => {
                assert_eq!(text, "A");
                assert_eq!(paint.color, Color::WHITE);
                assert_eq!(paint.align, TextAlign::Center);
                // Auto font size: min(100, 100) / 2.
                assert_eq!(paint.size, 50.0);
                assert_eq!(origin.x, 50.0);
            }
            op => panic!("unexpected op: {op:?}"),
        }
    }

    #[test]
    fn text_centers_on_measured_ink_box() {
        let tile = TextDrawable::builder().build("A", Color::GRAY);
        let ops = ops_for(&tile, BOUNDS);

        // RecordingCanvas metrics at size 50: top = -35, bottom = 10,
        // exact center = -12.5, so the baseline lands at 50 + 12.5.
        match &ops[1] {
            CanvasOp::Text { origin, .. } => assert_eq!(origin.y, 62.5),
            op => panic!("unexpected op: {op:?}"),
        }
    }

    #[test]
    fn text_coordinates_are_relative_to_bounds_origin() {
        let tile = TextDrawable::builder().build("A", Color::GRAY);
        let ops = ops_for(&tile, Rect::new(200.0, 300.0, 100.0, 100.0));

        match &ops[1] {
            CanvasOp::Text { origin, .. } => {
                assert_eq!(origin.x, 250.0);
                assert_eq!(origin.y, 362.5);
            }
            op => panic!("unexpected op: {op:?}"),
        }
    }

    // ── border ────────────────────────────────────────────────────────────

    #[test]
    fn border_strokes_inset_rect_with_derived_shade() {
        let tile = TextDrawable::round_rect(10.0)
            .border(4)
            .build("B", Color::from_rgb_u32(0x112233));
        let ops = ops_for(&tile, BOUNDS);

        assert_eq!(ops.len(), 3, "fill + border + text");
        match &ops[1] {
            CanvasOp::RoundRect { rect, radius, paint } => {
                // ceil(4 / 2) = 2 on every side.
                assert_eq!(*rect, Rect::new(2.0, 2.0, 96.0, 96.0));
                assert_eq!(*radius, 10.0);
                assert_eq!(paint.style, PaintStyle::Stroke);
                assert_eq!(paint.stroke_width, 4.0);
                assert_eq!(paint.color, Color::from_rgb_u32(0x112233).darker_shade());
            }
            op => panic!("unexpected op: {op:?}"),
        }
    }

    #[test]
    fn odd_border_thickness_rounds_inset_up() {
        let tile = TextDrawable::rect().border(3).build("x", Color::GRAY);
        let ops = ops_for(&tile, BOUNDS);

        match &ops[1] {
            CanvasOp::Rect { rect, .. } => assert_eq!(*rect, Rect::new(2.0, 2.0, 96.0, 96.0)),
            op => panic!("unexpected op: {op:?}"),
        }
    }

    #[test]
    fn explicit_border_color_overrides_shade() {
        let tile = TextDrawable::rect()
            .border(2)
            .border_color(Color::BLACK)
            .build("x", Color::WHITE);
        let ops = ops_for(&tile, BOUNDS);

        match &ops[1] {
            CanvasOp::Rect { paint, .. } => assert_eq!(paint.color, Color::BLACK),
            op => panic!("unexpected op: {op:?}"),
        }
    }

    #[test]
    fn zero_thickness_draws_no_border() {
        let tile = TextDrawable::rect().build("x", Color::GRAY);
        let ops = ops_for(&tile, BOUNDS);
        assert_eq!(ops.len(), 2);
    }

    #[test]
    fn circle_border_strokes_oval() {
        let tile = TextDrawable::round().border(2).build("x", Color::GRAY);
        let ops = ops_for(&tile, BOUNDS);

        assert!(matches!(ops[0], CanvasOp::Oval { .. }), "circular fill");
        match &ops[1] {
            CanvasOp::Oval { rect, paint } => {
                assert_eq!(*rect, Rect::new(1.0, 1.0, 98.0, 98.0));
                assert_eq!(paint.style, PaintStyle::Stroke);
            }
            op => panic!("unexpected op: {op:?}"),
        }
    }

    // ── bitmap payload ────────────────────────────────────────────────────

    #[test]
    fn bitmap_suppresses_text_and_centers() {
        let blue = Color::rgb(0, 0, 255);
        let tile = TextDrawable::round().build_bitmap(bitmap(20, 10), blue);
        let ops = ops_for(&tile, BOUNDS);

        assert_eq!(ops.len(), 2);
        match &ops[0] {
            CanvasOp::Oval { paint, .. } => assert_eq!(paint.color, blue),
            op => panic!("unexpected op: {op:?}"),
        }
        match &ops[1] {
            CanvasOp::Bitmap { origin, width, height } => {
                assert_eq!((*width, *height), (20, 10));
                assert_eq!(*origin, Vec2::new(40.0, 45.0));
            }
            op => panic!("unexpected op: {op:?}"),
        }
        assert!(!ops.iter().any(|op| matches!(op, CanvasOp::Text { .. })));
    }

    // ── configured size and font ──────────────────────────────────────────

    #[test]
    fn configured_size_overrides_bounds() {
        let tile = TextDrawable::rect().width(40).height(20).build("x", Color::GRAY);
        let ops = ops_for(&tile, BOUNDS);

        match &ops[1] {
            CanvasOp::Text { origin, paint, .. } => {
                assert_eq!(origin.x, 20.0, "centered in configured width");
                assert_eq!(paint.size, 10.0, "min(40, 20) / 2");
            }
            op => panic!("unexpected op: {op:?}"),
        }
    }

    #[test]
    fn explicit_font_size_wins_over_auto() {
        let tile = TextDrawable::rect().font_size(13).build("x", Color::GRAY);
        let ops = ops_for(&tile, BOUNDS);

        match &ops[1] {
            CanvasOp::Text { paint, .. } => assert_eq!(paint.size, 13.0),
            op => panic!("unexpected op: {op:?}"),
        }
    }

    #[test]
    fn text_paint_carries_border_thickness_as_stroke_width() {
        let tile = TextDrawable::rect().border(4).build("x", Color::GRAY);
        let ops = ops_for(&tile, BOUNDS);

        match &ops[2] {
            CanvasOp::Text { paint, .. } => assert_eq!(paint.stroke_width, 4.0),
            op => panic!("unexpected op: {op:?}"),
        }
    }

    // ── label handling ────────────────────────────────────────────────────

    #[test]
    fn uppercase_folds_label() {
        let tile = TextDrawable::builder().uppercase().build("abc", Color::GRAY);
        let ops = ops_for(&tile, BOUNDS);

        match &ops[1] {
            CanvasOp::Text { text, .. } => assert_eq!(text, "ABC"),
            op => panic!("unexpected op: {op:?}"),
        }
    }

    #[test]
    fn missing_text_draws_empty_string() {
        let tile = TextDrawable::new(DrawableConfig::default());
        let ops = ops_for(&tile, BOUNDS);

        match &ops[1] {
            CanvasOp::Text { text, .. } => assert_eq!(text, ""),
            op => panic!("unexpected op: {op:?}"),
        }
    }

    // ── host-facing contract ──────────────────────────────────────────────

    #[test]
    fn intrinsic_size_reports_sentinel_verbatim() {
        let tile = TextDrawable::builder().build("x", Color::GRAY);
        assert_eq!(tile.intrinsic_width(), -1);
        assert_eq!(tile.intrinsic_height(), -1);

        let sized = TextDrawable::builder().width(64).height(32).build("x", Color::GRAY);
        assert_eq!(sized.intrinsic_width(), 64);
        assert_eq!(sized.intrinsic_height(), 32);
    }

    #[test]
    fn opacity_is_always_translucent() {
        let tile = TextDrawable::builder().build("x", Color::GRAY);
        assert_eq!(tile.opacity(), Opacity::Translucent);
    }

    #[test]
    fn alpha_and_filter_touch_only_the_text_paint() {
        let mut tile = TextDrawable::rect().border(2).build("x", Color::GRAY);
        tile.set_alpha(128);
        tile.set_color_filter(Some(ColorFilter::tint(Color::rgb(0, 255, 0))));

        let ops = ops_for(&tile, BOUNDS);
        match &ops[0] {
            CanvasOp::Rect { paint, .. } => assert_eq!(paint.color.a, 255),
            op => panic!("unexpected op: {op:?}"),
        }
        match &ops[1] {
            CanvasOp::Rect { paint, .. } => assert_eq!(paint.color.a, 255),
            op => panic!("unexpected op: {op:?}"),
        }
        match &ops[2] {
            CanvasOp::Text { paint, .. } => {
                assert_eq!(paint.color.a, 128);
                assert_eq!(paint.color_filter, Some(ColorFilter::tint(Color::rgb(0, 255, 0))));
            }
            op => panic!("unexpected op: {op:?}"),
        }
    }

    #[test]
    fn draw_is_repeatable() {
        let tile = TextDrawable::round_rect(6.0).border(2).build("ab", Color::GRAY);
        let first = ops_for(&tile, BOUNDS);
        let second = ops_for(&tile, BOUNDS);
        assert_eq!(first, second);
    }
}
