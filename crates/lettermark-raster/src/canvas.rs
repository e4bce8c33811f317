//! CPU canvas implementation.
//!
//! Shapes are rasterized by per-pixel signed-distance coverage: a pixel's
//! center is evaluated against the shape's SDF and the distance is mapped to
//! a coverage value, binarized when the paint disables antialiasing. Strokes
//! take a band of width `stroke_width` centered on the outline.

use lettermark::bitmap::Bitmap;
use lettermark::canvas::{Canvas, TextBounds};
use lettermark::coords::{Rect, Vec2};
use lettermark::paint::{Color, ColorFilter, Paint, PaintStyle, TextAlign, TextPaint};

use crate::pixmap::Pixmap;
use crate::text::FontSystem;

/// Geometry evaluated by the SDF rasterizer.
#[derive(Debug, Copy, Clone)]
enum Geom {
    Rect,
    RoundRect { radius: f32 },
    Oval,
}

/// A `Canvas` drawing into a borrowed [`Pixmap`].
///
/// Text resolves faces through a borrowed [`FontSystem`]; drawing text with
/// no matching face loaded logs a warning and produces no pixels.
pub struct RasterCanvas<'a> {
    pixmap: &'a mut Pixmap,
    fonts: &'a FontSystem,
    /// Translation stack. The top is the current cumulative offset.
    offsets: Vec<Vec2>,
}

impl<'a> RasterCanvas<'a> {
    pub fn new(pixmap: &'a mut Pixmap, fonts: &'a FontSystem) -> Self {
        Self { pixmap, fonts, offsets: Vec::new() }
    }

    #[inline]
    fn offset(&self) -> Vec2 {
        self.offsets.last().copied().unwrap_or(Vec2::zero())
    }

    fn rasterize(&mut self, rect: Rect, geom: Geom, paint: &Paint) {
        let rect = Rect::from_origin_size(rect.origin + self.offset(), rect.size);
        // Degenerate geometry (e.g. a border inset past the center) draws nothing.
        if rect.size.x <= 0.0 || rect.size.y <= 0.0 || !rect.is_finite() {
            return;
        }

        let half_stroke = paint.stroke_width / 2.0;
        let pad = match paint.style {
            PaintStyle::Fill => 1.0,
            PaintStyle::Stroke => half_stroke.max(0.0) + 1.0,
        };

        let x0 = (rect.min().x - pad).floor() as i32;
        let y0 = (rect.min().y - pad).floor() as i32;
        let x1 = ((rect.max().x + pad).ceil() as i32).min(self.pixmap.width() as i32);
        let y1 = ((rect.max().y + pad).ceil() as i32).min(self.pixmap.height() as i32);

        let center = rect.center();
        let half = rect.size * 0.5;

        for y in y0.max(0)..y1 {
            for x in x0.max(0)..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let d = sdf(geom, p, center, half);
                let coverage = match paint.style {
                    PaintStyle::Fill => {
                        if paint.anti_alias {
                            (0.5 - d).clamp(0.0, 1.0)
                        } else if d <= 0.0 {
                            1.0
                        } else {
                            0.0
                        }
                    }
                    PaintStyle::Stroke => {
                        let band = half_stroke - d.abs();
                        if paint.anti_alias {
                            (band + 0.5).clamp(0.0, 1.0)
                        } else if band >= 0.0 {
                            1.0
                        } else {
                            0.0
                        }
                    }
                };
                self.pixmap.blend_pixel(x, y, paint.color, coverage);
            }
        }
    }
}

/// Signed distance from `p` to the outline, negative inside.
fn sdf(geom: Geom, p: Vec2, center: Vec2, half: Vec2) -> f32 {
    match geom {
        Geom::Rect => sdf_rect(p, center, half),
        Geom::RoundRect { radius } => {
            let r = radius.clamp(0.0, half.x.min(half.y));
            sdf_rect(p, center, Vec2::new(half.x - r, half.y - r)) - r
        }
        // Normalized-radius approximation; exact for circles, adequate for
        // the near-square ovals drawables produce.
        Geom::Oval => {
            let nx = (p.x - center.x) / half.x;
            let ny = (p.y - center.y) / half.y;
            ((nx * nx + ny * ny).sqrt() - 1.0) * half.x.min(half.y)
        }
    }
}

fn sdf_rect(p: Vec2, center: Vec2, half: Vec2) -> f32 {
    let qx = (p.x - center.x).abs() - half.x;
    let qy = (p.y - center.y).abs() - half.y;
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0)
}

/// Applies a tint filter by per-channel multiplication.
fn modulate(color: Color, filter: Option<ColorFilter>) -> Color {
    let Some(filter) = filter else {
        return color;
    };
    let mul = |a: u8, b: u8| ((a as u16 * b as u16) / 255) as u8;
    Color::rgba(
        mul(color.r, filter.color.r),
        mul(color.g, filter.color.g),
        mul(color.b, filter.color.b),
        mul(color.a, filter.color.a),
    )
}

impl Canvas for RasterCanvas<'_> {
    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.rasterize(rect, Geom::Rect, paint);
    }

    fn draw_oval(&mut self, rect: Rect, paint: &Paint) {
        self.rasterize(rect, Geom::Oval, paint);
    }

    fn draw_round_rect(&mut self, rect: Rect, radius: f32, paint: &Paint) {
        self.rasterize(rect, Geom::RoundRect { radius }, paint);
    }

    fn draw_text(&mut self, text: &str, origin: Vec2, paint: &TextPaint) {
        let fonts = self.fonts;
        let Some(font) = fonts.resolve(paint.font) else {
            log::warn!("draw_text: no face loaded for {:?}, skipping {:?}", paint.font, text);
            return;
        };

        let advance = fonts.advance(text, paint.font, paint.size);
        let origin = origin + self.offset();
        let mut pen = origin.x
            - match paint.align {
                TextAlign::Left => 0.0,
                TextAlign::Center => advance / 2.0,
                TextAlign::Right => advance,
            };
        let color = modulate(paint.color, paint.color_filter);
        // Fake bold: a second pass offset one pixel to the right.
        let passes: i32 = if paint.bold { 2 } else { 1 };

        for ch in text.chars() {
            let (metrics, coverage) = font.rasterize(ch, paint.size);
            let gx = (pen + metrics.xmin as f32).round() as i32;
            let gy = (origin.y - (metrics.height as f32 + metrics.ymin as f32)).round() as i32;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let cov = coverage[row * metrics.width + col] as f32 / 255.0;
                    if cov <= 0.0 {
                        continue;
                    }
                    for pass in 0..passes {
                        self.pixmap.blend_pixel(
                            gx + col as i32 + pass,
                            gy + row as i32,
                            color,
                            cov,
                        );
                    }
                }
            }
            pen += metrics.advance_width;
        }
    }

    fn measure_text(&mut self, text: &str, paint: &TextPaint) -> TextBounds {
        self.fonts.measure(text, paint.font, paint.size)
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, origin: Vec2) {
        let origin = origin + self.offset();
        let x0 = origin.x.round() as i32;
        let y0 = origin.y.round() as i32;

        for y in 0..bitmap.height() {
            for x in 0..bitmap.width() {
                if let Some([r, g, b, a]) = bitmap.pixel(x, y) {
                    self.pixmap.blend_pixel(
                        x0 + x as i32,
                        y0 + y as i32,
                        Color::rgba(r, g, b, a),
                        1.0,
                    );
                }
            }
        }
    }

    fn save(&mut self) -> usize {
        self.offsets.push(self.offset());
        self.offsets.len()
    }

    fn translate(&mut self, offset: Vec2) {
        match self.offsets.last_mut() {
            Some(top) => *top = *top + offset,
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
        self.offsets.truncate(count.saturating_sub(1));
    }
}
