use crate::paint::Color;

/// Whether a paint fills geometry or strokes its outline.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Paint for geometry drawing.
///
/// `stroke_width` is only meaningful under [`PaintStyle::Stroke`]; canvases
/// ignore it for fills.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub anti_alias: bool,
}

impl Paint {
    /// Antialiased fill paint.
    #[inline]
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            anti_alias: true,
        }
    }

    /// Antialiased stroke paint.
    #[inline]
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width: width,
            anti_alias: true,
        }
    }

    #[inline]
    pub fn anti_alias(mut self, on: bool) -> Self {
        self.anti_alias = on;
        self
    }
}
