use crate::font::FontId;
use crate::paint::Color;

/// Horizontal alignment of a text run relative to its pen origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A tint multiplied into the drawn text color.
///
/// Drawables store and forward this without interpreting it; canvas
/// implementations apply it at blend time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorFilter {
    pub color: Color,
}

impl ColorFilter {
    #[inline]
    pub const fn tint(color: Color) -> Self {
        Self { color }
    }
}

/// Paint for text drawing and measurement.
///
/// `font = None` selects the canvas's default face. `stroke_width` has no
/// visual effect under fill rendering; it is carried as configuration state
/// because drawables expose it as part of their observable setup.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPaint {
    pub color: Color,
    pub font: Option<FontId>,
    /// Font size in logical pixels.
    pub size: f32,
    pub bold: bool,
    pub align: TextAlign,
    pub stroke_width: f32,
    pub color_filter: Option<ColorFilter>,
}

impl TextPaint {
    #[inline]
    pub fn new(color: Color, size: f32) -> Self {
        Self {
            color,
            font: None,
            size,
            bold: false,
            align: TextAlign::Left,
            stroke_width: 0.0,
            color_filter: None,
        }
    }
}
