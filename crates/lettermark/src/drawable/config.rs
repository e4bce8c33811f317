use std::sync::Arc;

use crate::bitmap::Bitmap;
use crate::font::FontId;
use crate::paint::Color;
use crate::shape::Shape;

/// Immutable configuration a [`TextDrawable`](super::TextDrawable) is built
/// from.
///
/// Negative `width`, `height`, and `font_size` are sentinels meaning "resolve
/// from the draw bounds"; they are never validated or rejected. When both
/// `text` and `bitmap` are set, the bitmap wins and text is not rendered.
#[derive(Debug, Clone)]
pub struct DrawableConfig {
    pub shape: Shape,
    pub width: i32,
    pub height: i32,
    pub text: Option<String>,
    pub uppercase: bool,
    pub fill_color: Color,
    pub text_color: Color,
    pub font: Option<FontId>,
    pub font_size: i32,
    pub bold: bool,
    pub border_thickness: i32,
    /// `None` derives a darker shade of `fill_color`.
    pub border_color: Option<Color>,
    pub bitmap: Option<Arc<Bitmap>>,
}

impl Default for DrawableConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Rect,
            width: -1,
            height: -1,
            text: None,
            uppercase: false,
            fill_color: Color::GRAY,
            text_color: Color::WHITE,
            font: None,
            font_size: -1,
            bold: false,
            border_thickness: 0,
            border_color: None,
            bitmap: None,
        }
    }
}
