use std::sync::Arc;

use crate::bitmap::Bitmap;
use crate::font::FontId;
use crate::paint::Color;
use crate::shape::Shape;

use super::{DrawableConfig, TextDrawable};

/// Fluent configuration for [`TextDrawable`].
///
/// Setters never validate ranges; negative width/height/font-size are
/// sentinels meaning "resolve from the draw bounds". Shape selectors may be
/// called in any order before a terminal `build*`; the last call wins.
///
/// Terminal calls snapshot the current configuration, so one builder can
/// produce any number of independent drawables.
///
/// # Example
/// ```
/// use lettermark::drawable::TextDrawable;
/// use lettermark::paint::Color;
///
/// let tile = TextDrawable::builder()
///     .round_rect(10.0)
///     .border(4)
///     .bold()
///     .build("B", Color::from_rgb_u32(0x112233));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextDrawableBuilder {
    config: DrawableConfig,
}

impl TextDrawableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── configuration ─────────────────────────────────────────────────────

    pub fn width(mut self, width: i32) -> Self {
        self.config.width = width;
        self
    }

    pub fn height(mut self, height: i32) -> Self {
        self.config.height = height;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.config.text_color = color;
        self
    }

    /// Border stroke thickness. Zero (the default) draws no border; the
    /// border color stays derived unless [`border_color`](Self::border_color)
    /// is also set.
    pub fn border(mut self, thickness: i32) -> Self {
        self.config.border_thickness = thickness;
        self
    }

    /// Explicit border color, replacing the derived darker fill shade.
    pub fn border_color(mut self, color: Color) -> Self {
        self.config.border_color = Some(color);
        self
    }

    pub fn font(mut self, font: FontId) -> Self {
        self.config.font = Some(font);
        self
    }

    /// Font size in logical pixels. Negative (the default) selects
    /// `min(width, height) / 2` at draw time.
    pub fn font_size(mut self, size: i32) -> Self {
        self.config.font_size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.config.bold = true;
        self
    }

    /// Upper-cases the label before rendering.
    pub fn uppercase(mut self) -> Self {
        self.config.uppercase = true;
        self
    }

    // ── shape selection ───────────────────────────────────────────────────

    pub fn rect(mut self) -> Self {
        self.config.shape = Shape::Rect;
        self
    }

    pub fn round(mut self) -> Self {
        self.config.shape = Shape::Circle;
        self
    }

    pub fn round_rect(mut self, radius: f32) -> Self {
        self.config.shape = Shape::RoundedRect { radius };
        self
    }

    // ── terminal operations ───────────────────────────────────────────────

    /// Builds a drawable rendering `text` over `color` with the configured
    /// shape.
    pub fn build(&self, text: impl Into<String>, color: Color) -> TextDrawable {
        let mut config = self.config.clone();
        config.text = Some(text.into());
        config.fill_color = color;
        TextDrawable::new(config)
    }

    /// Builds a drawable rendering `bitmap` over `color`. Any text configured
    /// earlier is suppressed entirely.
    pub fn build_bitmap(&self, bitmap: Arc<Bitmap>, color: Color) -> TextDrawable {
        let mut config = self.config.clone();
        config.bitmap = Some(bitmap);
        config.fill_color = color;
        TextDrawable::new(config)
    }

    pub fn build_rect(self, text: impl Into<String>, color: Color) -> TextDrawable {
        self.rect().build(text, color)
    }

    pub fn build_round(self, text: impl Into<String>, color: Color) -> TextDrawable {
        self.round().build(text, color)
    }

    pub fn build_round_rect(
        self,
        text: impl Into<String>,
        color: Color,
        radius: f32,
    ) -> TextDrawable {
        self.round_rect(radius).build(text, color)
    }

    pub fn build_bitmap_rect(self, bitmap: Arc<Bitmap>, color: Color) -> TextDrawable {
        self.rect().build_bitmap(bitmap, color)
    }

    pub fn build_bitmap_round(self, bitmap: Arc<Bitmap>, color: Color) -> TextDrawable {
        self.round().build_bitmap(bitmap, color)
    }

    pub fn build_bitmap_round_rect(
        self,
        bitmap: Arc<Bitmap>,
        color: Color,
        radius: f32,
    ) -> TextDrawable {
        self.round_rect(radius).build_bitmap(bitmap, color)
    }
}
