use std::fmt;

use lettermark::canvas::TextBounds;
use lettermark::font::FontId;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. A paint's `font: None` resolves to the
/// first loaded face; with no fonts loaded, measurement returns empty bounds
/// and drawing is skipped.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the face in text paints.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId::new(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Resolves a paint's face: an explicit id, or the default (first loaded).
    pub(crate) fn resolve(&self, id: Option<FontId>) -> Option<&fontdue::Font> {
        match id {
            Some(id) => self.fonts.get(id.index()),
            None => self.fonts.first(),
        }
    }

    /// Total advance width of a single LTR run, in logical pixels.
    pub fn advance(&self, text: &str, id: Option<FontId>, size: f32) -> f32 {
        let Some(font) = self.resolve(id) else {
            return 0.0;
        };
        text.chars().map(|ch| font.metrics(ch, size).advance_width).sum()
    }

    /// Computes the ink bounding box of a single LTR run, relative to the
    /// baseline pen position (`top` negative above the baseline).
    ///
    /// Runs without ink (empty, whitespace-only, or no font loaded) report a
    /// zero-height box spanning the advance width.
    pub fn measure(&self, text: &str, id: Option<FontId>, size: f32) -> TextBounds {
        let Some(font) = self.resolve(id) else {
            return TextBounds::default();
        };

        let mut pen = 0.0f32;
        let mut left = f32::INFINITY;
        let mut right = f32::NEG_INFINITY;
        let mut top = f32::INFINITY;
        let mut bottom = f32::NEG_INFINITY;

        for ch in text.chars() {
            let m = font.metrics(ch, size);
            if m.width > 0 && m.height > 0 {
                // fontdue metrics are y-up from the baseline; TextBounds is y-down.
                left = left.min(pen + m.xmin as f32);
                right = right.max(pen + m.xmin as f32 + m.width as f32);
                top = top.min(-(m.ymin as f32 + m.height as f32));
                bottom = bottom.max(-m.ymin as f32);
            }
            pen += m.advance_width;
        }

        if left > right {
            return TextBounds::new(0.0, 0.0, pen, 0.0);
        }
        TextBounds::new(left, top, right, bottom)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Behavior without font files; parsing and glyph metrics are fontdue's
    // contract, exercised by hosts that load real faces.

    #[test]
    fn load_font_rejects_garbage() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(b"definitely not a font").is_err());
        assert!(fonts.is_empty());
    }

    #[test]
    fn measure_without_fonts_is_empty() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.measure("hello", None, 16.0), TextBounds::default());
        assert_eq!(fonts.advance("hello", None, 16.0), 0.0);
    }

    #[test]
    fn unknown_font_id_resolves_to_none() {
        let fonts = FontSystem::new();
        assert!(fonts.resolve(Some(FontId::new(3))).is_none());
    }
}
