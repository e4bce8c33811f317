/// Scale applied per channel by [`Color::darker_shade`].
const SHADE_FACTOR: f32 = 0.9;

/// Straight (non-premultiplied) sRGB color with 8-bit channels.
///
/// This matches the representation drawable configurations are written in
/// (hex literals, palette tables). Canvas implementations convert to whatever
/// their blending pipeline needs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(136, 136, 136);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns the same color with each RGB channel scaled by 0.9 and
    /// truncated toward zero. Alpha is unaffected.
    ///
    /// Used to derive a border color when none is configured explicitly.
    #[inline]
    pub fn darker_shade(self) -> Self {
        Self {
            r: (self.r as f32 * SHADE_FACTOR) as u8,
            g: (self.g as f32 * SHADE_FACTOR) as u8,
            b: (self.b as f32 * SHADE_FACTOR) as u8,
            a: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── darker_shade ──────────────────────────────────────────────────────

    #[test]
    fn darker_shade_scales_each_channel() {
        let c = Color::rgb(0x11, 0x22, 0x33).darker_shade();
        // 17 * 0.9 = 15.3 → 15, 34 * 0.9 = 30.6 → 30, 51 * 0.9 = 45.9 → 45
        assert_eq!(c, Color::rgb(15, 30, 45));
    }

    #[test]
    fn darker_shade_truncates_toward_zero() {
        // 255 * 0.9 = 229.5 → 229, not 230.
        assert_eq!(Color::rgb(255, 255, 255).darker_shade(), Color::rgb(229, 229, 229));
    }

    #[test]
    fn darker_shade_leaves_alpha_untouched() {
        let c = Color::rgba(100, 100, 100, 42).darker_shade();
        assert_eq!(c.a, 42);
    }

    #[test]
    fn darker_shade_of_black_is_black() {
        assert_eq!(Color::BLACK.darker_shade(), Color::BLACK);
    }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn from_rgb_u32_unpacks_channels() {
        assert_eq!(Color::from_rgb_u32(0x112233), Color::rgb(0x11, 0x22, 0x33));
    }

    #[test]
    fn with_alpha_replaces_only_alpha() {
        let c = Color::rgb(1, 2, 3).with_alpha(128);
        assert_eq!(c, Color::rgba(1, 2, 3, 128));
    }
}
