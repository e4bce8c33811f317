use std::fmt;

/// Error returned by [`Bitmap::from_rgba`].
#[derive(Debug, Clone)]
pub struct BitmapError(pub String);

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bitmap error: {}", self.0)
    }
}

impl std::error::Error for BitmapError {}

/// Immutable straight-alpha RGBA8 pixel payload.
///
/// Drawables hold bitmaps behind an `Arc` for their lifetime; they never copy
/// or mutate the pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Wraps raw RGBA8 pixel data, row-major, 4 bytes per pixel.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(BitmapError(format!(
                "pixel buffer is {} bytes, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self { width, height, pixels })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the RGBA bytes of the pixel at `(x, y)`, or `None` outside the
    /// bitmap.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_accepts_matching_buffer() {
        let bmp = Bitmap::from_rgba(2, 2, vec![0u8; 16]).unwrap();
        assert_eq!(bmp.width(), 2);
        assert_eq!(bmp.height(), 2);
    }

    #[test]
    fn from_rgba_rejects_short_buffer() {
        assert!(Bitmap::from_rgba(2, 2, vec![0u8; 15]).is_err());
    }

    #[test]
    fn pixel_reads_row_major() {
        let mut px = vec![0u8; 16];
        px[4..8].copy_from_slice(&[1, 2, 3, 4]); // (1, 0)
        let bmp = Bitmap::from_rgba(2, 2, px).unwrap();
        assert_eq!(bmp.pixel(1, 0), Some([1, 2, 3, 4]));
        assert_eq!(bmp.pixel(2, 0), None);
    }
}
