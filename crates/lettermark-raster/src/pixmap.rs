//! Straight-alpha RGBA8 pixel surface with PNG import/export.

use std::fmt;
use std::io::Cursor;
use std::path::Path;

use lettermark::bitmap::Bitmap;
use lettermark::paint::Color;

/// Error from pixmap encoding, decoding, or construction.
#[derive(Debug, Clone)]
pub struct PixmapError(pub String);

impl fmt::Display for PixmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pixmap error: {}", self.0)
    }
}

impl std::error::Error for PixmapError {}

/// An owned RGBA8 surface, straight (non-premultiplied) alpha, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
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
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Overwrites every pixel with `color` (no blending).
    pub fn fill(&mut self, color: Color) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Reads the pixel at `(x, y)`, or `None` outside the surface.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some(Color::rgba(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Overwrites the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }

    /// Src-over blends `color` scaled by `coverage` (0..=1) onto `(x, y)`.
    ///
    /// Out-of-bounds coordinates and zero coverage are no-ops, so rasterizers
    /// can loop over unclamped bounding boxes.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let sa = color.a as f32 / 255.0 * coverage.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }

        let i = self.index(x as u32, y as u32);
        let da = self.data[i + 3] as f32 / 255.0;
        // sa > 0 past the early return, so out_a > 0 and dividing is safe.
        let out_a = sa + da * (1.0 - sa);

        let blend = |s: u8, d: u8| -> u8 {
            let s = s as f32;
            let d = d as f32;
            ((s * sa + d * da * (1.0 - sa)) / out_a).round().clamp(0.0, 255.0) as u8
        };

        let (r, g, b) = (
            blend(color.r, self.data[i]),
            blend(color.g, self.data[i + 1]),
            blend(color.b, self.data[i + 2]),
        );
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
        self.data[i + 3] = (out_a * 255.0).round() as u8;
    }

    // ── bitmap conversion ─────────────────────────────────────────────────

    /// Copies a drawable [`Bitmap`] payload into an owned surface.
    pub fn from_bitmap(bitmap: &Bitmap) -> Self {
        Self {
            width: bitmap.width(),
            height: bitmap.height(),
            data: bitmap.pixels().to_vec(),
        }
    }

    /// Converts the surface into an immutable [`Bitmap`] payload.
    pub fn into_bitmap(self) -> Bitmap {
        // Length invariant is maintained by construction.
        Bitmap::from_rgba(self.width, self.height, self.data)
            .unwrap_or_else(|e| unreachable!("pixmap buffer invariant broken: {e}"))
    }

    // ── PNG ───────────────────────────────────────────────────────────────

    /// Encodes the surface as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, PixmapError> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| PixmapError("buffer does not match dimensions".into()))?;
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png)
            .map_err(|e| PixmapError(e.to_string()))?;
        Ok(bytes.into_inner())
    }

    /// Encodes and writes the surface to `path`.
    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<(), PixmapError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).map_err(|e| PixmapError(e.to_string()))
    }

    /// Decodes PNG bytes into a surface.
    pub fn decode_png(bytes: &[u8]) -> Result<Self, PixmapError> {
        let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
            .map_err(|e| PixmapError(e.to_string()))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self { width, height, data: img.into_raw() })
    }
}
