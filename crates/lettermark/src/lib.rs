//! Lettermark — shape tiles with centered labels or bitmaps.
//!
//! A [`TextDrawable`](drawable::TextDrawable) fills a rectangle, rounded
//! rectangle, or circle, strokes an optional border in a derived darker
//! shade, and centers either a text label or a bitmap inside the bounds it is
//! given at draw time. It renders through the [`Canvas`](canvas::Canvas)
//! abstraction, so hosts adapt it to their native drawing API; the
//! `lettermark-raster` crate ships a CPU implementation.
//!
//! # Quick start
//!
//! ```
//! use lettermark::prelude::*;
//!
//! let tile = TextDrawable::round()
//!     .border(4)
//!     .uppercase()
//!     .build("jd", Color::from_rgb_u32(0x3F51B5));
//!
//! let mut canvas = RecordingCanvas::new();
//! tile.draw(&mut canvas, Rect::new(0.0, 0.0, 48.0, 48.0));
//! ```

pub mod bitmap;
pub mod canvas;
pub mod coords;
pub mod drawable;
pub mod font;
pub mod paint;
pub mod record;
pub mod shape;

/// The types most hosts need — import this in integration code.
pub mod prelude {
    pub use crate::bitmap::{Bitmap, BitmapError};
    pub use crate::canvas::{Canvas, TextBounds};
    pub use crate::coords::{Rect, Vec2};
    pub use crate::drawable::{
        Drawable, DrawableConfig, Opacity, TextDrawable, TextDrawableBuilder,
    };
    pub use crate::font::FontId;
    pub use crate::paint::{Color, ColorFilter, Paint, PaintStyle, TextAlign, TextPaint};
    pub use crate::record::{CanvasOp, RecordingCanvas};
    pub use crate::shape::Shape;
}
