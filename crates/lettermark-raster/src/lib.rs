//! CPU raster backend for `lettermark`.
//!
//! Provides a [`Pixmap`](pixmap::Pixmap) pixel surface and a
//! [`RasterCanvas`](canvas::RasterCanvas) implementing the core crate's
//! `Canvas` trait: coverage-based antialiased shape fills and strokes,
//! fontdue-backed text, and straight-alpha src-over compositing.
//!
//! # Quick start
//!
//! ```
//! use lettermark::prelude::*;
//! use lettermark_raster::{FontSystem, Pixmap, RasterCanvas};
//!
//! let tile = TextDrawable::round().build("A", Color::from_rgb_u32(0xE91E63));
//!
//! let fonts = FontSystem::new(); // load_font(...) for real text output
//! let mut pixmap = Pixmap::new(64, 64);
//! let mut canvas = RasterCanvas::new(&mut pixmap, &fonts);
//! tile.draw(&mut canvas, Rect::new(0.0, 0.0, 64.0, 64.0));
//! ```

pub mod canvas;
pub mod logging;
pub mod pixmap;
pub mod text;

pub use canvas::RasterCanvas;
pub use logging::{LoggingConfig, init_logging};
pub use pixmap::{Pixmap, PixmapError};
pub use text::{FontLoadError, FontSystem};
