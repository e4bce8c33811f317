//! Paint model shared between drawables and canvases.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes)
//! - geometry paint (fill / stroke)
//! - text paint (face, size, alignment, tint)
//!
//! Geometry types remain in `coords`.

mod color;
mod paint;
mod text;

pub use color::Color;
pub use paint::{Paint, PaintStyle};
pub use text::{ColorFilter, TextAlign, TextPaint};
