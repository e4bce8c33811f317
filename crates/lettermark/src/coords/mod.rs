//! Coordinate and geometry types shared between drawables and canvases.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
