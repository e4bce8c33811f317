//! The drawable capability and the text/bitmap tile drawable.
//!
//! Hosts adapt [`Drawable`] to their native drawable contract; the drawable
//! itself only needs a [`Canvas`] and a destination rectangle per draw call.

mod builder;
mod config;
mod text_drawable;

pub use builder::TextDrawableBuilder;
pub use config::DrawableConfig;
pub use text_drawable::TextDrawable;

use crate::canvas::Canvas;
use crate::coords::Rect;
use crate::paint::ColorFilter;

/// How a drawable's output composites over what is already on the surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Opacity {
    Opaque,
    Translucent,
    Transparent,
}

/// Anything that can render itself into a rectangular region of a canvas.
///
/// Drawables are stateless across draw calls except for the two late-bound
/// overrides hosts are allowed to apply: alpha and color filter.
pub trait Drawable {
    /// Renders into `bounds` on `canvas`.
    fn draw(&self, canvas: &mut dyn Canvas, bounds: Rect);

    /// Preferred width in logical pixels; `-1` means "use the bounds given
    /// at draw time". The sentinel is reported verbatim.
    fn intrinsic_width(&self) -> i32;

    /// Preferred height; same sentinel contract as [`intrinsic_width`](Self::intrinsic_width).
    fn intrinsic_height(&self) -> i32;

    fn opacity(&self) -> Opacity;

    fn set_alpha(&mut self, alpha: u8);

    fn set_color_filter(&mut self, filter: Option<ColorFilter>);
}
