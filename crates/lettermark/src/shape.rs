/// Geometric outline used for both the fill and the border of a drawable.
///
/// The variant is decided once at configuration time; border drawing
/// dispatches with a plain `match`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Rect,
    Circle,
    RoundedRect { radius: f32 },
}

impl Default for Shape {
    #[inline]
    fn default() -> Self {
        Shape::Rect
    }
}
