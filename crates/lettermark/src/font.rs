/// Opaque handle to a font face owned by a canvas implementation.
///
/// The core crate never resolves this; it only carries it through paints so
/// the canvas can look the face up in whatever font store it owns.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(usize);

impl FontId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}
