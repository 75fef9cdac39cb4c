use prototype_framework::{prototype, Text};
use std::fmt::Display;

/// Ground type and extent of a level.
#[derive(Debug, PartialEq)]
pub struct Terrain {
    pub kind: Text,
    pub width: u32,
    pub height: u32,
}

prototype!(Terrain { kind, width, height });

impl Terrain {
    /// Creates a new Terrain.
    ///
    /// # Panics
    /// If `width` or `height` is zero.
    pub fn new(kind: impl Into<Text>, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "terrain dimensions must be positive");
        Self {
            kind: kind.into(),
            width,
            height,
        }
    }
}

impl Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Terrain[{} {}x{}]", self.kind, self.width, self.height)
    }
}
