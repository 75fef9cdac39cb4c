use prototype_framework::{prototype, Text};
use std::fmt::Display;

/// Visual style shared by every part of a document.
///
/// A plain value: assigning a `Style` moves it, and the only way to get a second one is
/// [`copy`](prototype_framework::Prototype::copy). Clients edit fields directly.
#[derive(Debug, PartialEq)]
pub struct Style {
    pub font: Text,
    pub size: u32,
    pub color: Text,
}

prototype!(Style { font, size, color });

impl Style {
    /// Creates a new Style.
    ///
    /// # Panics
    /// If `size` is zero.
    pub fn new(font: impl Into<Text>, size: u32, color: impl Into<Text>) -> Self {
        assert!(size > 0, "font size must be positive");
        Self {
            font: font.into(),
            size,
            color: color.into(),
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Style[{}, {}, {}]", self.font, self.size, self.color)
    }
}
