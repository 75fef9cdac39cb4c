use prototype_framework::{copy_leaves, Prototype, Text};
use std::fmt::Display;

/// A headed block of paragraphs. Used as article sections and brochure panels.
#[derive(Debug, PartialEq)]
pub struct Section {
    pub heading: Text,
    pub paragraphs: Vec<Text>,
}

impl Section {
    pub fn new(heading: impl Into<Text>) -> Self {
        Self {
            heading: heading.into(),
            paragraphs: Vec::new(),
        }
    }

    /// Builder form of [`add_paragraph`](Self::add_paragraph).
    pub fn with_paragraph(mut self, paragraph: impl Into<Text>) -> Self {
        self.add_paragraph(paragraph);
        self
    }

    pub fn add_paragraph(&mut self, paragraph: impl Into<Text>) {
        self.paragraphs.push(paragraph.into());
    }
}

impl Prototype for Section {
    fn copy(&self) -> Self {
        // Paragraphs are immutable leaves: new vector, shared text.
        Self {
            heading: self.heading.copy(),
            paragraphs: copy_leaves(&self.paragraphs),
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Section[{}, paragraphs=[", self.heading)?;
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(paragraph)?;
        }
        f.write_str("]]")
    }
}
