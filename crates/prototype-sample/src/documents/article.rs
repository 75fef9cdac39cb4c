use super::{DocumentPresenter, DocumentTemplate, Section, Style};
use prototype_framework::{Presenter, Prototype, Text};
use tracing::trace;

/// A titled, authored document made of ordered sections.
#[derive(Debug, PartialEq)]
pub struct ArticleTemplate {
    pub title: Text,
    pub author: Text,
    pub style: Style,
    pub sections: Vec<Section>,
}

impl ArticleTemplate {
    /// Creates an article with no sections.
    pub fn new(title: impl Into<Text>, author: impl Into<Text>, style: Style) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            style,
            sections: Vec::new(),
        }
    }

    /// Builder form of [`add_section`](Self::add_section).
    pub fn with_section(mut self, section: Section) -> Self {
        self.add_section(section);
        self
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// First section whose heading equals `heading`.
    pub fn section_mut(&mut self, heading: &str) -> Option<&mut Section> {
        self.sections
            .iter_mut()
            .find(|section| section.heading.as_ref() == heading)
    }
}

impl Prototype for ArticleTemplate {
    fn copy(&self) -> Self {
        trace!(title = %self.title, sections = self.sections.len(), "Copy article");
        Self {
            title: self.title.copy(),
            author: self.author.copy(),
            style: self.style.copy(),
            sections: self.sections.copy(),
        }
    }
}

impl DocumentTemplate for ArticleTemplate {
    fn name(&self) -> &str {
        &self.title
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn clone_template(&self) -> Box<dyn DocumentTemplate> {
        Box::new(self.copy())
    }

    fn render(&self, presenter: &dyn DocumentPresenter) -> String {
        Presenter::<ArticleTemplate>::present(presenter, self)
    }
}
