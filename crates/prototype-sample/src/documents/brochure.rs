use super::{DocumentPresenter, DocumentTemplate, Section, Style};
use prototype_framework::{Presenter, Prototype, Text};
use tracing::trace;

/// A named document laid out as ordered panels.
#[derive(Debug, PartialEq)]
pub struct BrochureTemplate {
    pub name: Text,
    pub style: Style,
    pub panels: Vec<Section>,
}

impl BrochureTemplate {
    pub fn new(name: impl Into<Text>, style: Style) -> Self {
        Self {
            name: name.into(),
            style,
            panels: Vec::new(),
        }
    }

    pub fn with_panel(mut self, panel: Section) -> Self {
        self.add_panel(panel);
        self
    }

    pub fn add_panel(&mut self, panel: Section) {
        self.panels.push(panel);
    }
}

impl Prototype for BrochureTemplate {
    fn copy(&self) -> Self {
        trace!(name = %self.name, panels = self.panels.len(), "Copy brochure");
        Self {
            name: self.name.copy(),
            style: self.style.copy(),
            panels: self.panels.copy(),
        }
    }
}

impl DocumentTemplate for BrochureTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn clone_template(&self) -> Box<dyn DocumentTemplate> {
        Box::new(self.copy())
    }

    fn render(&self, presenter: &dyn DocumentPresenter) -> String {
        Presenter::<BrochureTemplate>::present(presenter, self)
    }
}
