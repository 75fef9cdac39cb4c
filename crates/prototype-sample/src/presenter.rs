//! # Console Presenter
//!
//! Plain-text rendering for both domains, one line per element.
//!
//! ```text
//! === Article: Tech Trends by Editorial Team ===
//! Style: Style[Times New Roman, 12, black]
//!   Introduction
//!     Welcome to the future of tech.
//! ```
//!
//! ```text
//! Level: Forest Outpost
//!  Terrain[Forest 2000x1200]
//!  Obstacles: [Rock@100,200, Tree@300,400]
//!  Enemies: [Goblin(hp=30)@500,600]
//! ```

use crate::documents::{ArticleTemplate, BrochureTemplate, Section, Style};
use crate::levels::{Enemy, Level, Obstacle, Terrain};
use prototype_framework::{present_all, Presenter};

/// Renders every entity of both domains as console text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePresenter;

impl Presenter<Style> for ConsolePresenter {
    fn present(&self, item: &Style) -> String {
        item.to_string()
    }
}

impl Presenter<Section> for ConsolePresenter {
    fn present(&self, item: &Section) -> String {
        item.to_string()
    }
}

impl Presenter<ArticleTemplate> for ConsolePresenter {
    fn present(&self, item: &ArticleTemplate) -> String {
        let mut lines = vec![
            format!("=== Article: {} by {} ===", item.title, item.author),
            format!("Style: {}", self.present(&item.style)),
        ];
        for section in &item.sections {
            lines.push(format!("  {}", section.heading));
            lines.extend(
                section
                    .paragraphs
                    .iter()
                    .map(|paragraph| format!("    {paragraph}")),
            );
        }
        lines.join("\n")
    }
}

impl Presenter<BrochureTemplate> for ConsolePresenter {
    fn present(&self, item: &BrochureTemplate) -> String {
        let mut lines = vec![
            format!("=== Brochure: {} ===", item.name),
            format!("Style: {}", self.present(&item.style)),
        ];
        lines.extend(
            item.panels
                .iter()
                .map(|panel| format!(" Panel: {}", panel.heading)),
        );
        lines.join("\n")
    }
}

impl Presenter<Terrain> for ConsolePresenter {
    fn present(&self, item: &Terrain) -> String {
        item.to_string()
    }
}

impl Presenter<Obstacle> for ConsolePresenter {
    fn present(&self, item: &Obstacle) -> String {
        item.to_string()
    }
}

impl Presenter<Enemy> for ConsolePresenter {
    fn present(&self, item: &Enemy) -> String {
        item.to_string()
    }
}

impl Presenter<Level> for ConsolePresenter {
    fn present(&self, item: &Level) -> String {
        [
            format!("Level: {}", item.name),
            format!(" {}", self.present(&item.terrain)),
            format!(" Obstacles: [{}]", present_all(self, &item.obstacles, ", ")),
            format!(" Enemies: [{}]", present_all(self, &item.enemies, ", ")),
        ]
        .join("\n")
    }
}
