//! # Document Domain
//!
//! Articles and brochures built from a shared [`Style`] record and [`Section`] nodes.
//!
//! ## Structure
//!
//! - [`style`] - the [`Style`] record (font, size, color)
//! - [`section`] - the [`Section`] node (heading plus paragraph texts)
//! - [`article`] - [`ArticleTemplate`] root (title, author, style, sections)
//! - [`brochure`] - [`BrochureTemplate`] root (name, style, panels)
//!
//! Both roots implement [`DocumentTemplate`], so callers can clone and render them without
//! knowing which one they hold. [`Document`] is the owned, closed form used by the
//! template catalog.
//!
//! ## Usage
//!
//! ```rust
//! use prototype_framework::Prototype;
//! use prototype_sample::documents::{ArticleTemplate, Section, Style};
//!
//! let prototype = ArticleTemplate::new("Tech Trends", "Editorial Team", Style::new("Times New Roman", 12, "black"))
//!     .with_section(Section::new("Introduction").with_paragraph("Welcome to the future of tech."));
//!
//! let mut variant = prototype.copy();
//! variant.style.color = "darkblue".into();
//! assert_eq!(prototype.style.color.as_ref(), "black");
//! ```

pub mod article;
pub mod brochure;
pub mod section;
pub mod style;

pub use article::ArticleTemplate;
pub use brochure::BrochureTemplate;
pub use section::Section;
pub use style::Style;

use prototype_framework::{Presenter, Prototype};
use std::fmt::Debug;

/// A presenter able to render every document root.
pub trait DocumentPresenter: Presenter<ArticleTemplate> + Presenter<BrochureTemplate> {}

impl<P> DocumentPresenter for P where P: Presenter<ArticleTemplate> + Presenter<BrochureTemplate> {}

/// Object-safe face of a document prototype.
pub trait DocumentTemplate: Send + Sync + Debug {
    /// Title of an article, name of a brochure.
    fn name(&self) -> &str;

    fn style(&self) -> &Style;

    /// Independent copy, boxed so heterogeneous templates can be cloned uniformly.
    fn clone_template(&self) -> Box<dyn DocumentTemplate>;

    fn render(&self, presenter: &dyn DocumentPresenter) -> String;
}

/// Either document root, owned.
#[derive(Debug, PartialEq)]
pub enum Document {
    Article(ArticleTemplate),
    Brochure(BrochureTemplate),
}

impl Document {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Article(_) => "article",
            Self::Brochure(_) => "brochure",
        }
    }

    fn template(&self) -> &dyn DocumentTemplate {
        match self {
            Self::Article(article) => article,
            Self::Brochure(brochure) => brochure,
        }
    }
}

impl Prototype for Document {
    fn copy(&self) -> Self {
        match self {
            Self::Article(article) => Self::Article(article.copy()),
            Self::Brochure(brochure) => Self::Brochure(brochure.copy()),
        }
    }
}

impl DocumentTemplate for Document {
    fn name(&self) -> &str {
        self.template().name()
    }

    fn style(&self) -> &Style {
        self.template().style()
    }

    fn clone_template(&self) -> Box<dyn DocumentTemplate> {
        Box::new(self.copy())
    }

    fn render(&self, presenter: &dyn DocumentPresenter) -> String {
        self.template().render(presenter)
    }
}

impl From<ArticleTemplate> for Document {
    fn from(article: ArticleTemplate) -> Self {
        Self::Article(article)
    }
}

impl From<BrochureTemplate> for Document {
    fn from(brochure: BrochureTemplate) -> Self {
        Self::Brochure(brochure)
    }
}
