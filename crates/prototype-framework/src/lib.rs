//! # Prototype Framework
//!
//! This crate provides the building blocks for **composite prototypes**: object graphs
//! that are built once, then cloned into independent variants that can be mutated at any
//! depth without touching the original, or each other.
//!
//! ## The Problem
//!
//! A prototype typically aggregates a small record (a style, a terrain descriptor) and
//! ordered collections of nodes (sections, obstacles, enemies). A correct clone must:
//!
//! - give the clone its **own** record and its **own** collections,
//! - give each collection its **own** mutable elements,
//! - and may still share storage that nothing can ever mutate (text labels).
//!
//! ## Core Abstractions
//!
//! 1. **Capability** ([`Prototype`]) - `copy()` producing an independent value
//! 2. **Leaves** ([`ValueLeaf`], [`Text`]) - immutable values whose `copy()` is identity
//! 3. **Derivation** ([`prototype!`]) - field-wise `copy()` for records, nodes and roots
//! 4. **Projection** ([`Presenter`]) - read-only rendering of any entity to text
//! 5. **Distribution** ([`PrototypeRegistry`], [`RegistryClient`]) - named prototypes
//!    served as fresh copies to any number of concurrent clients
//!
//! ## Example
//!
//! ```rust
//! use prototype_framework::{prototype, Prototype, Text};
//!
//! #[derive(Debug, PartialEq)]
//! struct Style { font: Text, size: u32 }
//!
//! #[derive(Debug, PartialEq)]
//! struct Page { title: Text, style: Style, notes: Vec<Text> }
//!
//! prototype!(Style { font, size });
//! prototype!(Page { title, style, notes });
//!
//! let page = Page {
//!     title: "Base".into(),
//!     style: Style { font: "Arial".into(), size: 12 },
//!     notes: vec!["one".into()],
//! };
//!
//! let mut variant = page.copy();
//! assert_eq!(variant, page);
//!
//! variant.style.size = 14;
//! variant.notes.push("two".into());
//! assert_eq!(page.style.size, 12);
//! assert_eq!(page.notes.len(), 1);
//! ```
//!
//! ## Concurrency Model
//!
//! - `copy()` is synchronous, pure and linear in the number of elements.
//! - After `copy()` returns, nothing mutable is shared, so copies can move to other tasks.
//! - The registry serializes revisions and copies of a stored prototype by processing
//!   requests one at a time.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockPresenter`](mock::MockPresenter) and helpers that
//! let a test play the registry for a [`RegistryClient`].

pub mod client;
pub mod client_trait;
pub mod config;
pub mod error;
pub mod message;
pub mod mock;
pub mod presenter;
pub mod prototype;
pub mod registry;
pub mod tracing;

// Re-export core types for convenience
pub use client::RegistryClient;
pub use client_trait::CatalogClient;
pub use config::RegistryConfig;
pub use error::RegistryError;
pub use message::{RegistryRequest, Response, Revision};
pub use presenter::{present_all, Presenter};
pub use prototype::{copy_leaves, Prototype, Text, ValueLeaf};
pub use registry::PrototypeRegistry;
