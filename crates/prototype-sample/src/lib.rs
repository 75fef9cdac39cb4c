//! # Prototype Sample Library
//!
//! Two domains built on `prototype-framework`, plus the plumbing that serves them.
//!
//! - [`documents`] - article and brochure templates
//! - [`levels`] - game levels
//! - [`presenter`] - console rendering for both domains
//! - [`clients`] - typed catalog clients over the registries
//! - [`lifecycle`] - starts and stops the registries

pub mod clients;
pub mod documents;
pub mod error;
pub mod levels;
pub mod lifecycle;
pub mod presenter;
