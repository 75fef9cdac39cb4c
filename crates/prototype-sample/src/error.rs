//! Error types for the catalogs.

use thiserror::Error;

/// Errors that can occur while working with a prototype catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No prototype is registered under the name.
    #[error("Prototype not found: {0}")]
    NotFound(String),

    /// The prototype exists but is a different kind of document.
    #[error("Prototype {name} is a {actual}, expected {expected}")]
    WrongKind {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// An error occurred while communicating with the registry.
    #[error("Registry communication error: {0}")]
    RegistryCommunicationError(String),
}

impl From<prototype_framework::RegistryError> for CatalogError {
    fn from(e: prototype_framework::RegistryError) -> Self {
        match e {
            prototype_framework::RegistryError::NotFound(name) => CatalogError::NotFound(name),
            other => CatalogError::RegistryCommunicationError(other.to_string()),
        }
    }
}
