//! # Registry Errors
//!
//! Cloning itself never fails. The only recoverable failures live at the registry
//! boundary, where a request can target a missing prototype or a registry task that has
//! already shut down.

/// Errors returned by [`RegistryClient`](crate::RegistryClient) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Registry closed")]
    RegistryClosed,
    #[error("Registry dropped response channel")]
    RegistryDropped,
    #[error("Prototype not found: {0}")]
    NotFound(String),
}
