//! # CatalogClient Trait
//!
//! Provides a common interface for domain-specific registry clients, adding default
//! `spawn`, `names` and `remove` methods on top of a generic [`RegistryClient`].
use crate::{Prototype, RegistryClient, RegistryError};
use async_trait::async_trait;

/// Trait for domain catalogs to inherit the standard registry operations.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use prototype_framework::{prototype, CatalogClient, RegistryClient, RegistryError, Text};
///
/// #[derive(Debug, PartialEq)]
/// struct Card { title: Text }
/// prototype!(Card { title });
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("card catalog: {0}")]
/// struct CardError(String);
///
/// struct CardCatalog {
///     inner: RegistryClient<Card>,
/// }
///
/// #[async_trait]
/// impl CatalogClient<Card> for CardCatalog {
///     type Error = CardError;
///
///     fn inner(&self) -> &RegistryClient<Card> {
///         &self.inner
///     }
///
///     fn map_error(e: RegistryError) -> Self::Error {
///         CardError(e.to_string())
///     }
/// }
///
/// async fn usage(catalog: CardCatalog) {
///     // spawn(), names() and remove() are provided automatically
///     let _ = catalog.spawn("base").await;
///     let _ = catalog.names().await;
/// }
/// ```
#[async_trait]
pub trait CatalogClient<P: Prototype + Send + 'static>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send;

    /// Access the inner generic client.
    fn inner(&self) -> &RegistryClient<P>;

    /// Map registry errors to the domain error type.
    fn map_error(e: RegistryError) -> Self::Error;

    /// Spawn an independent copy of a named prototype.
    #[tracing::instrument(skip(self))]
    async fn spawn(&self, name: &str) -> Result<P, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().spawn(name).await.map_err(Self::map_error)
    }

    /// List registered prototype names.
    #[tracing::instrument(skip(self))]
    async fn names(&self) -> Result<Vec<String>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().names().await.map_err(Self::map_error)
    }

    /// Remove a named prototype, returning it.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, name: &str) -> Result<P, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().remove(name).await.map_err(Self::map_error)
    }
}
