//! # Registry Client
//!
//! The generic client for talking to a [`PrototypeRegistry`](crate::PrototypeRegistry).

use crate::error::RegistryError;
use crate::message::RegistryRequest;
use crate::prototype::Prototype;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `PrototypeRegistry<P>`.
///
/// Holds only a sender, so cloning is cheap and clones can be handed to other tasks.
/// Every method resolves to `Result<_, RegistryError>`; `RegistryClosed` means the
/// registry task has stopped.
pub struct RegistryClient<P: Prototype> {
    sender: mpsc::Sender<RegistryRequest<P>>,
}

impl<P: Prototype> Clone for RegistryClient<P> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<P: Prototype> RegistryClient<P> {
    pub fn new(sender: mpsc::Sender<RegistryRequest<P>>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, RegistryError>>) -> RegistryRequest<P>,
    ) -> Result<T, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }

    /// Stores `prototype` under `name`. Returns `true` if an earlier one was replaced.
    pub async fn register(
        &self,
        name: impl Into<String>,
        prototype: P,
    ) -> Result<bool, RegistryError> {
        let name = name.into();
        self.request(|respond_to| RegistryRequest::Register {
            name,
            prototype,
            respond_to,
        })
        .await
    }

    /// Returns an independent copy of the prototype registered under `name`.
    pub async fn spawn(&self, name: impl Into<String>) -> Result<P, RegistryError> {
        let name = name.into();
        self.request(|respond_to| RegistryRequest::Spawn { name, respond_to })
            .await
    }

    /// Applies `edit` to the stored prototype. Copies spawned earlier are not affected.
    pub async fn revise<F>(&self, name: impl Into<String>, edit: F) -> Result<(), RegistryError>
    where
        F: FnOnce(&mut P) + Send + 'static,
    {
        let name = name.into();
        self.request(|respond_to| RegistryRequest::Revise {
            name,
            edit: Box::new(edit),
            respond_to,
        })
        .await
    }

    /// Removes and returns the prototype registered under `name`.
    pub async fn remove(&self, name: impl Into<String>) -> Result<P, RegistryError> {
        let name = name.into();
        self.request(|respond_to| RegistryRequest::Remove { name, respond_to })
            .await
    }

    /// Lists registered names in sorted order.
    pub async fn names(&self) -> Result<Vec<String>, RegistryError> {
        self.request(|respond_to| RegistryRequest::Names { respond_to })
            .await
    }
}
