//! # Prototype Registry
//!
//! This module defines the `PrototypeRegistry`, a task that owns a set of named prototypes
//! and hands out independent copies on request. It is the "Server" half; the
//! [`RegistryClient`] is the cheap, cloneable "Client" half.

use crate::client::RegistryClient;
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::message::RegistryRequest;
use crate::prototype::Prototype;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// A registry of named prototypes served over a channel.
///
/// **Concurrency Model**:
/// The registry processes requests *sequentially*. A `Spawn` copies the stored prototype
/// while no `Revise` can be in flight, so every copy observes a consistent prototype without
/// any `Mutex` or `RwLock`. Any number of clients may spawn from the same prototype; each
/// receives its own copy.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `PrototypeRegistry::new()` to get the `registry` and its `client`.
/// 2.  **Run**: Spawn `registry.run()` in a background task.
/// 3.  **Use**: Register prototypes and spawn copies through the client.
///
/// ```rust
/// use prototype_framework::{prototype, PrototypeRegistry, RegistryConfig, Text};
///
/// #[derive(Debug, PartialEq)]
/// struct Card { title: Text, tags: Vec<Text> }
/// prototype!(Card { title, tags });
///
/// #[tokio::main]
/// async fn main() {
///     let (registry, client) = PrototypeRegistry::<Card>::new(RegistryConfig::default());
///     tokio::spawn(registry.run());
///
///     let card = Card { title: "base".into(), tags: vec![] };
///     client.register("base", card).await.unwrap();
///
///     let mut variant = client.spawn("base").await.unwrap();
///     variant.tags.push("new".into());
///
///     let fresh = client.spawn("base").await.unwrap();
///     assert!(fresh.tags.is_empty());
/// }
/// ```
///
/// # Operations
///
/// * **Register**: inserts the prototype under `name`, replying `true` if it replaced one.
/// * **Spawn**: replies with `prototype.copy()`, or `NotFound`.
/// * **Revise**: applies the edit to the stored prototype in place, or `NotFound`.
/// * **Remove**: removes and returns the prototype, or `NotFound`.
/// * **Names**: replies with all names in sorted order.
pub struct PrototypeRegistry<P: Prototype> {
    receiver: mpsc::Receiver<RegistryRequest<P>>,
    store: BTreeMap<String, P>,
}

impl<P: Prototype + Send + 'static> PrototypeRegistry<P> {
    /// Creates a new registry and its associated client.
    ///
    /// `config.buffer_size` bounds the request channel; clients wait when it is full.
    pub fn new(config: RegistryConfig) -> (Self, RegistryClient<P>) {
        let (sender, receiver) = mpsc::channel(config.buffer_size);
        let registry = Self {
            receiver,
            store: BTreeMap::new(),
        };
        (registry, RegistryClient::new(sender))
    }

    /// Runs the registry's event loop until every client has been dropped.
    pub async fn run(mut self) {
        let prototype = std::any::type_name::<P>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(prototype, "Registry started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(prototype, msg);
        }

        info!(prototype, size = self.store.len(), "Shutdown");
    }

    fn handle(&mut self, prototype: &str, msg: RegistryRequest<P>) {
        match msg {
            RegistryRequest::Register {
                name,
                prototype: item,
                respond_to,
            } => {
                let replaced = self.store.insert(name.clone(), item).is_some();
                info!(prototype, %name, replaced, size = self.store.len(), "Registered");
                let _ = respond_to.send(Ok(replaced));
            }
            RegistryRequest::Spawn { name, respond_to } => {
                let result = match self.store.get(&name) {
                    Some(item) => {
                        debug!(prototype, %name, "Spawn");
                        Ok(item.copy())
                    }
                    None => {
                        warn!(prototype, %name, "Not found");
                        Err(RegistryError::NotFound(name))
                    }
                };
                let _ = respond_to.send(result);
            }
            RegistryRequest::Revise {
                name,
                edit,
                respond_to,
            } => {
                let result = match self.store.get_mut(&name) {
                    Some(item) => {
                        edit(item);
                        info!(prototype, %name, "Revised");
                        Ok(())
                    }
                    None => {
                        warn!(prototype, %name, "Not found");
                        Err(RegistryError::NotFound(name))
                    }
                };
                let _ = respond_to.send(result);
            }
            RegistryRequest::Remove { name, respond_to } => {
                let result = match self.store.remove(&name) {
                    Some(item) => {
                        info!(prototype, %name, size = self.store.len(), "Removed");
                        Ok(item)
                    }
                    None => {
                        warn!(prototype, %name, "Not found");
                        Err(RegistryError::NotFound(name))
                    }
                };
                let _ = respond_to.send(result);
            }
            RegistryRequest::Names { respond_to } => {
                debug!(prototype, size = self.store.len(), "Names");
                let _ = respond_to.send(Ok(self.store.keys().cloned().collect()));
            }
        }
    }
}
