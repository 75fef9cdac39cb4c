//! # Registry Messages
//!
//! Requests sent from a [`RegistryClient`](crate::RegistryClient) to a
//! [`PrototypeRegistry`](crate::PrototypeRegistry). Each request carries a oneshot
//! sender the registry answers on.

use crate::error::RegistryError;
use crate::prototype::Prototype;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the registry.
pub type Response<T> = oneshot::Sender<Result<T, RegistryError>>;

/// In-place edit applied to a stored prototype.
pub type Revision<P> = Box<dyn FnOnce(&mut P) + Send>;

/// Internal message type sent to the registry task.
///
/// - **Register**: store (or replace) a named prototype.
/// - **Spawn**: return an independent copy of a named prototype.
/// - **Revise**: mutate the stored prototype; clones spawned earlier are unaffected.
/// - **Remove**: drop a named prototype.
/// - **Names**: list registered names in sorted order.
pub enum RegistryRequest<P: Prototype> {
    Register {
        name: String,
        prototype: P,
        respond_to: Response<bool>,
    },
    Spawn {
        name: String,
        respond_to: Response<P>,
    },
    Revise {
        name: String,
        edit: Revision<P>,
        respond_to: Response<()>,
    },
    Remove {
        name: String,
        respond_to: Response<P>,
    },
    Names {
        respond_to: Response<Vec<String>>,
    },
}

impl<P: Prototype> std::fmt::Debug for RegistryRequest<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register { name, .. } => f.debug_struct("Register").field("name", name).finish(),
            Self::Spawn { name, .. } => f.debug_struct("Spawn").field("name", name).finish(),
            Self::Revise { name, .. } => f.debug_struct("Revise").field("name", name).finish(),
            Self::Remove { name, .. } => f.debug_struct("Remove").field("name", name).finish(),
            Self::Names { .. } => f.write_str("Names"),
        }
    }
}
