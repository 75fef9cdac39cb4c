//! # Catalog Clients
//!
//! Domain wrappers around [`RegistryClient`](prototype_framework::RegistryClient).
//! Each one inherits `spawn`, `names` and `remove` from
//! [`CatalogClient`](prototype_framework::CatalogClient) and adds typed helpers.

pub mod level_client;
pub mod template_client;

pub use level_client::LevelClient;
pub use template_client::TemplateClient;
