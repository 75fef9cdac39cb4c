//! # Studio Lifecycle
//!
//! Starts one registry per domain, hands out their clients, and shuts both down.
//!
//! ```rust
//! use prototype_framework::{CatalogClient, RegistryConfig};
//! use prototype_sample::levels::{Level, Terrain};
//! use prototype_sample::lifecycle::Studio;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let studio = Studio::new(RegistryConfig::default());
//!
//!     let name = studio.levels.register(Level::new("Dunes", Terrain::new("Sand", 800, 600))).await?;
//!     let mut variant = studio.levels.spawn(&name).await?;
//!     variant.terrain.width = 1600;
//!
//!     assert_eq!(studio.levels.spawn(&name).await?.terrain.width, 800);
//!
//!     studio.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Shutdown
//!
//! Dropping the studio's clients closes both request channels. Each registry drains what
//! is queued, logs its final size and exits. Clones of the clients handed out elsewhere
//! keep their registry alive until they are dropped too.

pub mod studio;

pub use studio::*;
