//! # Level Domain
//!
//! Game levels built from a [`Terrain`] record and two node collections,
//! [`Obstacle`]s and [`Enemy`]s.
//!
//! ## Usage
//!
//! ```rust
//! use prototype_framework::Prototype;
//! use prototype_sample::levels::{Enemy, Level, Terrain};
//!
//! let base = Level::new("Forest Outpost", Terrain::new("Forest", 2000, 1200))
//!     .with_enemy(Enemy::new("Goblin", 30, 500, 600));
//!
//! let mut variant = base.copy();
//! variant.enemies[0].hp = 40;
//! assert_eq!(base.enemies[0].hp, 30);
//! ```

pub mod entities;
pub mod level;
pub mod terrain;

pub use entities::{Enemy, Obstacle};
pub use level::Level;
pub use terrain::Terrain;
