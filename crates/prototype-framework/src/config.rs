//! # Registry Configuration

use tracing::warn;

/// Environment variable overriding [`RegistryConfig::buffer_size`].
pub const BUFFER_ENV: &str = "PROTOTYPE_REGISTRY_BUFFER";

/// Settings for a [`PrototypeRegistry`](crate::PrototypeRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Capacity of the request channel. Clients wait when it is full.
    pub buffer_size: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl RegistryConfig {
    /// Reads [`BUFFER_ENV`], falling back to the default on absence or a bad value.
    pub fn from_env() -> Self {
        match std::env::var(BUFFER_ENV) {
            Ok(raw) => Self::parse_buffer(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Ignoring invalid {}", BUFFER_ENV);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    fn parse_buffer(raw: &str) -> Option<Self> {
        match raw.trim().parse::<usize>() {
            Ok(buffer_size) if buffer_size > 0 => Some(Self { buffer_size }),
            _ => None,
        }
    }
}
