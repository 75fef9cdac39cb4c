use crate::clients::{LevelClient, TemplateClient};
use crate::documents::Document;
use crate::levels::Level;
use prototype_framework::{PrototypeRegistry, RegistryConfig};
use tracing::{error, info};

/// Owns the running registries of both domains.
///
/// # Architecture
///
/// - **Template registry**: [`Document`] prototypes (articles and brochures)
/// - **Level registry**: [`Level`] prototypes
///
/// Each registry runs in its own Tokio task; the studio only keeps their clients and
/// join handles.
pub struct Studio {
    /// Client for the document template registry
    pub templates: TemplateClient,

    /// Client for the level registry
    pub levels: LevelClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Studio {
    /// Spawns both registries. Must be called from within a Tokio runtime.
    pub fn new(config: RegistryConfig) -> Self {
        let (template_registry, template_client) = PrototypeRegistry::<Document>::new(config);
        let (level_registry, level_client) = PrototypeRegistry::<Level>::new(config);

        let template_handle = tokio::spawn(template_registry.run());
        let level_handle = tokio::spawn(level_registry.run());

        info!(buffer_size = config.buffer_size, "Studio started");
        Self {
            templates: TemplateClient::new(template_client),
            levels: LevelClient::new(level_client),
            handles: vec![template_handle, level_handle],
        }
    }

    /// Drops the clients and waits for both registries to finish.
    ///
    /// Returns an error if a registry task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down studio...");

        drop(self.templates);
        drop(self.levels);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Registry task failed: {:?}", e);
                return Err(format!("Registry task failed: {:?}", e));
            }
        }

        info!("Studio shutdown complete.");
        Ok(())
    }
}
