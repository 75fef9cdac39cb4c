//! # Level Client
//!
//! Provides a high-level API over a registry of [`Level`] prototypes.
use crate::error::CatalogError;
use crate::levels::{Enemy, Level};
use prototype_framework::{CatalogClient, RegistryClient, RegistryError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the level registry.
#[derive(Clone)]
pub struct LevelClient {
    inner: RegistryClient<Level>,
}

impl LevelClient {
    pub fn new(inner: RegistryClient<Level>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CatalogClient<Level> for LevelClient {
    type Error = CatalogError;

    fn inner(&self) -> &RegistryClient<Level> {
        &self.inner
    }

    fn map_error(e: RegistryError) -> Self::Error {
        CatalogError::from(e)
    }
}

impl LevelClient {
    /// Registers a level prototype under its own name.
    #[instrument(skip(self, level), fields(name = %level.name))]
    pub async fn register(&self, level: Level) -> Result<String, CatalogError> {
        debug!("Sending request");
        let name = level.name.to_string();
        self.inner.register(name.clone(), level).await?;
        Ok(name)
    }

    /// Spawns a copy of `base` renamed to `variant`.
    #[instrument(skip(self))]
    pub async fn spawn_variant(&self, base: &str, variant: &str) -> Result<Level, CatalogError> {
        let mut level = self.spawn(base).await?;
        level.name = variant.into();
        Ok(level)
    }

    /// Adds an enemy to the stored prototype. Variants spawned earlier keep their roster.
    #[instrument(skip(self))]
    pub async fn reinforce(&self, name: &str, enemy: Enemy) -> Result<(), CatalogError> {
        debug!("Sending request");
        self.inner
            .revise(name, move |level: &mut Level| level.add_enemy(enemy))
            .await
            .map_err(CatalogError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::Terrain;
    use prototype_framework::mock::{create_mock_client, expect_revise, expect_spawn};

    fn outpost() -> Level {
        Level::new("Forest Outpost", Terrain::new("Forest", 2000, 1200))
            .with_enemy(Enemy::new("Goblin", 30, 500, 600))
    }

    #[tokio::test]
    async fn test_spawn_variant_renames_copy() {
        let (client, mut receiver) = create_mock_client::<Level>(10);
        let levels = LevelClient::new(client);

        let spawn_task = tokio::spawn(async move {
            levels
                .spawn_variant("Forest Outpost", "Forest Outpost - Night")
                .await
        });

        let (name, responder) = expect_spawn(&mut receiver)
            .await
            .expect("Expected Spawn request");
        assert_eq!(name, "Forest Outpost");
        responder.send(Ok(outpost())).unwrap();

        let variant = spawn_task.await.unwrap().unwrap();
        assert_eq!(variant.name.as_ref(), "Forest Outpost - Night");
        assert_eq!(variant.enemies, outpost().enemies);
    }

    #[tokio::test]
    async fn test_reinforce_sends_revision() {
        let (client, mut receiver) = create_mock_client::<Level>(10);
        let levels = LevelClient::new(client);

        let reinforce_task = tokio::spawn(async move {
            levels
                .reinforce("Forest Outpost", Enemy::new("Wolf", 50, 150, 220))
                .await
        });

        let (name, edit, responder) = expect_revise(&mut receiver)
            .await
            .expect("Expected Revise request");
        assert_eq!(name, "Forest Outpost");

        let mut level = outpost();
        edit(&mut level);
        assert_eq!(level.enemies.len(), 2);
        assert_eq!(level.enemies[1].kind.as_ref(), "Wolf");

        responder.send(Ok(())).unwrap();
        assert_eq!(reinforce_task.await.unwrap(), Ok(()));
    }
}
