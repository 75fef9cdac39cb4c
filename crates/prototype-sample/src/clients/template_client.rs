//! # Template Client
//!
//! Provides a high-level API over a registry of [`Document`] prototypes.
use crate::documents::{ArticleTemplate, BrochureTemplate, Document, DocumentTemplate};
use crate::error::CatalogError;
use prototype_framework::{CatalogClient, RegistryClient, RegistryError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the document template registry.
#[derive(Clone)]
pub struct TemplateClient {
    inner: RegistryClient<Document>,
}

impl TemplateClient {
    pub fn new(inner: RegistryClient<Document>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CatalogClient<Document> for TemplateClient {
    type Error = CatalogError;

    fn inner(&self) -> &RegistryClient<Document> {
        &self.inner
    }

    fn map_error(e: RegistryError) -> Self::Error {
        CatalogError::from(e)
    }
}

impl TemplateClient {
    /// Registers a template under its own title or name.
    #[instrument(skip(self, template))]
    pub async fn register(&self, template: impl Into<Document>) -> Result<String, CatalogError> {
        let template = template.into();
        let name = template.name().to_string();
        debug!(kind = template.kind(), %name, "Sending request");
        self.inner.register(name.clone(), template).await?;
        Ok(name)
    }

    /// Spawns a copy of an article prototype.
    #[instrument(skip(self))]
    pub async fn spawn_article(&self, name: &str) -> Result<ArticleTemplate, CatalogError> {
        match self.spawn(name).await? {
            Document::Article(article) => Ok(article),
            other => Err(CatalogError::WrongKind {
                name: name.to_string(),
                expected: "article",
                actual: other.kind(),
            }),
        }
    }

    /// Spawns a copy of a brochure prototype.
    #[instrument(skip(self))]
    pub async fn spawn_brochure(&self, name: &str) -> Result<BrochureTemplate, CatalogError> {
        match self.spawn(name).await? {
            Document::Brochure(brochure) => Ok(brochure),
            other => Err(CatalogError::WrongKind {
                name: name.to_string(),
                expected: "brochure",
                actual: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::{Section, Style};
    use prototype_framework::mock::{create_mock_client, expect_register, expect_spawn};

    fn brochure() -> BrochureTemplate {
        BrochureTemplate::new("Product Launch", Style::new("Arial", 14, "white"))
            .with_panel(Section::new("Front"))
    }

    #[tokio::test]
    async fn test_register_uses_template_name() {
        let (client, mut receiver) = create_mock_client::<Document>(10);
        let templates = TemplateClient::new(client);

        let register_task = tokio::spawn(async move { templates.register(brochure()).await });

        let (name, prototype, responder) = expect_register(&mut receiver)
            .await
            .expect("Expected Register request");
        assert_eq!(name, "Product Launch");
        assert_eq!(prototype, Document::Brochure(brochure()));
        responder.send(Ok(false)).unwrap();

        assert_eq!(register_task.await.unwrap().unwrap(), "Product Launch");
    }

    #[tokio::test]
    async fn test_spawn_article_rejects_brochure() {
        let (client, mut receiver) = create_mock_client::<Document>(10);
        let templates = TemplateClient::new(client);

        let spawn_task =
            tokio::spawn(async move { templates.spawn_article("Product Launch").await });

        let (name, responder) = expect_spawn(&mut receiver)
            .await
            .expect("Expected Spawn request");
        assert_eq!(name, "Product Launch");
        responder.send(Ok(Document::Brochure(brochure()))).unwrap();

        let result = spawn_task.await.unwrap();
        assert_eq!(
            result,
            Err(CatalogError::WrongKind {
                name: "Product Launch".to_string(),
                expected: "article",
                actual: "brochure",
            })
        );
    }

    #[tokio::test]
    async fn test_spawn_maps_not_found() {
        let (client, mut receiver) = create_mock_client::<Document>(10);
        let templates = TemplateClient::new(client);

        let spawn_task = tokio::spawn(async move { templates.spawn_brochure("Missing").await });

        let (name, responder) = expect_spawn(&mut receiver).await.unwrap();
        responder.send(Err(RegistryError::NotFound(name))).unwrap();

        assert_eq!(
            spawn_task.await.unwrap(),
            Err(CatalogError::NotFound("Missing".to_string()))
        );
    }
}
