use prototype_framework::{CatalogClient, Prototype, RegistryConfig};
use prototype_sample::documents::{ArticleTemplate, BrochureTemplate, Document, Section, Style};
use prototype_sample::error::CatalogError;
use prototype_sample::levels::{Enemy, Level, Obstacle, Terrain};
use prototype_sample::lifecycle::Studio;

/// Full end-to-end test with both real registries.
#[tokio::test]
async fn test_studio_document_flow() {
    let studio = Studio::new(RegistryConfig::default());

    let article = ArticleTemplate::new(
        "Tech Trends",
        "Editorial Team",
        Style::new("Times New Roman", 12, "black"),
    )
    .with_section(Section::new("Introduction").with_paragraph("Welcome to the future of tech."))
    .with_section(Section::new("Body").with_paragraph("Deep content goes here."));
    let expected = article.copy();

    let name = studio
        .templates
        .register(article)
        .await
        .expect("Failed to register article");
    assert_eq!(name, "Tech Trends");

    let mut article1 = studio.templates.spawn_article(&name).await.unwrap();
    article1.style.color = "darkblue".into();
    let mut article2 = studio.templates.spawn_article(&name).await.unwrap();
    article2
        .section_mut("Body")
        .unwrap()
        .add_paragraph("Additional paragraph for Bob's article.");

    // Stored prototype is unchanged by either variant
    let stored = studio.templates.spawn(&name).await.unwrap();
    assert_eq!(stored, Document::Article(expected));

    // Kind mismatch surfaces as a typed error
    let brochure = BrochureTemplate::new("Product Launch", Style::new("Arial", 14, "white"));
    studio.templates.register(brochure).await.unwrap();
    let result = studio.templates.spawn_article("Product Launch").await;
    assert!(matches!(result, Err(CatalogError::WrongKind { .. })));

    assert_eq!(
        studio.templates.names().await.unwrap(),
        vec!["Product Launch", "Tech Trends"]
    );

    studio.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_studio_level_flow() {
    let studio = Studio::new(RegistryConfig::default());

    let base = Level::new("Forest Outpost", Terrain::new("Forest", 2000, 1200))
        .with_obstacle(Obstacle::new("Rock", 100, 200))
        .with_enemy(Enemy::new("Goblin", 30, 500, 600));
    let name = studio.levels.register(base).await.unwrap();

    let mut night = studio
        .levels
        .spawn_variant(&name, "Forest Outpost - Night")
        .await
        .unwrap();
    night.enemies[0].hp = 40;

    // Revising the prototype reaches later spawns only
    studio
        .levels
        .reinforce(&name, Enemy::new("Wolf", 50, 150, 220))
        .await
        .unwrap();
    let later = studio.levels.spawn(&name).await.unwrap();

    assert_eq!(night.enemies.len(), 1);
    assert_eq!(night.enemies[0].hp, 40);
    assert_eq!(later.enemies.len(), 2);
    assert_eq!(later.enemies[0].hp, 30);
    assert_eq!(later.name.as_ref(), "Forest Outpost");

    // Remove, then spawning fails
    studio.levels.remove(&name).await.unwrap();
    assert_eq!(
        studio.levels.spawn(&name).await,
        Err(CatalogError::NotFound(name.clone()))
    );

    studio.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_concurrent_variants_from_one_prototype() {
    let studio = Studio::new(RegistryConfig { buffer_size: 2 });
    let base = Level::new("Arena", Terrain::new("Stone", 500, 500))
        .with_enemy(Enemy::new("Goblin", 30, 10, 10));
    let name = studio.levels.register(base).await.unwrap();

    let mut handles = Vec::new();
    for hp in 1..=8u32 {
        let levels = studio.levels.clone();
        let name = name.clone();
        handles.push(tokio::spawn(async move {
            let mut variant = levels.spawn(&name).await.unwrap();
            variant.enemies[0].hp = hp;
            variant
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let variant = handle.await.unwrap();
        assert_eq!(variant.enemies[0].hp, i as u32 + 1);
    }
    assert_eq!(studio.levels.spawn(&name).await.unwrap().enemies[0].hp, 30);

    studio.shutdown().await.unwrap();
}
