//! # Prototype Sample
//!
//! Builds one article, one brochure and one level, registers them as prototypes, spawns
//! customized variants and prints every prototype and variant.
//!
//! ```bash
//! RUST_LOG=info cargo run -p prototype-sample
//! ```

use prototype_framework::tracing::setup_tracing;
use prototype_framework::{CatalogClient, RegistryConfig};
use prototype_sample::documents::{
    ArticleTemplate, BrochureTemplate, DocumentTemplate, Section, Style,
};
use prototype_sample::levels::{Enemy, Level, Obstacle, Terrain};
use prototype_sample::lifecycle::Studio;
use prototype_sample::presenter::ConsolePresenter;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let studio = Studio::new(RegistryConfig::from_env());
    let presenter = ConsolePresenter;

    // --- Documents ---

    let span = tracing::info_span!("documents");
    async {
        let article = ArticleTemplate::new(
            "Tech Trends",
            "Editorial Team",
            Style::new("Times New Roman", 12, "black"),
        )
        .with_section(Section::new("Introduction").with_paragraph("Welcome to the future of tech."))
        .with_section(Section::new("Body").with_paragraph("Deep content goes here."));
        let article_name = studio.templates.register(article).await?;

        let mut article1 = studio.templates.spawn_article(&article_name).await?;
        article1.title = "AI in Healthcare".into();
        article1.author = "Alice".into();
        article1.style.color = "darkblue".into();

        let mut article2 = studio.templates.spawn_article(&article_name).await?;
        article2.title = "Sustainable Computing".into();
        article2.author = "Bob".into();
        if let Some(body) = article2.section_mut("Body") {
            body.add_paragraph("Additional paragraph for Bob's article.");
        }

        let prototype = studio.templates.spawn(&article_name).await?;
        println!("Original prototype rendering:\n{}", prototype.render(&presenter));
        println!("\nCloned article 1 rendering:\n{}", article1.render(&presenter));
        println!("\nCloned article 2 rendering:\n{}", article2.render(&presenter));

        let brochure = BrochureTemplate::new("Product Launch", Style::new("Arial", 14, "white"))
            .with_panel(Section::new("Front"))
            .with_panel(Section::new("Back"));
        let brochure_name = studio.templates.register(brochure).await?;

        let mut brochure_copy = studio.templates.spawn_brochure(&brochure_name).await?;
        brochure_copy.name = "Product Launch - Regional".into();

        let brochure_proto = studio.templates.spawn(&brochure_name).await?;
        println!("\nBrochure prototype:\n{}", brochure_proto.render(&presenter));
        println!("\nBrochure clone:\n{}", brochure_copy.render(&presenter));

        let templates = studio.templates.names().await?;
        info!(?templates, "Documents done");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    // --- Levels ---

    let span = tracing::info_span!("levels");
    async {
        let base = Level::new("Forest Outpost", Terrain::new("Forest", 2000, 1200))
            .with_obstacle(Obstacle::new("Rock", 100, 200))
            .with_obstacle(Obstacle::new("Tree", 300, 400))
            .with_enemy(Enemy::new("Goblin", 30, 500, 600));
        let base_name = studio.levels.register(base).await?;

        let mut variant_a = studio
            .levels
            .spawn_variant(&base_name, "Forest Outpost - Night")
            .await?;
        variant_a.add_enemy(Enemy::new("Wolf", 50, 150, 220));
        variant_a.enemies[0].hp = 40;

        let mut variant_b = studio
            .levels
            .spawn_variant(&base_name, "Forest Outpost - Challenge")
            .await?;
        variant_b.obstacles[0].x = 120;

        let base = studio.levels.spawn(&base_name).await?;
        println!("\nPrototype (base level):\n{}", base.describe(&presenter));
        println!("\nVariant A:\n{}", variant_a.describe(&presenter));
        println!("\nVariant B:\n{}", variant_b.describe(&presenter));

        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    studio.shutdown().await?;

    info!("Sample completed successfully");
    Ok(())
}
