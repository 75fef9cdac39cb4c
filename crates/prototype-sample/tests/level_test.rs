use prototype_framework::mock::MockPresenter;
use prototype_framework::Prototype;
use prototype_sample::levels::{Enemy, Level, Obstacle, Terrain};
use prototype_sample::presenter::ConsolePresenter;

fn forest_outpost() -> Level {
    Level::new("Forest Outpost", Terrain::new("Forest", 2000, 1200))
        .with_obstacle(Obstacle::new("Rock", 100, 200))
        .with_obstacle(Obstacle::new("Tree", 300, 400))
        .with_enemy(Enemy::new("Goblin", 30, 500, 600))
}

#[test]
fn test_enemy_hp_change_stays_in_clone() {
    let base = forest_outpost();
    let mut variant = base.copy();
    variant.enemies[0].hp = 40;

    assert_eq!(base.enemies[0].hp, 30);
    assert_eq!(variant.enemies[0].hp, 40);
}

#[test]
fn test_variants_do_not_see_each_other() {
    let base = forest_outpost();

    let mut variant_a = base.copy();
    variant_a.name = "Forest Outpost - Night".into();
    variant_a.add_enemy(Enemy::new("Wolf", 50, 150, 220));

    let mut variant_b = base.copy();
    variant_b.name = "Forest Outpost - Challenge".into();
    variant_b.obstacles[0].x = 120;
    variant_b.terrain.kind = "Swamp".into();

    assert_eq!(base, forest_outpost());
    assert_eq!(variant_a.enemies.len(), 2);
    assert_eq!(variant_a.obstacles[0].x, 100);
    assert_eq!(variant_b.enemies.len(), 1);
    assert_eq!(variant_a.terrain.kind.as_ref(), "Forest");
}

#[test]
fn test_source_mutation_does_not_reach_clone() {
    let mut base = forest_outpost();
    let clone = base.copy();

    base.terrain.width = 10;
    base.obstacles.clear();
    base.enemies[0].kind = "Orc".into();

    assert_eq!(clone, forest_outpost());
}

#[test]
fn test_copy_preserves_order_and_is_idempotent() {
    let once = forest_outpost().copy();
    let twice = once.copy();
    assert_eq!(twice, once);

    let kinds: Vec<String> = twice.obstacles.iter().map(|o| o.kind.to_string()).collect();
    assert_eq!(kinds, ["Rock", "Tree"]);
}

#[test]
fn test_describe_uses_presenter() {
    let presenter = MockPresenter::<Level>::new();
    presenter.expect_present().return_text("described");

    let level = forest_outpost();
    assert_eq!(level.describe(&presenter), "described");
    assert_eq!(presenter.presented(), vec![forest_outpost()]);
    presenter.verify();
}

#[test]
fn test_describe_reflects_clone_state() {
    let base = forest_outpost();
    let mut variant = base.copy();
    variant.enemies[0].hp = 40;

    assert!(base.describe(&ConsolePresenter).contains("Goblin(hp=30)@500,600"));
    assert!(variant.describe(&ConsolePresenter).contains("Goblin(hp=40)@500,600"));
}

#[test]
#[should_panic(expected = "terrain dimensions must be positive")]
fn test_zero_width_terrain_rejected() {
    Terrain::new("Forest", 0, 1200);
}
