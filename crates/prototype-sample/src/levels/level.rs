use super::{Enemy, Obstacle, Terrain};
use prototype_framework::{Presenter, Prototype, Text};
use tracing::trace;

/// A playable level: terrain plus two independently typed collections.
#[derive(Debug, PartialEq)]
pub struct Level {
    pub name: Text,
    pub terrain: Terrain,
    pub obstacles: Vec<Obstacle>,
    pub enemies: Vec<Enemy>,
}

impl Level {
    /// Creates an empty level.
    pub fn new(name: impl Into<Text>, terrain: Terrain) -> Self {
        Self {
            name: name.into(),
            terrain,
            obstacles: Vec::new(),
            enemies: Vec::new(),
        }
    }

    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.add_obstacle(obstacle);
        self
    }

    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.add_enemy(enemy);
        self
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn describe(&self, presenter: &dyn Presenter<Level>) -> String {
        presenter.present(self)
    }
}

impl Prototype for Level {
    fn copy(&self) -> Self {
        trace!(
            name = %self.name,
            obstacles = self.obstacles.len(),
            enemies = self.enemies.len(),
            "Copy level"
        );
        Self {
            name: self.name.copy(),
            terrain: self.terrain.copy(),
            obstacles: self.obstacles.copy(),
            enemies: self.enemies.copy(),
        }
    }
}
