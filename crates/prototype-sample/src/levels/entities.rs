//! Placed things: obstacles and enemies. All fields are scalars, so a copy shares nothing
//! mutable.

use prototype_framework::{prototype, Text};
use std::fmt::Display;

#[derive(Debug, PartialEq)]
pub struct Obstacle {
    pub kind: Text,
    pub x: u32,
    pub y: u32,
}

prototype!(Obstacle { kind, x, y });

impl Obstacle {
    pub fn new(kind: impl Into<Text>, x: u32, y: u32) -> Self {
        Self {
            kind: kind.into(),
            x,
            y,
        }
    }
}

impl Display for Obstacle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{},{}", self.kind, self.x, self.y)
    }
}

#[derive(Debug, PartialEq)]
pub struct Enemy {
    pub kind: Text,
    pub hp: u32,
    pub x: u32,
    pub y: u32,
}

prototype!(Enemy { kind, hp, x, y });

impl Enemy {
    /// Creates a new Enemy.
    ///
    /// # Panics
    /// If `hp` is zero.
    pub fn new(kind: impl Into<Text>, hp: u32, x: u32, y: u32) -> Self {
        assert!(hp > 0, "enemy must start with positive hp");
        Self {
            kind: kind.into(),
            hp,
            x,
            y,
        }
    }
}

impl Display for Enemy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(hp={})@{},{}", self.kind, self.hp, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Obstacle::new("Rock", 100, 200).to_string(), "Rock@100,200");
        assert_eq!(Enemy::new("Goblin", 30, 500, 600).to_string(), "Goblin(hp=30)@500,600");
    }

    #[test]
    #[should_panic(expected = "positive hp")]
    fn test_enemy_rejects_zero_hp() {
        Enemy::new("Ghost", 0, 0, 0);
    }
}
