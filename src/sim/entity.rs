//! Player, gem and enemy entities
//!
//! Plain data holders. Per-frame behavior lives in the rules engine.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Field, Rect};

/// Something the world can drop at a random spot on the field
pub trait Spawnable {
    /// Current bounding box
    fn rect(&self) -> &Rect;

    /// Move the top-left anchor to `pos`
    fn place(&mut self, pos: IVec2);

    fn size(&self) -> IVec2 {
        self.rect().size
    }
}

/// Horizontal facing of the player sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The player's character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub lives: u32,
    pub vulnerable: bool,
    pub facing: Facing,
    /// Timestamp (ms) at which invulnerability ends
    pub invulnerable_until: Option<u64>,
}

impl Player {
    pub fn new(size: IVec2, lives: u32) -> Self {
        Self {
            rect: Rect::with_size(size),
            lives,
            vulnerable: true,
            facing: Facing::Right,
            invulnerable_until: None,
        }
    }

    /// Place the player in the middle of the field
    pub fn centered_in(mut self, field: &Field) -> Self {
        self.rect.set_center(IVec2::new(field.width / 2, field.height / 2));
        self
    }

    /// Lose one life (never below zero)
    pub fn injure(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }
}

/// A collectible gem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gem {
    pub id: u32,
    pub rect: Rect,
    /// Points awarded on pickup
    pub value: u32,
}

impl Gem {
    pub fn new(id: u32, size: IVec2, value: u32) -> Self {
        Self {
            id,
            rect: Rect::with_size(size),
            value,
        }
    }
}

impl Spawnable for Gem {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn place(&mut self, pos: IVec2) {
        self.rect.pos = pos;
    }
}

/// A hostile mover bouncing diagonally around the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub rect: Rect,
    /// Unit diagonal, each component is -1 or +1
    pub direction: IVec2,
    /// Pixels per tick along each axis
    pub speed: i32,
}

/// The four diagonal headings an enemy can spawn with
pub const DIAGONALS: [IVec2; 4] = [
    IVec2::new(1, 1),
    IVec2::new(-1, 1),
    IVec2::new(1, -1),
    IVec2::new(-1, -1),
];

impl Enemy {
    pub fn new(id: u32, size: IVec2, direction: IVec2, speed: i32) -> Self {
        Self {
            id,
            rect: Rect::with_size(size),
            direction,
            speed,
        }
    }

    /// Advance one tick along the current heading
    pub fn advance(&mut self) {
        self.rect.translate(self.direction * self.speed);
    }

    /// Reflect the heading off any field edge the enemy is touching.
    ///
    /// Each axis is checked on its own, so a corner hit flips both. An axis
    /// only flips while heading into the wall it touches; touching a wall
    /// while already moving away from it leaves the heading unchanged.
    /// Returns true if the heading changed.
    pub fn bounce(&mut self, field: &Field) -> bool {
        let before = self.direction;

        if (self.rect.left() <= 0 && self.direction.x < 0)
            || (self.rect.right() >= field.width && self.direction.x > 0)
        {
            self.direction.x = -self.direction.x;
        }
        if (self.rect.top() <= 0 && self.direction.y < 0)
            || (self.rect.bottom() >= field.height && self.direction.y > 0)
        {
            self.direction.y = -self.direction.y;
        }

        self.direction != before
    }
}

impl Spawnable for Enemy {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn place(&mut self, pos: IVec2) {
        self.rect.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injure_saturates() {
        let mut player = Player::new(IVec2::splat(50), 1);
        player.injure();
        assert_eq!(player.lives, 0);
        player.injure();
        assert_eq!(player.lives, 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_enemy_advance_scales_with_speed() {
        let mut enemy = Enemy::new(1, IVec2::splat(40), IVec2::new(-1, 1), 3);
        enemy.place(IVec2::new(100, 100));
        enemy.advance();
        assert_eq!(enemy.rect.pos, IVec2::new(97, 103));
    }

    #[test]
    fn test_bounce_each_wall() {
        let field = Field::new(1280, 720);
        // (center, initial heading, expected heading)
        let cases = [
            (IVec2::new(100, 0), IVec2::new(1, -1), IVec2::new(1, 1)),
            (IVec2::new(0, 100), IVec2::new(-1, 1), IVec2::new(1, 1)),
            (IVec2::new(100, 720), IVec2::new(1, 1), IVec2::new(1, -1)),
            (IVec2::new(1280, 100), IVec2::new(1, 1), IVec2::new(-1, 1)),
            (IVec2::new(0, 0), IVec2::new(-1, -1), IVec2::new(1, 1)),
        ];

        for (center, heading, expected) in cases {
            let mut enemy = Enemy::new(1, IVec2::splat(40), heading, 1);
            enemy.rect.set_center(center);
            assert!(enemy.bounce(&field));
            assert_eq!(enemy.direction, expected, "center {center:?}");
        }
    }

    #[test]
    fn test_bounce_ignores_heading_away_from_wall() {
        let field = Field::new(1280, 720);
        let mut enemy = Enemy::new(1, IVec2::splat(40), IVec2::new(1, 1), 1);
        enemy.place(IVec2::new(100, 0));
        assert!(!enemy.bounce(&field));
        assert_eq!(enemy.direction, IVec2::new(1, 1));
    }
}
