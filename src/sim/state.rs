//! World state and core simulation types
//!
//! The authoritative snapshot the renderer reads each frame. It offers
//! mutation primitives and score bookkeeping but no per-frame behavior.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::entity::{DIAGONALS, Enemy, Gem, Player, Spawnable};
use super::geometry::{Field, Rect};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player ran out of lives
    GameOver,
}

/// Things that happened during a tick, for audio/visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    GemCollected { id: u32, value: u32 },
    GemsRespawned { count: u32 },
    PlayerDamaged { lives_left: u32 },
    EnemyBounced { id: u32 },
    LevelAdvanced { level: u32 },
    GameOver { score: u64 },
}

/// Kind tag for the all-sprites view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Player,
    Gem,
    Enemy,
}

/// Read-only view of one live entity, for enumeration by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpriteView {
    pub kind: SpriteKind,
    pub rect: Rect,
}

/// Complete world state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Play field bounds (fixed for the session)
    pub field: Field,
    /// Balance numbers the spawners draw from
    #[serde(skip)]
    pub settings: Settings,
    /// The player (never removed, only mutated)
    pub player: Player,
    /// Collectible gems (ordered by id)
    pub gems: Vec<Gem>,
    /// Hostile movers (ordered by id)
    pub enemies: Vec<Enemy>,
    /// Current level (0-based)
    pub level: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Cumulative score
    score: u64,
    /// Events raised since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
    /// Placement and heading RNG
    #[serde(skip)]
    rng: Pcg32,
}

impl GameState {
    /// Create a new world from validated settings, seeding placement with `seed`
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, Pcg32::seed_from_u64(seed))
    }

    /// Create a new world drawing placements from `rng`
    pub fn with_rng(settings: Settings, rng: Pcg32) -> Self {
        let field = Field::new(settings.field_width, settings.field_height);
        let player = Player::new(settings.player_size, settings.player_lives).centered_in(&field);

        let mut state = Self {
            field,
            player,
            gems: Vec::new(),
            enemies: Vec::new(),
            level: 0,
            phase: GamePhase::Playing,
            score: 0,
            events: Vec::new(),
            next_id: 1,
            rng,
            settings,
        };

        state.populate_gems(state.settings.initial_gems);
        for _ in 0..state.settings.initial_enemies {
            state.spawn_enemy(state.settings.enemy_speed);
        }

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Add `points` to the score. Negative values are ignored.
    pub fn add_score(&mut self, points: i64) {
        if points >= 0 {
            self.score = self.score.saturating_add(points as u64);
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Random top-left anchor that keeps `entity` fully inside the field.
    ///
    /// Panics if the field is not larger than the entity; [`Settings::validate`]
    /// rules that out for configured entity sizes.
    pub fn spawn_random_position(&mut self, entity: &impl Spawnable) -> IVec2 {
        let size = entity.size();
        assert!(
            self.field.fits(size),
            "field {}x{} cannot hold an entity of size {}x{}",
            self.field.width,
            self.field.height,
            size.x,
            size.y
        );

        let x = self.rng.random_range(1..=self.field.width - size.x);
        let y = self.rng.random_range(1..=self.field.height - size.y);
        IVec2::new(x, y)
    }

    fn place_randomly(&mut self, entity: &mut impl Spawnable) {
        let pos = self.spawn_random_position(entity);
        entity.place(pos);
    }

    /// Spawn an enemy with a random diagonal heading at a random spot.
    /// Speeds below 1 are raised to 1. Returns the new enemy's id.
    pub fn spawn_enemy(&mut self, speed: i32) -> u32 {
        let speed = speed.max(1);
        let direction = DIAGONALS[self.rng.random_range(0..DIAGONALS.len())];
        let id = self.next_entity_id();
        let mut enemy = Enemy::new(id, self.settings.enemy_size, direction, speed);
        self.place_randomly(&mut enemy);
        log::debug!("Spawned enemy {} at {:?} heading {:?}", id, enemy.rect.pos, direction);
        self.enemies.push(enemy);
        id
    }

    /// Place `count` new gems, each at an independent random spot
    pub fn populate_gems(&mut self, count: u32) {
        for _ in 0..count {
            let id = self.next_entity_id();
            let mut gem = Gem::new(id, self.settings.gem_size, self.settings.gem_value);
            self.place_randomly(&mut gem);
            self.gems.push(gem);
        }
    }

    /// Add a gem at an exact position. Returns its id.
    pub fn insert_gem(&mut self, pos: IVec2, value: u32) -> u32 {
        let id = self.next_entity_id();
        let mut gem = Gem::new(id, self.settings.gem_size, value);
        gem.place(pos);
        self.gems.push(gem);
        id
    }

    /// Add an enemy at an exact position. Returns its id.
    pub fn insert_enemy(&mut self, pos: IVec2, direction: IVec2, speed: i32) -> u32 {
        let id = self.next_entity_id();
        let mut enemy = Enemy::new(id, self.settings.enemy_size, direction, speed);
        enemy.place(pos);
        self.enemies.push(enemy);
        id
    }

    pub fn remove_gem(&mut self, id: u32) -> Option<Gem> {
        let idx = self.gems.iter().position(|g| g.id == id)?;
        Some(self.gems.remove(idx))
    }

    pub fn remove_enemy(&mut self, id: u32) -> Option<Enemy> {
        let idx = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(idx))
    }

    /// Player, gems and enemies, in that order
    pub fn sprites(&self) -> impl Iterator<Item = SpriteView> + '_ {
        let player = std::iter::once(SpriteView {
            kind: SpriteKind::Player,
            rect: self.player.rect,
        });
        let gems = self.gems.iter().map(|g| SpriteView {
            kind: SpriteKind::Gem,
            rect: g.rect,
        });
        let enemies = self.enemies.iter().map(|e| SpriteView {
            kind: SpriteKind::Enemy,
            rect: e.rect,
        });
        player.chain(gems).chain(enemies)
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bare_settings() -> Settings {
        Settings {
            initial_gems: 0,
            initial_enemies: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(Settings::default(), 12345);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.gems.len(), 1);
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.rect.center(), IVec2::new(640, 360));
        assert!(state.player.vulnerable);
    }

    #[test]
    fn test_negative_score_is_ignored() {
        let mut state = GameState::new(bare_settings(), 1);
        state.add_score(-5);
        state.add_score(10);
        assert_eq!(state.score(), 10);
    }

    #[test]
    fn test_populate_gems() {
        let mut state = GameState::new(bare_settings(), 7);
        state.populate_gems(5);
        assert_eq!(state.gems.len(), 5);
        for gem in &state.gems {
            assert_eq!(gem.value, 100);
            assert!(state.field.contains(&gem.rect));
        }
        // Unique ids
        let mut ids: Vec<_> = state.gems.iter().map(|g| g.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_spawn_enemy_uses_diagonal_heading() {
        let mut state = GameState::new(bare_settings(), 99);
        for speed in 1..=20 {
            let id = state.spawn_enemy(speed);
            let enemy = state.enemies.iter().find(|e| e.id == id).unwrap();
            assert!(DIAGONALS.contains(&enemy.direction));
            assert_eq!(enemy.speed, speed);
            assert!(state.field.contains(&enemy.rect));
        }
    }

    #[test]
    fn test_spawning_is_deterministic_per_seed() {
        let mut a = GameState::new(bare_settings(), 4242);
        let mut b = GameState::new(bare_settings(), 4242);
        a.populate_gems(3);
        b.populate_gems(3);
        a.spawn_enemy(2);
        b.spawn_enemy(2);

        let pos = |s: &GameState| s.sprites().map(|v| v.rect.pos).collect::<Vec<_>>();
        assert_eq!(pos(&a), pos(&b));
        assert_eq!(a.enemies[0].direction, b.enemies[0].direction);
    }

    #[test]
    fn test_spawn_enemy_raises_speed_to_one() {
        let mut state = GameState::new(bare_settings(), 8);
        for speed in [0, -2, i32::MIN] {
            let id = state.spawn_enemy(speed);
            let enemy = state.enemies.iter().find(|e| e.id == id).unwrap();
            assert_eq!(enemy.speed, 1);
        }
    }

    #[test]
    fn test_every_heading_is_reachable() {
        let mut state = GameState::new(bare_settings(), 3);
        for _ in 0..200 {
            state.spawn_enemy(1);
        }
        for heading in DIAGONALS {
            assert!(state.enemies.iter().any(|e| e.direction == heading));
        }
    }

    #[test]
    #[should_panic(expected = "cannot hold")]
    fn test_spawn_in_too_small_field_panics() {
        let mut state = GameState::new(bare_settings(), 1);
        state.field = Field::new(40, 720);
        state.populate_gems(1);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut state = GameState::new(bare_settings(), 1);
        let gem = state.insert_gem(IVec2::new(10, 10), 250);
        let enemy = state.insert_enemy(IVec2::new(20, 20), IVec2::new(1, -1), 2);
        assert_eq!(state.sprites().count(), 3);

        assert_eq!(state.remove_gem(gem).map(|g| g.value), Some(250));
        assert!(state.remove_gem(gem).is_none());
        assert!(state.remove_enemy(enemy).is_some());
        assert_eq!(state.sprites().count(), 1);
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::new(bare_settings(), 1);
        state.push_event(GameEvent::LevelAdvanced { level: 1 });
        assert_eq!(state.drain_events(), vec![GameEvent::LevelAdvanced { level: 1 }]);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(Settings::default(), 5);
        let json = serde_json::to_string(&state).expect("serialize");
        assert!(json.contains("\"score\":0"));
        assert!(json.contains("\"gems\""));
    }

    proptest! {
        #[test]
        fn prop_spawn_stays_in_bounds(seed in any::<u64>(), w in 41i32..400, h in 41i32..400) {
            let settings = Settings { field_width: w, field_height: h, ..bare_settings() };
            let mut state = GameState::new(settings, seed);
            let gem = Gem::new(0, IVec2::splat(40), 100);
            let pos = state.spawn_random_position(&gem);
            prop_assert!(pos.x >= 1 && pos.x <= w - 40);
            prop_assert!(pos.y >= 1 && pos.y <= h - 40);
        }
    }
}
