//! Per-frame rules engine
//!
//! Owns the [`GameState`] and a [`Clock`], and is the only place where
//! collisions, damage, scoring and respawning are decided.

use glam::IVec2;

use super::clock::Clock;
use super::entity::Facing;
use super::geometry::Rect;
use super::state::{GameEvent, GamePhase, GameState};

/// Rules engine driving a world with time from `C`
#[derive(Debug)]
pub struct RulesEngine<C: Clock> {
    state: GameState,
    clock: C,
}

impl<C: Clock> RulesEngine<C> {
    pub fn new(state: GameState, clock: C) -> Self {
        Self { state, clock }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Center the player on `target`, turning to face the direction of travel.
    ///
    /// Purely vertical moves keep the current facing. No collisions are
    /// evaluated here; that happens in [`Self::update`].
    pub fn move_player(&mut self, target: IVec2) {
        if self.state.is_game_over() {
            return;
        }

        let player = &mut self.state.player;
        let previous = player.rect.center();
        player.rect.set_center(target);

        let new_x = player.rect.center().x;
        if new_x < previous.x {
            player.facing = Facing::Left;
        } else if new_x > previous.x {
            player.facing = Facing::Right;
        }
    }

    /// True if `rect` touches or crosses any edge of the field
    pub fn detect_border_collision(&self, rect: &Rect) -> bool {
        self.state.field.touches_border(rect)
    }

    /// Make the player immune to damage for the configured duration.
    /// Calling it again restarts the window.
    pub fn activate_player_invulnerability(&mut self) {
        let until = self.clock.now() + self.state.settings.invulnerability_ms;
        let player = &mut self.state.player;
        player.vulnerable = false;
        player.invulnerable_until = Some(until);
    }

    /// Advance the world by one frame
    pub fn update(&mut self) {
        if self.state.is_game_over() {
            return;
        }

        self.expire_invulnerability();

        if self.detect_border_collision(&self.state.player.rect) {
            self.damage_player();
            if self.state.is_game_over() {
                return;
            }
        }

        self.collect_gems();

        if self.state.gems.is_empty() {
            let count = self.state.settings.gem_respawn_count;
            self.state.populate_gems(count);
            self.state.push_event(GameEvent::GemsRespawned { count });
        }

        self.move_enemies();

        let player_rect = self.state.player.rect;
        if self
            .state
            .enemies
            .iter()
            .any(|e| e.rect.intersects(&player_rect))
        {
            self.damage_player();
        }
    }

    /// Go up one level and release a faster enemy. Returns the new level.
    pub fn advance_level(&mut self) -> u32 {
        self.state.level += 1;
        let level = self.state.level;
        let speed = self.state.settings.enemy_speed_for_level(level);
        self.state.spawn_enemy(speed);
        self.state.push_event(GameEvent::LevelAdvanced { level });
        log::info!("Level {} (enemy speed {})", level, speed);
        level
    }

    fn expire_invulnerability(&mut self) {
        let now = self.clock.now();
        let player = &mut self.state.player;
        if !player.vulnerable && player.invulnerable_until.is_none_or(|until| now >= until) {
            player.vulnerable = true;
            player.invulnerable_until = None;
        }
    }

    /// Take one life unless the player is invulnerable
    fn damage_player(&mut self) {
        if !self.state.player.vulnerable {
            return;
        }

        self.state.player.injure();
        let lives_left = self.state.player.lives;
        self.state.push_event(GameEvent::PlayerDamaged { lives_left });
        log::debug!("Player hit, {} lives left", lives_left);

        if !self.state.player.is_alive() {
            let score = self.state.score();
            self.state.phase = GamePhase::GameOver;
            self.state.push_event(GameEvent::GameOver { score });
            log::info!("Game over with score {}", score);
        }

        self.activate_player_invulnerability();
    }

    fn collect_gems(&mut self) {
        let player_rect = self.state.player.rect;
        let mut collected = Vec::new();
        self.state.gems.retain(|gem| {
            let hit = gem.rect.intersects(&player_rect);
            if hit {
                collected.push((gem.id, gem.value));
            }
            !hit
        });

        for (id, value) in collected {
            self.state.add_score(value as i64);
            self.state.push_event(GameEvent::GemCollected { id, value });
        }
    }

    fn move_enemies(&mut self) {
        let field = self.state.field;
        let mut bounced = Vec::new();
        for enemy in &mut self.state.enemies {
            enemy.advance();
            if enemy.bounce(&field) {
                bounced.push(enemy.id);
            }
        }

        for id in bounced {
            self.state.push_event(GameEvent::EnemyBounced { id });
        }
    }
}
