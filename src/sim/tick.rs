//! Frame tick
//!
//! Applies one frame's decoded input to the rules engine, then advances the
//! world. This is what a frame driver calls once per tick.

use glam::IVec2;

use super::clock::Clock;
use super::rules::RulesEngine;
use super::state::{GameEvent, GameState};
use crate::consts::AUTOPILOT_STEP;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Where the player's center should go (from mouse/touch position)
    pub target: Option<IVec2>,
    /// Go up one level and release a faster enemy
    pub advance_level: bool,
    /// Idle/demo mode - the player chases the nearest gem
    pub autopilot: bool,
}

/// Run one frame and return the events it raised
pub fn tick<C: Clock>(engine: &mut RulesEngine<C>, input: &TickInput) -> Vec<GameEvent> {
    let target = match input.target {
        Some(target) => Some(target),
        None if input.autopilot => autopilot_target(engine.state()),
        None => None,
    };

    if let Some(target) = target {
        engine.move_player(target);
    }

    if input.advance_level && !engine.state().is_game_over() {
        engine.advance_level();
    }

    engine.update();
    engine.state_mut().drain_events()
}

/// Next player center when chasing the nearest gem, one capped step at a time.
/// The player is kept one pixel clear of every edge.
pub fn autopilot_target(state: &GameState) -> Option<IVec2> {
    let rect = state.player.rect;
    let center = rect.center();
    let half = rect.size / 2;
    let lowest = half + 1;
    let highest = IVec2::new(state.field.width, state.field.height) - rect.size + half - 1;
    let gem = state
        .gems
        .iter()
        .map(|g| g.rect.center())
        .min_by_key(|&c| {
            let d = c - center;
            d.dot(d)
        })?;

    let step = (gem - center).clamp(IVec2::splat(-AUTOPILOT_STEP), IVec2::splat(AUTOPILOT_STEP));
    Some((center + step).max(lowest).min(highest))
}
