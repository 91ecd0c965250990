//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only from an injected [`Clock`]
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod clock;
pub mod entity;
pub mod geometry;
pub mod rules;
pub mod state;
pub mod tick;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use entity::{DIAGONALS, Enemy, Facing, Gem, Player, Spawnable};
pub use geometry::{Field, Rect};
pub use rules::RulesEngine;
pub use state::{GameEvent, GamePhase, GameState, SpriteKind, SpriteView};
pub use tick::{TickInput, autopilot_target, tick};
