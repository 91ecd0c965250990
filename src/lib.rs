//! Gem Poacher - A top-down arcade gem collecting game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world state, rules engine, collisions)
//! - `settings`: Data-driven game configuration
//! - `error`: Configuration errors
//!
//! Rendering, audio and input decoding are external collaborators. They read
//! [`sim::GameState`] and feed [`sim::TickInput`] into [`sim::tick`].

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: i32 = 1280;
    pub const FIELD_HEIGHT: i32 = 720;

    /// Player sprite size
    pub const PLAYER_SIZE: i32 = 50;
    /// Lives at the start of a run
    pub const PLAYER_START_LIVES: u32 = 3;

    /// Gem sprite size
    pub const GEM_SIZE: i32 = 40;
    /// Points awarded per gem
    pub const GEM_VALUE: u32 = 100;

    /// Enemy sprite size
    pub const ENEMY_SIZE: i32 = 40;
    /// Default enemy speed (pixels per tick, per axis)
    pub const ENEMY_SPEED: i32 = 1;

    /// How long the player ignores damage after being hit (ms)
    pub const INVULNERABILITY_MS: u64 = 1000;

    /// Gems spawned when the collection runs empty
    pub const GEM_RESPAWN_COUNT: u32 = 1;

    /// Autopilot step per tick (pixels)
    pub const AUTOPILOT_STEP: i32 = 12;
}
