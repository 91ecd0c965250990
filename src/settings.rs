//! Game settings
//!
//! Field size, entity sizes and balance numbers. Loaded once at startup from a
//! JSON file, falling back to defaults for any missing key.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: i32,
    pub field_height: i32,

    // === Player ===
    pub player_size: IVec2,
    pub player_lives: u32,
    /// Damage immunity after a hit (ms)
    pub invulnerability_ms: u64,

    // === Gems ===
    pub gem_size: IVec2,
    pub gem_value: u32,
    /// Gems placed when a run starts
    pub initial_gems: u32,
    /// Gems placed whenever the field runs out
    pub gem_respawn_count: u32,

    // === Enemies ===
    pub enemy_size: IVec2,
    pub enemy_speed: i32,
    /// Extra speed per level for enemies spawned on level advance
    pub enemy_speed_step: i32,
    /// Enemies placed when a run starts
    pub initial_enemies: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_size: IVec2::splat(PLAYER_SIZE),
            player_lives: PLAYER_START_LIVES,
            invulnerability_ms: INVULNERABILITY_MS,

            gem_size: IVec2::splat(GEM_SIZE),
            gem_value: GEM_VALUE,
            initial_gems: GEM_RESPAWN_COUNT,
            gem_respawn_count: GEM_RESPAWN_COUNT,

            enemy_size: IVec2::splat(ENEMY_SIZE),
            enemy_speed: ENEMY_SPEED,
            enemy_speed_step: 1,
            initial_enemies: 0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, then validate them
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Check that every spawnable entity fits inside the field
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.field_width <= 0 || self.field_height <= 0 {
            return Err(SettingsError::NotPositive("field size"));
        }
        if self.enemy_speed <= 0 {
            return Err(SettingsError::NotPositive("enemy_speed"));
        }
        if self.enemy_speed_step < 0 {
            return Err(SettingsError::Negative("enemy_speed_step"));
        }
        if self.gem_value == 0 {
            return Err(SettingsError::NotPositive("gem_value"));
        }
        if self.invulnerability_ms == 0 {
            return Err(SettingsError::NotPositive("invulnerability_ms"));
        }
        if self.gem_respawn_count == 0 {
            return Err(SettingsError::NotPositive("gem_respawn_count"));
        }

        let entities = [
            ("player", self.player_size),
            ("gem", self.gem_size),
            ("enemy", self.enemy_size),
        ];
        for (entity, size) in entities {
            if size.x <= 0 || size.y <= 0 {
                return Err(SettingsError::NotPositive(entity));
            }
            if self.field_width <= size.x || self.field_height <= size.y {
                return Err(SettingsError::FieldTooSmall {
                    entity,
                    width: size.x,
                    height: size.y,
                    field_width: self.field_width,
                    field_height: self.field_height,
                });
            }
        }

        Ok(())
    }

    /// Speed for an enemy spawned when entering `level` (at least 1)
    pub fn enemy_speed_for_level(&self, level: u32) -> i32 {
        let level = i32::try_from(level).unwrap_or(i32::MAX);
        self.enemy_speed
            .saturating_add(self.enemy_speed_step.saturating_mul(level))
            .max(1)
    }
}
