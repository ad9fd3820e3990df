//! Data-driven game balance
//!
//! Every number that shapes the difficulty curve lives here instead of in the
//! simulation code. Hosts may load overrides from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_LIVES;
use crate::error::TuningError;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Balance constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    /// Downward acceleration per tick²
    pub gravity: f32,
    /// Upward velocity set by a jump (applied as a negative vel_y)
    pub jump_impulse: f32,

    // === Scroll speed ===
    /// Leftward obstacle speed per tick at run start
    pub initial_speed: f32,
    /// Speed added every time an obstacle is passed
    pub speed_step: f32,

    // === Spawning ===
    /// Ticks between spawns at run start
    pub initial_spawn_interval: u32,
    /// Interval reduction applied after each spawn
    pub spawn_interval_step: u32,
    /// Spawns never get more frequent than this
    pub spawn_interval_floor: u32,
    /// After a hit the spawn timer restarts at minus this many ticks
    pub spawn_grace_ticks: u32,

    // === Lives ===
    pub starting_lives: u8,
    /// How long the hit flash stays up
    pub hit_flash_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_impulse: 12.0,

            initial_speed: 6.0,
            speed_step: 0.25,

            initial_spawn_interval: 120,
            spawn_interval_step: 5,
            spawn_interval_floor: 60,
            spawn_grace_ticks: 45,

            starting_lives: MAX_LIVES,
            hit_flash_ticks: 30,
        }
    }
}

impl Tuning {
    /// Shipped balance for a preset
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let base = Self::default();
        match difficulty {
            Difficulty::Easy => Self {
                initial_speed: 5.0,
                speed_step: 0.15,
                initial_spawn_interval: 150,
                spawn_interval_floor: 80,
                ..base
            },
            Difficulty::Normal => base,
            Difficulty::Hard => Self {
                initial_speed: 7.5,
                speed_step: 0.35,
                initial_spawn_interval: 100,
                spawn_interval_step: 8,
                ..base
            },
        }
    }

    /// Parse overrides from JSON (missing fields keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    /// Reject values that would break the simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return invalid("gravity", "must be positive and finite");
        }
        if !(self.jump_impulse.is_finite() && self.jump_impulse > 0.0) {
            return invalid("jump_impulse", "must be positive and finite");
        }
        if !(self.initial_speed.is_finite() && self.initial_speed >= 0.0) {
            return invalid("initial_speed", "must be non-negative and finite");
        }
        if !(self.speed_step.is_finite() && self.speed_step >= 0.0) {
            return invalid("speed_step", "must be non-negative and finite");
        }
        if self.spawn_interval_floor == 0 {
            return invalid("spawn_interval_floor", "must be at least one tick");
        }
        if self.initial_spawn_interval < self.spawn_interval_floor {
            return invalid("initial_spawn_interval", "must not be below the floor");
        }
        if self.initial_spawn_interval > i32::MAX as u32 {
            return invalid("initial_spawn_interval", "is out of range");
        }
        if self.spawn_grace_ticks > i32::MAX as u32 {
            return invalid("spawn_grace_ticks", "is out of range");
        }
        if self.starting_lives == 0 || self.starting_lives > MAX_LIVES {
            return invalid("starting_lives", "must be between 1 and 3");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert!(Tuning::from_difficulty(difficulty).validate().is_ok());
        }
    }

    #[test]
    fn test_default_floor_is_sixty() {
        assert_eq!(Tuning::default().spawn_interval_floor, 60);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.8 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.jump_impulse, Tuning::default().jump_impulse);
    }

    #[test]
    fn test_rejects_floor_above_initial() {
        let err = Tuning::from_json(r#"{ "initial_spawn_interval": 30 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "initial_spawn_interval",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_huge_spawn_interval() {
        let err = Tuning::from_json(r#"{ "initial_spawn_interval": 3000000000 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "initial_spawn_interval",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_too_many_lives() {
        let tuning = Tuning {
            starting_lives: 4,
            ..Tuning::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ gravity"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("norm"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::parse("nightmare"), None);
        assert_eq!(Difficulty::Easy.as_str(), "Easy");
    }
}
