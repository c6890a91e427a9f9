//! Data-driven game balance
//!
//! Every tunable lives in one immutable [`Tuning`] value handed to the
//! controller at construction. Tuning files are JSON; missing fields fall
//! back to the defaults below.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MIN_FADE_TIME, MIN_REWARD};

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Scoring ===
    /// Reward for an instant correct click
    pub base_score: i64,
    /// Points lost per second of reaction time
    pub time_penalty: f32,
    /// Points lost per wrong click
    pub wrong_click_penalty: u64,

    // === Adaptive difficulty ===
    /// Number of recent reaction times in the rolling average
    pub reaction_window_size: usize,
    /// Average below this (seconds) counts as fast
    pub fast_reaction: f32,
    /// Average above this (seconds) counts as slow
    pub slow_reaction: f32,

    // === Fade ===
    /// Baseline fade duration for non-odd tiles (seconds)
    pub default_fade_time: f32,

    // === Rotation rule ===
    /// Odd tile rotation for average players (degrees)
    pub easy_rotation: f32,
    /// Odd tile rotation for fast players (degrees)
    pub hard_rotation: f32,

    // === Colors ===
    /// Color of every tile that isn't the color-rule odd tile (RGB, 0..1)
    pub normal_color: Vec3,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_score: 100,
            time_penalty: 30.0,
            wrong_click_penalty: 50,

            reaction_window_size: 5,
            fast_reaction: 0.8,
            slow_reaction: 1.5,

            default_fade_time: 3.0,

            easy_rotation: 45.0,
            hard_rotation: 20.0,

            normal_color: Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a tuning file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{e} ({}), using default tuning", path.display());
                Self::default()
            }
        }
    }

    /// Check invariants the controller relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        };

        if self.reaction_window_size == 0 {
            return invalid("reaction_window_size", "must hold at least one entry");
        }
        let finite = [
            ("time_penalty", self.time_penalty),
            ("fast_reaction", self.fast_reaction),
            ("slow_reaction", self.slow_reaction),
            ("default_fade_time", self.default_fade_time),
            ("easy_rotation", self.easy_rotation),
            ("hard_rotation", self.hard_rotation),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return invalid(field, "must be finite");
            }
        }
        if self.time_penalty < 0.0 {
            return invalid("time_penalty", "must not be negative");
        }
        if self.default_fade_time <= 0.0 {
            return invalid("default_fade_time", "must be positive");
        }
        if self.fast_reaction > self.slow_reaction {
            return invalid("fast_reaction", "must not exceed slow_reaction");
        }
        if !self
            .normal_color
            .to_array()
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
        {
            return invalid("normal_color", "channels must be within 0..=1");
        }
        Ok(())
    }

    /// Points earned by a correct click after `reaction_time` seconds
    ///
    /// Rounds half to even, never below [`MIN_REWARD`].
    pub fn reward_for(&self, reaction_time: f32) -> i64 {
        let penalty = (reaction_time * self.time_penalty).round_ties_even() as i64;
        (self.base_score - penalty).max(MIN_REWARD)
    }

    /// Fade duration for a rolling average reaction time
    pub fn fade_duration_for(&self, avg: f32) -> f32 {
        if avg < self.fast_reaction {
            (self.default_fade_time - 1.0).max(MIN_FADE_TIME)
        } else if avg > self.slow_reaction {
            self.default_fade_time + 1.0
        } else {
            self.default_fade_time
        }
    }

    /// Odd tile rotation for a rolling average reaction time (two-level)
    pub fn rotation_for(&self, avg: f32) -> f32 {
        if avg < self.fast_reaction {
            self.hard_rotation
        } else {
            self.easy_rotation
        }
    }
}
