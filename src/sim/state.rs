//! Round state and core value types
//!
//! Everything the presentation layer reads lives here as plain values.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::fade::TileFadeTimer;

/// Which visual attribute sets the odd tile apart this round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleType {
    /// Odd tile has a random color
    Color,
    /// Odd tile is rotated
    Rotation,
}

impl RuleType {
    pub const ALL: [RuleType; 2] = [RuleType::Color, RuleType::Rotation];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::Color => "Color",
            RuleType::Rotation => "Rotation",
        }
    }
}

/// Whether rounds advance and clicks are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameRunState {
    #[default]
    Running,
    Stopped,
}

/// What the renderer draws for one tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileVisual {
    /// RGB, 0..1 per channel
    pub color: Vec3,
    /// Rotation about the view axis (degrees)
    pub rotation_degrees: f32,
    /// Visibility, 0..1
    pub alpha: f32,
}

impl TileVisual {
    pub fn new(color: Vec3) -> Self {
        Self {
            color,
            rotation_degrees: 0.0,
            alpha: 1.0,
        }
    }
}

/// One grid cell of the current round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub id: u32,
    pub is_odd: bool,
    pub visual: TileVisual,
    #[serde(skip)]
    fade: TileFadeTimer,
}

impl Tile {
    pub fn new(id: u32, is_odd: bool, color: Vec3) -> Self {
        Self {
            id,
            is_odd,
            visual: TileVisual::new(color),
            fade: TileFadeTimer::default(),
        }
    }

    /// Begin (or restart) fading this tile out over `duration` seconds
    ///
    /// The odd tile never fades.
    pub fn start_fade(&mut self, duration: f32) {
        if self.is_odd {
            return;
        }
        self.fade.start(duration);
        self.visual.alpha = 1.0;
    }

    /// Stop fading, leaving alpha where it is
    pub fn cancel_fade(&mut self) {
        self.fade.cancel();
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_fading()
    }

    /// Advance this tile's fade by one scheduler tick
    pub fn tick(&mut self, dt: f32) {
        if let Some(alpha) = self.fade.tick(dt) {
            self.visual.alpha = alpha;
        }
    }
}

/// Score counters shown by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub total_score: u64,
    pub wrong_clicks: u32,
}

/// Difficulty parameters derived from the rolling reaction average
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Fade duration for non-odd tiles (seconds)
    pub fade_duration: f32,
    /// Odd tile rotation under the Rotation rule (degrees)
    pub rotation_angle: f32,
}

/// Why a click was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Game is stopped
    Stopped,
    /// Tile id is not part of the current round
    UnknownTile,
}

/// Result of delivering a click to the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    Correct { reward: u64, reaction_time: f32 },
    Wrong { penalty_applied: u64 },
    Ignored(IgnoreReason),
}

/// Notifications for the UI layer, drained by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    RoundStarted {
        round: u32,
        rule: RuleType,
        odd_tile: u32,
    },
    ScoreChanged(ScoreState),
    DifficultyChanged(Difficulty),
    GameStopped {
        final_score: u64,
    },
    GameReset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_tile_never_fades() {
        let mut tile = Tile::new(1, true, Vec3::ONE);
        tile.start_fade(1.0);
        assert!(!tile.is_fading());
        tile.tick(0.5);
        assert_eq!(tile.visual.alpha, 1.0);
    }

    #[test]
    fn test_tile_fade_drives_alpha() {
        let mut tile = Tile::new(1, false, Vec3::Z);
        tile.start_fade(2.0);
        tile.tick(1.0);
        assert!((tile.visual.alpha - 0.5).abs() < 1e-6);
        tile.tick(1.0);
        assert_eq!(tile.visual.alpha, 0.0);
        assert!(!tile.is_fading());
    }

    #[test]
    fn test_cancel_freezes_alpha() {
        let mut tile = Tile::new(1, false, Vec3::Z);
        tile.start_fade(4.0);
        tile.tick(1.0);
        tile.cancel_fade();
        tile.tick(1.0);
        assert!((tile.visual.alpha - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_restart_resets_to_full_alpha() {
        let mut tile = Tile::new(1, false, Vec3::Z);
        tile.start_fade(2.0);
        tile.tick(1.5);
        tile.start_fade(2.0);
        assert_eq!(tile.visual.alpha, 1.0);
        tile.tick(0.5);
        assert!((tile.visual.alpha - 0.75).abs() < 1e-6);
    }
}
