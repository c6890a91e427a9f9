//! Odd Tile - find the tile that doesn't belong
//!
//! Core modules:
//! - `sim`: Deterministic round logic (rules, scoring, adaptive difficulty, fades)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use sim::{
    ClickOutcome, Difficulty, GameEvent, GameRunState, IgnoreReason, PcgRandom, RandomSource,
    ReactionWindow, RoundController, RuleType, ScoreState, Tile, TileFadeTimer, TileVisual,
};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed timestep used by the demo driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Tiles per round (3x3 grid)
    pub const GRID_TILES: usize = 9;

    /// Lowest reward a correct click can earn, however slow
    pub const MIN_REWARD: i64 = 10;
    /// Fade duration never drops below this on the fast path (seconds)
    pub const MIN_FADE_TIME: f32 = 1.5;
    /// Rolling average reported while no reaction time has been recorded (seconds)
    pub const NEUTRAL_REACTION_TIME: f32 = 1.2;
}
