//! Deterministic round simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances only through explicit ticks
//! - Randomness only through a `RandomSource`
//! - No rendering, input or platform dependencies

pub mod fade;
pub mod rng;
pub mod round;
pub mod state;
pub mod window;

pub use fade::{FadeState, TileFadeTimer};
pub use rng::{PcgRandom, RandomSource};
pub use round::RoundController;
pub use state::{
    ClickOutcome, Difficulty, GameEvent, GameRunState, IgnoreReason, RuleType, ScoreState, Tile,
    TileVisual,
};
pub use window::ReactionWindow;
