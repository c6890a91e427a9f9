//! Per-tile fade countdown
//!
//! Linearly decays alpha from 1 to 0 over a duration, advanced by explicit
//! ticks. Idle -> start() -> Fading -> (elapsed >= duration | cancel()) -> Idle.

use serde::{Deserialize, Serialize};

/// Fade timer state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum FadeState {
    #[default]
    Idle,
    Fading { elapsed: f32, duration: f32 },
}

/// Countdown that reports a tile's alpha each tick while fading
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TileFadeTimer {
    state: FadeState,
}

impl TileFadeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start fading over `duration` seconds, discarding any fade in flight
    pub fn start(&mut self, duration: f32) {
        self.state = FadeState::Fading {
            elapsed: 0.0,
            duration,
        };
    }

    /// Stop advancing. No further alpha updates until the next start().
    pub fn cancel(&mut self) {
        self.state = FadeState::Idle;
    }

    pub fn is_fading(&self) -> bool {
        matches!(self.state, FadeState::Fading { .. })
    }

    pub fn state(&self) -> FadeState {
        self.state
    }

    /// Advance by `dt` seconds
    ///
    /// Returns the new alpha while fading, `None` when idle. The tick that
    /// reaches the duration returns 0 and leaves the timer idle.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        let FadeState::Fading { elapsed, duration } = &mut self.state else {
            return None;
        };

        *elapsed += dt.max(0.0);
        let t = if *duration > 0.0 {
            (*elapsed / *duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let alpha = lerp(1.0, 0.0, t);

        if *elapsed >= *duration {
            self.state = FadeState::Idle;
        }
        Some(alpha)
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
