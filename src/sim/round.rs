//! Round controller
//!
//! Owns the run state, generates rounds, scores clicks and adapts difficulty
//! from the rolling reaction window. Driven entirely by the host: clicks
//! arrive through [`RoundController::on_tile_clicked`], time advances only
//! through [`RoundController::on_tick`].

use glam::Vec3;

use super::rng::{PcgRandom, RandomSource};
use super::state::{
    ClickOutcome, Difficulty, GameEvent, GameRunState, IgnoreReason, RuleType, ScoreState, Tile,
};
use super::window::ReactionWindow;
use crate::consts::{GRID_TILES, NEUTRAL_REACTION_TIME};
use crate::tuning::Tuning;

/// Game state machine for one player session
#[derive(Debug, Clone)]
pub struct RoundController<R: RandomSource = PcgRandom> {
    tuning: Tuning,
    rng: R,
    run_state: GameRunState,
    /// Current round's tiles (replaced wholesale each round)
    tiles: Vec<Tile>,
    rule: RuleType,
    /// Rounds generated since construction
    round: u32,
    /// Game clock (seconds), advanced by on_tick
    clock: f64,
    round_start_time: f64,
    window: ReactionWindow,
    fade_duration: f32,
    score: ScoreState,
    /// Pending UI notifications
    events: Vec<GameEvent>,
    /// Next tile ID
    next_id: u32,
}

impl<R: RandomSource> RoundController<R> {
    /// Create a running controller with no round yet; call `initialize()` to start
    pub fn new(tuning: Tuning, rng: R) -> Self {
        Self {
            fade_duration: tuning.default_fade_time,
            window: ReactionWindow::new(tuning.reaction_window_size),
            tuning,
            rng,
            run_state: GameRunState::Running,
            tiles: Vec::with_capacity(GRID_TILES),
            rule: RuleType::Color,
            round: 0,
            clock: 0.0,
            round_start_time: 0.0,
            score: ScoreState::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Publish the initial score and generate the first round
    pub fn initialize(&mut self) {
        self.push_score();
        self.start_round();
    }

    /// Advance the game clock and every tile's fade by `dt` seconds
    pub fn on_tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.clock += f64::from(dt);
        for tile in &mut self.tiles {
            tile.tick(dt);
        }
    }

    /// Replace the grid with a fresh round. No-op while stopped.
    pub fn start_round(&mut self) {
        if self.run_state != GameRunState::Running {
            return;
        }

        self.clear_grid();
        self.round_start_time = self.clock;

        let odd_index = self.rng.odd_index(GRID_TILES);
        self.rule = self.rng.rule();

        let mut odd_tile = 0;
        for i in 0..GRID_TILES {
            let id = self.next_tile_id();
            let is_odd = i == odd_index;
            let mut tile = Tile::new(id, is_odd, self.tuning.normal_color);
            self.apply_rule(&mut tile);
            if is_odd {
                odd_tile = id;
            }
            self.tiles.push(tile);
        }

        for tile in &mut self.tiles {
            tile.start_fade(self.fade_duration);
        }

        self.round += 1;
        log::debug!(
            "Round {}: rule={}, odd index={}, fade={}s",
            self.round,
            self.rule.as_str(),
            odd_index,
            self.fade_duration
        );
        self.events.push(GameEvent::RoundStarted {
            round: self.round,
            rule: self.rule,
            odd_tile,
        });
    }

    /// Set a tile's color and rotation for the current rule
    pub fn apply_rule(&mut self, tile: &mut Tile) {
        match self.rule {
            RuleType::Color => {
                tile.visual.color = if tile.is_odd {
                    Vec3::new(self.rng.unit(), self.rng.unit(), self.rng.unit())
                } else {
                    self.tuning.normal_color
                };
                tile.visual.rotation_degrees = 0.0;
            }
            RuleType::Rotation => {
                tile.visual.color = self.tuning.normal_color;
                tile.visual.rotation_degrees = if tile.is_odd {
                    self.rotation_angle()
                } else {
                    0.0
                };
            }
        }
    }

    /// Handle a click on `tile_id`
    pub fn on_tile_clicked(&mut self, tile_id: u32) -> ClickOutcome {
        if self.run_state != GameRunState::Running {
            return ClickOutcome::Ignored(IgnoreReason::Stopped);
        }
        let Some(is_odd) = self.tile(tile_id).map(|t| t.is_odd) else {
            log::debug!("Ignoring click on stale tile {}", tile_id);
            return ClickOutcome::Ignored(IgnoreReason::UnknownTile);
        };

        let reaction_time = (self.clock - self.round_start_time) as f32;

        if is_odd {
            self.window.push(reaction_time);
            let reward = self.tuning.reward_for(reaction_time).max(0) as u64;
            self.score.total_score = self.score.total_score.saturating_add(reward);
            log::debug!("Correct in {:.3}s (+{})", reaction_time, reward);

            self.adjust_difficulty();
            self.push_score();
            self.start_round();

            ClickOutcome::Correct {
                reward,
                reaction_time,
            }
        } else {
            let before = self.score.total_score;
            self.score.wrong_clicks += 1;
            self.score.total_score = before.saturating_sub(self.tuning.wrong_click_penalty);
            log::debug!("Wrong tile {} (wrong clicks: {})", tile_id, self.score.wrong_clicks);

            self.push_score();

            ClickOutcome::Wrong {
                penalty_applied: before - self.score.total_score,
            }
        }
    }

    /// Stop the game and tear down the grid. Idempotent.
    pub fn stop(&mut self) {
        if self.run_state == GameRunState::Stopped {
            return;
        }
        self.run_state = GameRunState::Stopped;
        self.clear_grid();

        log::info!("Game stopped with score {}", self.score.total_score);
        self.events.push(GameEvent::GameStopped {
            final_score: self.score.total_score,
        });
    }

    /// Zero the score, forget reaction history, and start over
    pub fn reset(&mut self) {
        self.score = ScoreState::default();
        self.window.clear();
        self.fade_duration = self.tuning.default_fade_time;
        self.run_state = GameRunState::Running;

        log::info!("Game reset");
        self.events.push(GameEvent::GameReset);
        self.push_score();
        self.start_round();
    }

    /// Rolling average reaction time, neutral while the window is empty
    pub fn average_reaction_time(&self) -> f32 {
        self.window.average().unwrap_or(NEUTRAL_REACTION_TIME)
    }

    /// Current difficulty parameters
    pub fn difficulty(&self) -> Difficulty {
        Difficulty {
            fade_duration: self.fade_duration,
            rotation_angle: self.rotation_angle(),
        }
    }

    /// Take all pending UI notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn run_state(&self) -> GameRunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == GameRunState::Running
    }

    /// Whether the reset control should be offered
    pub fn can_reset(&self) -> bool {
        self.run_state == GameRunState::Stopped
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: u32) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn odd_tile(&self) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.is_odd)
    }

    pub fn current_rule(&self) -> RuleType {
        self.rule
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn reaction_window(&self) -> &ReactionWindow {
        &self.window
    }

    pub fn fade_duration(&self) -> f32 {
        self.fade_duration
    }

    /// Game clock (seconds)
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Seconds since the current round started
    pub fn round_elapsed(&self) -> f32 {
        (self.clock - self.round_start_time) as f32
    }

    fn rotation_angle(&self) -> f32 {
        self.tuning.rotation_for(self.average_reaction_time())
    }

    fn adjust_difficulty(&mut self) {
        let before = self.difficulty();
        self.fade_duration = self.tuning.fade_duration_for(self.average_reaction_time());
        let after = self.difficulty();

        if after != before {
            log::info!(
                "Difficulty: fade {}s -> {}s, rotation {} -> {} (avg {:.3}s)",
                before.fade_duration,
                after.fade_duration,
                before.rotation_angle,
                after.rotation_angle,
                self.average_reaction_time()
            );
            self.events.push(GameEvent::DifficultyChanged(after));
        }
    }

    fn push_score(&mut self) {
        self.events.push(GameEvent::ScoreChanged(self.score));
    }

    fn clear_grid(&mut self) {
        for tile in &mut self.tiles {
            tile.cancel_fade();
        }
        self.tiles.clear();
    }

    fn next_tile_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl RoundController<PcgRandom> {
    /// Controller with a seeded PCG provider
    pub fn with_seed(tuning: Tuning, seed: u64) -> Self {
        Self::new(tuning, PcgRandom::new(seed))
    }
}
