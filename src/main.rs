//! Odd Tile headless demo
//!
//! Runs the round controller under a fixed-timestep loop with a simulated
//! player standing in for the input layer.
//!
//! Usage: `odd-tile [tuning.json] [seed]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use odd_tile::consts::SIM_DT;
use odd_tile::{ClickOutcome, GameEvent, RoundController, Tuning};

/// Rounds the simulated player finds before stopping
const DEMO_ROUNDS: u32 = 20;
/// Give up after this many simulated seconds
const DEMO_TIME_LIMIT: f32 = 120.0;
/// Chance the player hits a wrong tile before finding the odd one
const MISCLICK_CHANCE: f64 = 0.15;

/// Scripted stand-in for a human player
struct SimPlayer {
    rng: Pcg32,
    /// Seconds into the round at which the player will click
    click_at: f32,
    misclick: bool,
}

impl SimPlayer {
    fn new(seed: u64) -> Self {
        let mut player = Self {
            rng: Pcg32::seed_from_u64(seed ^ 0x5eed),
            click_at: 0.0,
            misclick: false,
        };
        player.plan_round();
        player
    }

    fn plan_round(&mut self) {
        self.click_at = self.rng.random_range(0.3..2.0);
        self.misclick = self.rng.random_bool(MISCLICK_CHANCE);
    }

    /// Tile to click this frame, if any
    fn choose(&mut self, game: &RoundController) -> Option<u32> {
        if game.round_elapsed() < self.click_at {
            return None;
        }
        if self.misclick {
            self.misclick = false;
            return game.tiles().iter().find(|t| !t.is_odd).map(|t| t.id);
        }
        game.odd_tile().map(|t| t.id)
    }
}

fn main() {
    env_logger::init();
    log::info!("Odd Tile (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(12345);
    log::info!("Game initialized with seed: {}", seed);

    let mut game = RoundController::with_seed(tuning, seed);
    let mut player = SimPlayer::new(seed);
    game.initialize();

    let mut found = 0;
    let mut elapsed = 0.0;
    while found < DEMO_ROUNDS && elapsed < DEMO_TIME_LIMIT {
        game.on_tick(SIM_DT);
        elapsed += SIM_DT;

        if let Some(id) = player.choose(&game) {
            match game.on_tile_clicked(id) {
                ClickOutcome::Correct {
                    reward,
                    reaction_time,
                } => {
                    found += 1;
                    player.plan_round();
                    println!("round {found:>2}: found in {reaction_time:.2}s, +{reward}");
                }
                ClickOutcome::Wrong { penalty_applied } => {
                    println!("          wrong tile, -{penalty_applied}");
                }
                ClickOutcome::Ignored(reason) => {
                    log::warn!("Click ignored: {:?}", reason);
                }
            }
        }

        for event in game.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => {
                    log::debug!("Score: {} Wrong: {}", score.total_score, score.wrong_clicks);
                }
                GameEvent::DifficultyChanged(d) => {
                    println!(
                        "          difficulty: fade {}s, rotation {}deg",
                        d.fade_duration, d.rotation_angle
                    );
                }
                _ => {}
            }
        }
    }

    game.stop();
    let score = game.score();
    println!(
        "Final score: {} (wrong clicks: {}, rounds: {})",
        score.total_score,
        score.wrong_clicks,
        game.round()
    );
}
