//! Property tests for round generation, scoring and adaptive difficulty

use proptest::prelude::*;

use odd_tile::consts::{GRID_TILES, MIN_FADE_TIME, MIN_REWARD};
use odd_tile::{ClickOutcome, RoundController, RuleType, TileFadeTimer, Tuning};

/// A player action: click the odd tile after `delay`, or a wrong tile
#[derive(Debug, Clone)]
enum Action {
    Correct(f32),
    Wrong(usize),
    Tick(f32),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0.0f32..4.0).prop_map(Action::Correct),
        (0usize..8).prop_map(Action::Wrong),
        (0.0f32..1.0).prop_map(Action::Tick),
    ]
}

fn play(game: &mut RoundController, action: &Action) -> Option<ClickOutcome> {
    match *action {
        Action::Correct(delay) => {
            game.on_tick(delay);
            let id = game.odd_tile()?.id;
            Some(game.on_tile_clicked(id))
        }
        Action::Wrong(n) => {
            let id = game.tiles().iter().filter(|t| !t.is_odd).nth(n)?.id;
            Some(game.on_tile_clicked(id))
        }
        Action::Tick(dt) => {
            game.on_tick(dt);
            None
        }
    }
}

proptest! {
    #[test]
    fn every_round_has_exactly_one_odd_tile(seed in any::<u64>(), actions in prop::collection::vec(action(), 1..60)) {
        let mut game = RoundController::with_seed(Tuning::default(), seed);
        game.initialize();
        for a in &actions {
            play(&mut game, a);
            prop_assert_eq!(game.tiles().len(), GRID_TILES);
            prop_assert_eq!(game.tiles().iter().filter(|t| t.is_odd).count(), 1);
        }
    }

    #[test]
    fn rewards_and_window_stay_in_bounds(seed in any::<u64>(), actions in prop::collection::vec(action(), 1..60)) {
        let tuning = Tuning::default();
        let mut game = RoundController::with_seed(tuning.clone(), seed);
        game.initialize();
        let mut prev_total = 0u64;
        for a in &actions {
            match play(&mut game, a) {
                Some(ClickOutcome::Correct { reward, .. }) => {
                    prop_assert!(reward as i64 >= MIN_REWARD);
                    prop_assert_eq!(game.score().total_score, prev_total + reward);
                }
                Some(ClickOutcome::Wrong { penalty_applied }) => {
                    prop_assert!(penalty_applied <= tuning.wrong_click_penalty);
                    prop_assert_eq!(game.score().total_score, prev_total - penalty_applied);
                }
                _ => {}
            }
            prev_total = game.score().total_score;
            prop_assert!(game.reaction_window().len() <= tuning.reaction_window_size);
        }
    }

    #[test]
    fn difficulty_takes_discrete_values(seed in any::<u64>(), delays in prop::collection::vec(0.0f32..4.0, 1..30)) {
        let tuning = Tuning::default();
        let fades = [
            (tuning.default_fade_time - 1.0).max(MIN_FADE_TIME),
            tuning.default_fade_time,
            tuning.default_fade_time + 1.0,
        ];
        let mut game = RoundController::with_seed(tuning.clone(), seed);
        game.initialize();
        for d in &delays {
            play(&mut game, &Action::Correct(*d));
            let difficulty = game.difficulty();
            prop_assert!(fades.contains(&difficulty.fade_duration));
            let expected_angle = if game.average_reaction_time() < tuning.fast_reaction {
                tuning.hard_rotation
            } else {
                tuning.easy_rotation
            };
            prop_assert_eq!(difficulty.rotation_angle, expected_angle);

            if game.current_rule() == RuleType::Rotation {
                let odd = game.odd_tile().unwrap();
                prop_assert_eq!(odd.visual.rotation_degrees, expected_angle);
            }
        }
    }

    #[test]
    fn fade_alpha_is_monotone_and_clamped(duration in 0.01f32..10.0, steps in prop::collection::vec(0.0f32..0.5, 1..100)) {
        let mut timer = TileFadeTimer::new();
        timer.start(duration);
        let mut last = 1.0f32;
        for dt in steps {
            if let Some(alpha) = timer.tick(dt) {
                prop_assert!((0.0..=1.0).contains(&alpha));
                prop_assert!(alpha <= last);
                last = alpha;
            }
        }
    }
}

#[test]
fn test_same_seed_same_rounds() {
    let mut a = RoundController::with_seed(Tuning::default(), 99999);
    let mut b = RoundController::with_seed(Tuning::default(), 99999);
    a.initialize();
    b.initialize();
    for _ in 0..10 {
        assert_eq!(a.current_rule(), b.current_rule());
        let va: Vec<_> = a.tiles().iter().map(|t| (t.is_odd, t.visual)).collect();
        let vb: Vec<_> = b.tiles().iter().map(|t| (t.is_odd, t.visual)).collect();
        assert_eq!(va, vb);
        a.on_tick(0.7);
        b.on_tick(0.7);
        a.on_tile_clicked(a.odd_tile().unwrap().id);
        b.on_tile_clicked(b.odd_tile().unwrap().id);
    }
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_stop_then_reset_cycle() {
    let mut game = RoundController::with_seed(Tuning::default(), 7);
    game.initialize();
    game.on_tick(1.0);
    game.on_tile_clicked(game.odd_tile().unwrap().id);
    game.stop();
    game.stop();
    assert!(game.tiles().is_empty());
    assert_eq!(game.score().total_score, 70);

    game.reset();
    assert!(game.is_running());
    assert_eq!(game.score().total_score, 0);
    assert_eq!(game.tiles().len(), GRID_TILES);
}
