//! Invariants that must hold for any seed and any pointer input

use proptest::prelude::*;

use breakout::sim::{GameState, GameStatus, TickInput, tick};

fn pointer_inputs() -> impl Strategy<Value = Vec<Option<f32>>> {
    prop::collection::vec(prop::option::of(-100.0f32..800.0), 1..64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn score_matches_destroyed_bricks(seed in any::<u64>(), pointers in pointer_inputs()) {
        let mut state = GameState::with_seed(seed);
        let total = state.total_bricks();

        for i in 0..3000 {
            let input = TickInput { pointer_x: pointers[i % pointers.len()] };
            tick(&mut state, &input);
            prop_assert!(state.score <= total);
            prop_assert_eq!(state.score as usize, state.bricks.destroyed_count());
        }
    }

    #[test]
    fn ball_stays_between_side_walls(seed in any::<u64>(), pointers in pointer_inputs()) {
        let mut state = GameState::with_seed(seed);
        let r = state.ball.radius;
        let w = state.settings.field_width;

        for i in 0..3000 {
            let input = TickInput { pointer_x: pointers[i % pointers.len()] };
            tick(&mut state, &input);
            prop_assert!(state.ball.pos.x >= r && state.ball.pos.x <= w - r,
                "ball x {} left [{}, {}]", state.ball.pos.x, r, w - r);
        }
    }

    #[test]
    fn terminal_status_is_sticky(seed in any::<u64>(), pointers in pointer_inputs()) {
        let mut state = GameState::with_seed(seed);
        let mut seen: Option<GameStatus> = None;

        for i in 0..5000 {
            let input = TickInput { pointer_x: pointers[i % pointers.len()] };
            tick(&mut state, &input);
            match seen {
                Some(status) => prop_assert_eq!(state.status, status),
                None if state.status.is_terminal() => seen = Some(state.status),
                None => {}
            }
        }

        state.reset();
        prop_assert_eq!(state.status, GameStatus::InProgress);
        prop_assert_eq!(state.score, 0);
        prop_assert_eq!(state.bricks.alive_count(), state.bricks.len());
    }

    #[test]
    fn paddle_follows_only_in_field_pointers(x in -1000.0f32..1000.0) {
        let mut state = GameState::with_seed(0);
        let before = state.paddle.x;
        tick(&mut state, &TickInput::pointer(x));

        if x > 0.0 && x < 650.0 {
            prop_assert_eq!(state.paddle.x, x - 36.0);
        } else {
            prop_assert_eq!(state.paddle.x, before);
        }
    }

    #[test]
    fn reset_shape_is_stable(seed in any::<u64>(), resets in 1usize..20) {
        let mut state = GameState::with_seed(seed);
        for _ in 0..resets {
            state.reset();
            prop_assert_eq!(state.bricks.columns(), 9);
            prop_assert_eq!(state.bricks.rows(), 5);
            prop_assert_eq!(state.score, 0);
            prop_assert_eq!(state.status, GameStatus::InProgress);
            prop_assert!(state.ball.pos.x >= 650.0 / 12.0 && state.ball.pos.x <= 650.0 / 3.0);
            prop_assert_eq!(state.ball.pos.y, 410.0);
            prop_assert_eq!(state.paddle.x, 289.0);
        }
    }
}
