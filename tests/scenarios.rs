//! End-to-end game scenarios on the default 650x450 layout

use glam::Vec2;

use breakout::platform::{Autopilot, GameLoop};
use breakout::renderer::RecordingSurface;
use breakout::sim::{Ball, GameEvent, GameState, GameStatus, TickInput, tick};
use breakout::{Settings, Shell};

/// Ball parked one pixel above the floor threshold, moving down
fn about_to_reach_floor(x: f32) -> GameState {
    let mut state = GameState::with_seed(2024);
    let r = state.settings.ball_radius;
    let y = state.settings.field_height - r - 1.0;
    state.ball = Ball::new(Vec2::new(x, y), Vec2::new(2.0, 2.0), r);
    state
}

#[test]
fn pointer_centers_paddle() {
    let mut state = GameState::with_seed(1);
    state.paddle.x = 0.0;
    tick(&mut state, &TickInput::pointer(325.0));
    assert_eq!(state.paddle.x, 289.0);
}

#[test]
fn destroying_every_brick_wins() {
    let mut state = GameState::with_seed(1);
    let centers: Vec<(usize, usize, Vec2)> = state
        .bricks
        .iter()
        .map(|b| (b.col, b.row, Vec2::new(b.rect.x + b.rect.w / 2.0, b.rect.y + b.rect.h / 2.0)))
        .collect();
    assert_eq!(centers.len(), 45);

    for (i, (col, row, center)) in centers.into_iter().enumerate() {
        state.ball.pos = center;
        state.ball.vel = Vec2::ZERO;
        let events = tick(&mut state, &TickInput::default());

        assert_eq!(events[0], GameEvent::BrickDestroyed { col, row });
        assert_eq!(state.score, i as u32 + 1);
        if i < 44 {
            assert_eq!(state.status, GameStatus::InProgress);
        }
    }

    assert_eq!(state.status, GameStatus::Won);
    assert_eq!(state.score, 45);
    assert_eq!(state.bricks.alive_count(), 0);
}

#[test]
fn missing_the_ball_loses() {
    let mut state = about_to_reach_floor(100.0);
    assert!(!state.paddle.spans(100.0));

    let events = tick(&mut state, &TickInput::default());

    assert_eq!(events, vec![GameEvent::Lost]);
    assert_eq!(state.status, GameStatus::Lost);
    assert_eq!(state.ball.vel.y, 2.0);
}

#[test]
fn catching_the_ball_bounces() {
    let mut state = about_to_reach_floor(325.0);
    assert!(state.paddle.spans(325.0));

    let events = tick(&mut state, &TickInput::default());

    assert_eq!(events, vec![GameEvent::PaddleBounce]);
    assert_eq!(state.ball.vel.y, -2.0);
    assert_eq!(state.status, GameStatus::InProgress);
}

#[test]
fn restart_after_loss_starts_a_fresh_game() {
    let mut shell = Shell::new(77, Settings::default());
    shell.state = about_to_reach_floor(100.0);
    tick(&mut shell.state, &TickInput::default());
    assert_eq!(shell.banner(), Some("Game Over!"));

    shell.restart();

    assert_eq!(shell.banner(), None);
    assert!(shell.state.is_in_progress());
    assert_eq!(shell.state.bricks.alive_count(), 45);
    assert_eq!(shell.state.score, 0);
}

#[test]
fn autopilot_never_loses() {
    let mut state = GameState::with_seed(31337);
    let mut surface = RecordingSurface::new(true);
    let mut game_loop = GameLoop::new(std::time::Duration::ZERO).with_max_frames(20_000);

    let status = game_loop.run(&mut state, &mut Autopilot, &mut surface);

    assert_ne!(status, GameStatus::Lost);
    assert!(state.score > 0);
}

#[test]
fn snapshot_resumes_identically() {
    let mut state = GameState::with_seed(555);
    for _ in 0..300 {
        let x = state.ball.pos.x;
        tick(&mut state, &TickInput::pointer(x));
    }

    let json = serde_json::to_string(&state).expect("serializable");
    let mut restored: GameState = serde_json::from_str(&json).expect("deserializable");

    for _ in 0..300 {
        let (x, restored_x) = (state.ball.pos.x, restored.ball.pos.x);
        tick(&mut state, &TickInput::pointer(x));
        tick(&mut restored, &TickInput::pointer(restored_x));
    }

    assert_eq!(state.ball, restored.ball);
    assert_eq!(state.score, restored.score);
    assert_eq!(state.status, restored.status);
}
