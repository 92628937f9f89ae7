//! Single simulation step
//!
//! Order within a tick: pointer, brick hits (and win check), side walls,
//! ceiling/paddle/floor, integration. Rendering happens outside the tick.

use super::collision::{VerticalContact, hits_side_wall, paddle_catches, vertical_contact};
use super::state::{GameEvent, GameState, GameStatus};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer x relative to the field origin, if the pointer moved
    pub pointer_x: Option<f32>,
}

impl TickInput {
    pub fn pointer(x: f32) -> Self {
        Self { pointer_x: Some(x) }
    }
}

/// Advance the game by one tick. A finished game is left untouched.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.status.is_terminal() {
        return events;
    }

    if let Some(x) = input.pointer_x {
        state.apply_pointer(x);
    }

    state.tick_count += 1;

    resolve_brick_hits(state, &mut events);
    resolve_side_walls(state, &mut events);
    resolve_vertical(state, &mut events);

    state.ball.pos += state.ball.vel;

    events
}

/// Scan every brick; each one containing the ball flips dy and scores.
///
/// The scan never stops early, so overlapping bricks would each flip dy.
fn resolve_brick_hits(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let total = state.total_bricks();
    let point = state.ball.pos;
    let mut cleared = false;

    for brick in state.bricks.iter_mut() {
        if !brick.is_alive() || !brick.rect.contains_open(point) {
            continue;
        }
        state.ball.vel.y = -state.ball.vel.y;
        brick.destroy();
        state.score += 1;
        events.push(GameEvent::BrickDestroyed {
            col: brick.col,
            row: brick.row,
        });
        log::debug!(
            "Brick ({}, {}) destroyed, score {}/{}",
            brick.col,
            brick.row,
            state.score,
            total
        );
        if state.score == total {
            cleared = true;
        }
    }

    if cleared && state.finish(GameStatus::Won) {
        log::info!("All {} bricks destroyed - game won", total);
        events.push(GameEvent::Won);
    }
}

fn resolve_side_walls(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if hits_side_wall(&state.ball, state.settings.field_width) {
        state.ball.vel.x = -state.ball.vel.x;
        log::trace!("Wall bounce at x = {:.1}", state.ball.pos.x);
        events.push(GameEvent::WallBounce);
    }
}

fn resolve_vertical(state: &mut GameState, events: &mut Vec<GameEvent>) {
    match vertical_contact(&state.ball, state.settings.field_height) {
        VerticalContact::None => {}
        VerticalContact::Ceiling => {
            state.ball.vel.y = -state.ball.vel.y;
            log::trace!("Ceiling bounce at x = {:.1}", state.ball.pos.x);
            events.push(GameEvent::CeilingBounce);
        }
        VerticalContact::Floor => {
            if paddle_catches(&state.paddle, &state.ball) {
                state.ball.vel.y = -state.ball.vel.y;
                log::trace!("Paddle bounce at x = {:.1}", state.ball.pos.x);
                events.push(GameEvent::PaddleBounce);
            } else if state.finish(GameStatus::Lost) {
                log::info!(
                    "Ball missed the paddle at x = {:.1} - game lost with score {}",
                    state.ball.pos.x,
                    state.score
                );
                events.push(GameEvent::Lost);
            }
        }
    }
}
