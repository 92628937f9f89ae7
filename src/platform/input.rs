//! Input sources
//!
//! Each frame the loop polls an [`InputSource`] for a [`TickInput`].

use std::collections::VecDeque;

use crate::sim::{GameState, TickInput};

/// Something that produces one tick's worth of input per frame
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> TickInput;
}

/// Pointer x relative to the field, given the pointer's client x and the
/// field's left edge in client coordinates
#[inline]
pub fn relative_pointer_x(client_x: f32, field_left: f32) -> f32 {
    client_x - field_left
}

/// No input at all; the paddle stays where it is
impl InputSource for () {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        TickInput::default()
    }
}

/// Demo player: keeps the paddle centered under the ball
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        TickInput {
            pointer_x: Some(state.ball.pos.x),
        }
    }
}

/// Replays a fixed list of inputs, then yields empty input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }

    /// Pointer positions, one per frame
    pub fn pointer_path(xs: impl IntoIterator<Item = f32>) -> Self {
        Self::new(xs.into_iter().map(TickInput::pointer))
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        self.inputs.pop_front().unwrap_or_default()
    }
}
