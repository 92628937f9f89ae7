//! Frame loop
//!
//! One frame = poll input, draw the current state, advance one tick. Frames
//! are separated by a fixed delay rather than a fixed timestep, and stop as
//! soon as the game reaches a terminal status.

use std::time::Duration;

use super::input::InputSource;
use crate::renderer::{self, RenderSurface};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, GameStatus, tick};

/// Result of running a single frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Still in progress; schedule another frame
    Continue(Vec<GameEvent>),
    /// Game over; no further frames until reset
    Finished(GameStatus),
}

#[derive(Debug, Clone)]
pub struct GameLoop {
    frame_interval: Duration,
    /// Stop after this many frames even if the game is still running
    max_frames: Option<u64>,
    frames: u64,
}

impl GameLoop {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            max_frames: None,
            frames: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Duration::from_millis(settings.frame_interval_ms))
    }

    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. A finished game is neither drawn nor ticked.
    pub fn frame(
        &mut self,
        state: &mut GameState,
        input: &mut impl InputSource,
        surface: &mut impl RenderSurface,
    ) -> FrameOutcome {
        if state.status.is_terminal() {
            return FrameOutcome::Finished(state.status);
        }

        let input = input.poll(state);
        renderer::draw(state, surface);
        let events = tick(state, &input);
        self.frames += 1;

        if state.status.is_terminal() {
            FrameOutcome::Finished(state.status)
        } else {
            FrameOutcome::Continue(events)
        }
    }

    /// Block, running frames until the game ends or the frame limit is hit
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run(
        &mut self,
        state: &mut GameState,
        input: &mut impl InputSource,
        surface: &mut impl RenderSurface,
    ) -> GameStatus {
        while state.is_in_progress() {
            if self.max_frames.is_some_and(|max| self.frames >= max) {
                log::warn!(
                    "Stopping after {} frames with the game still in progress (score {})",
                    self.frames,
                    state.score
                );
                break;
            }
            if let FrameOutcome::Finished(status) = self.frame(state, input, surface) {
                return status;
            }
            if !self.frame_interval.is_zero() {
                std::thread::sleep(self.frame_interval);
            }
        }
        state.status
    }
}
