//! Platform abstraction layer
//!
//! Handles the host-facing side of the game:
//! - Input sources feeding pointer positions into ticks
//! - The frame loop (render, tick, wait)

pub mod game_loop;
pub mod input;

pub use game_loop::{FrameOutcome, GameLoop};
pub use input::{Autopilot, InputSource, ScriptedInput, relative_pointer_x};
