//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable brick scan order (column-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, VerticalContact, hits_side_wall, paddle_catches, vertical_contact};
pub use state::{
    Ball, Brick, BrickGrid, BrickStatus, GameEvent, GameState, GameStatus, Paddle, RngState,
    start_divisor,
};
pub use tick::{TickInput, tick};
