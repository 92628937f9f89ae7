//! Breakout - a single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, brick grid, tick rules)
//! - `renderer`: Projection of game state onto a 2D drawing surface
//! - `platform`: Input sources and the frame loop
//! - `settings`: Field geometry, timing and colours
//! - `ui`: Restart action, score label and win/lose banners

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{Settings, SettingsError};
pub use ui::Shell;

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 650.0;
    pub const FIELD_HEIGHT: f32 = 450.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 9.0;
    /// Ball starts this far above the floor
    pub const BALL_START_OFFSET: f32 = 40.0;
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 72.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 9;
    pub const BRICK_WIDTH: f32 = 54.0;
    pub const BRICK_HEIGHT: f32 = 18.0;
    pub const BRICK_PADDING: f32 = 12.0;
    pub const BRICK_TOP_OFFSET: f32 = 40.0;
    pub const BRICK_LEFT_OFFSET: f32 = 33.0;

    /// Corner radius for bricks and paddle (when the surface supports it)
    pub const CORNER_RADIUS: f32 = 30.0;

    /// Delay between ticks in milliseconds
    pub const FRAME_INTERVAL_MS: u64 = 10;

    /// Bounds for the random divisor placing the ball at reset
    pub const START_DIVISOR_MIN: u32 = 3;
    pub const START_DIVISOR_MAX: u32 = 12;

    pub const FILL_COLOR: &str = "#333";
    pub const SCORE_FONT: &str = "bold 16px sans-serif";
    /// Score text baseline position
    pub const SCORE_X: f32 = 8.0;
    pub const SCORE_Y: f32 = 24.0;
}
