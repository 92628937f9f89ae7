//! Game settings
//!
//! Field geometry, brick layout and frame pacing. Defaults reproduce the
//! classic 650x450 layout; any subset of keys can be overridden from JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rect;

/// Errors raised while loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings document is not valid JSON for [`Settings`]
    Parse(serde_json::Error),
    /// Settings file could not be read
    Io(std::io::Error),
    /// Geometry is degenerate or does not fit the field
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {e}"),
            SettingsError::Io(e) => write!(f, "failed to read settings: {e}"),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Io(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

/// Field, ball, paddle and brick configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Distance between the floor and the ball's starting y
    pub ball_start_offset: f32,
    pub ball_dx: f32,
    pub ball_dy: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_columns: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_top_offset: f32,
    pub brick_left_offset: f32,

    // === Presentation ===
    pub corner_radius: f32,
    pub fill_color: String,
    pub score_font: String,
    /// Delay between ticks
    pub frame_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_start_offset: BALL_START_OFFSET,
            ball_dx: BALL_START_DX,
            ball_dy: BALL_START_DY,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_top_offset: BRICK_TOP_OFFSET,
            brick_left_offset: BRICK_LEFT_OFFSET,

            corner_radius: CORNER_RADIUS,
            fill_color: FILL_COLOR.to_string(),
            score_font: SCORE_FONT.to_string(),
            frame_interval_ms: FRAME_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of bricks in the grid
    pub fn total_bricks(&self) -> usize {
        self.brick_rows * self.brick_columns
    }

    /// Rectangle of the brick at (col, row)
    pub fn brick_rect(&self, col: usize, row: usize) -> Rect {
        Rect::new(
            col as f32 * (self.brick_width + self.brick_padding) + self.brick_left_offset,
            row as f32 * (self.brick_height + self.brick_padding) + self.brick_top_offset,
            self.brick_width,
            self.brick_height,
        )
    }

    /// Reject geometry the simulation cannot run on.
    ///
    /// Negative padding is refused: the brick scan assumes a point lies in at
    /// most one brick.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| Err(SettingsError::Invalid(msg));

        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return invalid(format!(
                "field must have positive size, got {}x{}",
                self.field_width, self.field_height
            ));
        }
        if self.ball_radius <= 0.0 || 2.0 * self.ball_radius >= self.field_width.min(self.field_height) {
            return invalid(format!("ball radius {} does not fit the field", self.ball_radius));
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return invalid("paddle must have positive size".to_string());
        }
        if self.paddle_width >= self.field_width {
            return invalid(format!(
                "paddle width {} must be narrower than the field ({})",
                self.paddle_width, self.field_width
            ));
        }
        if self.total_bricks() == 0 {
            return invalid(format!(
                "brick grid must be non-empty, got {}x{}",
                self.brick_columns, self.brick_rows
            ));
        }
        if self.brick_width <= 0.0 || self.brick_height <= 0.0 {
            return invalid("bricks must have positive size".to_string());
        }
        if self.brick_padding < 0.0 {
            return invalid(format!(
                "brick padding {} would make bricks overlap",
                self.brick_padding
            ));
        }
        let last = self.brick_rect(self.brick_columns - 1, self.brick_rows - 1);
        if self.brick_left_offset < 0.0
            || self.brick_top_offset < 0.0
            || last.right() > self.field_width
            || last.bottom() > self.field_height
        {
            return invalid("brick grid does not fit inside the field".to_string());
        }
        Ok(())
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "breakout_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}
