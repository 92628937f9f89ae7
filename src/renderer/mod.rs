//! Rendering module
//!
//! The game draws onto anything implementing [`RenderSurface`]: a browser
//! canvas on wasm32, or a [`RecordingSurface`] for headless runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::consts::{SCORE_X, SCORE_Y};
use crate::sim::{GameState, Rect};

/// Capability set of a 2D drawing context
pub trait RenderSurface {
    fn clear_rect(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: &str);

    /// Fill a rectangle with rounded corners.
    ///
    /// Returns `false` if the surface cannot round corners; nothing is drawn then.
    fn fill_round_rect(&mut self, _rect: Rect, _radius: f32, _color: &str) -> bool {
        false
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
}

/// Rounded rectangle, or a plain one where rounding is unsupported
pub fn fill_round_or_plain(surface: &mut impl RenderSurface, rect: Rect, radius: f32, color: &str) {
    if !surface.fill_round_rect(rect, radius, color) {
        surface.fill_rect(rect, color);
    }
}

/// Text drawn on the canvas for the current score
pub fn score_text(score: u32) -> String {
    format!("Score : {score}")
}

/// Draw one frame: clear, score, live bricks, ball, paddle
pub fn draw(state: &GameState, surface: &mut impl RenderSurface) {
    let s = &state.settings;
    let color = s.fill_color.as_str();

    surface.clear_rect(Rect::new(0.0, 0.0, s.field_width, s.field_height));
    surface.fill_text(
        &score_text(state.score),
        Vec2::new(SCORE_X, SCORE_Y),
        &s.score_font,
        color,
    );

    for brick in state.bricks.iter().filter(|b| b.is_alive()) {
        fill_round_or_plain(surface, brick.rect, s.corner_radius, color);
    }

    surface.fill_circle(state.ball.pos, state.ball.radius, color);

    fill_round_or_plain(surface, state.paddle.rect(s.field_height), s.corner_radius, color);
}
