//! Headless surface that records draw calls

use glam::Vec2;

use super::RenderSurface;
use crate::sim::Rect;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { rect: Rect },
    Rect { rect: Rect, color: String },
    RoundRect { rect: Rect, radius: f32, color: String },
    Circle { center: Vec2, radius: f32, color: String },
    Text { text: String, pos: Vec2, font: String, color: String },
}

/// Records every draw call of the current frame.
///
/// `clear_rect` covering the surface starts a new frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    rounded: bool,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingSurface {
    /// `rounded` controls whether `fill_round_rect` is supported
    pub fn new(rounded: bool) -> Self {
        Self {
            rounded,
            commands: Vec::new(),
            frames: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames started (clears seen)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|&c| pred(c)).count()
    }

    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear { rect });
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color: color.to_string(),
        });
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: &str) -> bool {
        if !self.rounded {
            return false;
        }
        self.commands.push(DrawCommand::RoundRect {
            rect,
            radius,
            color: color.to_string(),
        });
        true
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut surface = RecordingSurface::new(true);
        surface.clear_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        surface.fill_circle(Vec2::ZERO, 1.0, "#333");
        surface.clear_rect(Rect::new(0.0, 0.0, 10.0, 10.0));

        assert_eq!(surface.frames(), 2);
        assert_eq!(surface.commands().len(), 1);
    }

    #[test]
    fn test_unsupported_round_rect_draws_nothing() {
        let mut surface = RecordingSurface::new(false);
        assert!(!surface.fill_round_rect(Rect::new(0.0, 0.0, 5.0, 5.0), 2.0, "#333"));
        assert!(surface.commands().is_empty());
    }
}
