//! Collision tests for an axis-aligned field
//!
//! The ball is treated as a point against bricks and as a circle of
//! `radius` against the field edges. All tests compare the ball's
//! *next* position (pos + vel) against the edge thresholds, while the
//! paddle span is checked against the *current* x.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle};

/// An axis-aligned rectangle (origin at top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict containment: a point on any edge is outside
    #[inline]
    pub fn contains_open(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }

    /// True if the interiors of the two rectangles intersect
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// What the ball's next vertical position runs into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    None,
    Ceiling,
    Floor,
}

/// Would the ball's next x cross the left or right wall?
#[inline]
pub fn hits_side_wall(ball: &Ball, field_width: f32) -> bool {
    let next_x = ball.pos.x + ball.vel.x;
    next_x > field_width - ball.radius || next_x < ball.radius
}

/// Classify the ball's next y against the ceiling and floor thresholds
pub fn vertical_contact(ball: &Ball, field_height: f32) -> VerticalContact {
    let next_y = ball.pos.y + ball.vel.y;
    if next_y < ball.radius {
        VerticalContact::Ceiling
    } else if next_y > field_height - ball.radius {
        VerticalContact::Floor
    } else {
        VerticalContact::None
    }
}

/// Is the paddle under the ball's current x (open interval)?
#[inline]
pub fn paddle_catches(paddle: &Paddle, ball: &Ball) -> bool {
    paddle.spans(ball.pos.x)
}
