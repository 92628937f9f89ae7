//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::{START_DIVISOR_MAX, START_DIVISOR_MIN};
use crate::settings::Settings;

/// Outcome of the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Every brick destroyed
    Won,
    /// Ball passed the paddle at the floor
    Lost,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickDestroyed { col: usize, row: usize },
    WallBounce,
    CeilingBounce,
    PaddleBounce,
    Won,
    Lost,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Position after this tick's integration
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }
}

/// The player's paddle, resting on the floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// A paddle centered horizontally in a field of `field_width`
    pub fn centered(field_width: f32, width: f32, height: f32) -> Self {
        Self {
            x: (field_width - width) / 2.0,
            width,
            height,
        }
    }

    /// True if `x` lies strictly between the paddle's edges
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }

    /// Move under a pointer at `relative_x` (pointer relative to the field origin).
    ///
    /// Pointers outside (0, field_width) are ignored. Returns whether the paddle moved.
    pub fn follow_pointer(&mut self, relative_x: f32, field_width: f32) -> bool {
        if relative_x > 0.0 && relative_x < field_width {
            self.x = relative_x - self.width / 2.0;
            true
        } else {
            false
        }
    }

    pub fn rect(&self, field_height: f32) -> Rect {
        Rect::new(self.x, field_height - self.height, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickStatus {
    #[default]
    Alive,
    Destroyed,
}

/// A brick at a fixed grid cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub col: usize,
    pub row: usize,
    pub rect: Rect,
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == BrickStatus::Alive
    }

    pub fn destroy(&mut self) {
        self.status = BrickStatus::Destroyed;
    }
}

/// Fixed-size brick grid stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: usize,
    rows: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// A full grid of live bricks laid out per `settings`
    pub fn new(settings: &Settings) -> Self {
        let (columns, rows) = (settings.brick_columns, settings.brick_rows);
        let mut bricks = Vec::with_capacity(settings.total_bricks());
        for col in 0..columns {
            for row in 0..rows {
                bricks.push(Brick {
                    col,
                    row,
                    rect: settings.brick_rect(col, row),
                    status: BrickStatus::Alive,
                });
            }
        }
        Self {
            columns,
            rows,
            bricks,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Brick> {
        if col < self.columns && row < self.rows {
            self.bricks.get(col * self.rows + row)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut Brick> {
        if col < self.columns && row < self.rows {
            self.bricks.get_mut(col * self.rows + row)
        } else {
            None
        }
    }

    /// Bricks in scan order: column by column, rows within a column
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_alive()).count()
    }

    pub fn destroyed_count(&self) -> usize {
        self.len() - self.alive_count()
    }

    /// First pair of bricks (as (col, row) cells) whose interiors intersect.
    ///
    /// The brick scan applies every hit it finds, so overlapping bricks make a
    /// single point score more than once per tick.
    pub fn overlapping_pair(&self) -> Option<((usize, usize), (usize, usize))> {
        self.bricks.iter().enumerate().find_map(|(i, a)| {
            self.bricks[i + 1..]
                .iter()
                .find(|b| a.rect.overlaps(&b.rect))
                .map(|b| ((a.col, a.row), (b.col, b.row)))
        })
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Advanced once per reset so every game draws a fresh stream
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// Divisor placing the ball at `field_width / divisor` on reset.
///
/// Product of two uniforms, so small divisors (ball further right) are favoured.
pub fn start_divisor(rng: &mut impl Rng) -> u32 {
    let u = rng.random::<f32>() * rng.random::<f32>();
    ((u * 10.0).floor() as u32 + START_DIVISOR_MIN).min(START_DIVISOR_MAX)
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    pub rng_state: RngState,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Bricks destroyed this game
    pub score: u32,
    pub status: GameStatus,
    /// Ticks applied since the last reset
    pub tick_count: u64,
}

impl GameState {
    /// Create a fresh game with the given seed and geometry
    pub fn new(seed: u64, settings: Settings) -> Self {
        let mut state = Self {
            rng_state: RngState::new(seed),
            ball: Ball::default(),
            paddle: Paddle::centered(
                settings.field_width,
                settings.paddle_width,
                settings.paddle_height,
            ),
            bricks: BrickGrid::new(&settings),
            score: 0,
            status: GameStatus::InProgress,
            tick_count: 0,
            settings,
        };
        if let Some((a, b)) = state.bricks.overlapping_pair() {
            log::warn!(
                "Bricks {:?} and {:?} overlap; one tick may destroy both",
                a,
                b
            );
        }
        state.reset();
        state
    }

    /// Create a fresh game on the default layout
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, Settings::default())
    }

    /// Start over: new ball, centered paddle, full grid, zero score
    pub fn reset(&mut self) {
        let mut rng = self.rng_state.to_rng();
        self.rng_state.stream = self.rng_state.stream.wrapping_add(1);

        let s = &self.settings;
        let divisor = start_divisor(&mut rng);
        self.ball = Ball::new(
            Vec2::new(s.field_width / divisor as f32, s.field_height - s.ball_start_offset),
            Vec2::new(s.ball_dx, s.ball_dy),
            s.ball_radius,
        );
        self.paddle = Paddle::centered(s.field_width, s.paddle_width, s.paddle_height);
        self.bricks = BrickGrid::new(s);
        self.score = 0;
        self.status = GameStatus::InProgress;
        self.tick_count = 0;

        log::info!(
            "Game reset (seed {}, game {}): ball x = {:.1}",
            self.rng_state.seed,
            self.rng_state.stream,
            self.ball.pos.x
        );
    }

    pub fn total_bricks(&self) -> u32 {
        self.bricks.len() as u32
    }

    #[inline]
    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Feed a pointer position (relative to the field origin) to the paddle.
    ///
    /// Ignored once the game is over. Returns whether the paddle moved.
    pub fn apply_pointer(&mut self, relative_x: f32) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.paddle.follow_pointer(relative_x, self.settings.field_width)
    }

    /// Enter a terminal status. Only legal from `InProgress`; returns whether it applied.
    pub(crate) fn finish(&mut self, status: GameStatus) -> bool {
        if self.status != GameStatus::InProgress || !status.is_terminal() {
            return false;
        }
        self.status = status;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_new_game_shape() {
        let state = GameState::with_seed(7);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.columns(), 9);
        assert_eq!(state.bricks.rows(), 5);
        assert_eq!(state.total_bricks(), 45);
        assert_eq!(state.bricks.alive_count(), 45);
        assert_eq!(state.paddle.x, 289.0);
        assert_eq!(state.ball.pos.y, 410.0);
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_start_divisor_bounds() {
        let mut rng = Pcg32::seed_from_u64(1234);
        for _ in 0..10_000 {
            let d = start_divisor(&mut rng);
            assert!((START_DIVISOR_MIN..=START_DIVISOR_MAX).contains(&d));
        }
    }

    #[test]
    fn test_same_seed_same_start() {
        let a = GameState::with_seed(42);
        let b = GameState::with_seed(42);
        assert_eq!(a.ball, b.ball);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = GameState::with_seed(3);
        state.score = 10;
        state.status = GameStatus::Lost;
        state.paddle.x = 5.0;
        if let Some(brick) = state.bricks.get_mut(2, 3) {
            brick.destroy();
        }

        state.reset();

        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.score, 0);
        assert_eq!(state.paddle.x, 289.0);
        assert_eq!(state.bricks.alive_count(), 45);
        assert_eq!(state.rng_state.stream, 2);
    }

    #[test]
    fn test_grid_is_column_major() {
        let state = GameState::with_seed(1);
        let order: Vec<(usize, usize)> = state.bricks.iter().take(6).map(|b| (b.col, b.row)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 0)]);
        assert_eq!(state.bricks.get(1, 0).map(|b| b.rect.x), Some(99.0));
        assert!(state.bricks.get(9, 0).is_none());
        assert!(state.bricks.get(0, 5).is_none());
    }

    #[test]
    fn test_default_grid_has_no_overlap() {
        let state = GameState::with_seed(1);
        assert_eq!(state.bricks.overlapping_pair(), None);
    }

    #[test]
    fn test_negative_padding_overlaps_neighbours() {
        let settings = Settings {
            brick_padding: -30.0,
            ..Default::default()
        };
        let grid = BrickGrid::new(&settings);
        assert_eq!(grid.overlapping_pair(), Some(((0, 0), (0, 1))));
    }

    #[test]
    fn test_pointer_inside_field_moves_paddle() {
        let mut state = GameState::with_seed(1);
        assert!(state.apply_pointer(325.0));
        assert_eq!(state.paddle.x, 289.0);
        assert!(state.apply_pointer(10.0));
        assert_eq!(state.paddle.x, -26.0);
    }

    #[test]
    fn test_pointer_outside_field_ignored() {
        let mut state = GameState::with_seed(1);
        state.apply_pointer(100.0);
        for x in [0.0, -5.0, 650.0, 800.0] {
            assert!(!state.apply_pointer(x));
            assert_eq!(state.paddle.x, 64.0);
        }
    }

    #[test]
    fn test_pointer_ignored_when_terminal() {
        let mut state = GameState::with_seed(1);
        state.status = GameStatus::Won;
        assert!(!state.apply_pointer(100.0));
        assert_eq!(state.paddle.x, 289.0);
    }

    #[test]
    fn test_finish_is_one_way() {
        let mut state = GameState::with_seed(1);
        assert!(!state.finish(GameStatus::InProgress));
        assert!(state.finish(GameStatus::Won));
        assert!(!state.finish(GameStatus::Lost));
        assert_eq!(state.status, GameStatus::Won);
    }
}
