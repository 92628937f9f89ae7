//! UI shell around a game
//!
//! Owns the [`GameState`] and exposes what the host page shows: the score
//! label, the win/lose banner and the restart action.

use crate::settings::Settings;
use crate::sim::{GameState, GameStatus};

pub const WIN_BANNER: &str = "You Win!";
pub const LOSE_BANNER: &str = "Game Over!";

#[derive(Debug, Clone)]
pub struct Shell {
    pub state: GameState,
    /// Completed games (won or lost) before the current one
    pub games_finished: u32,
}

impl Shell {
    pub fn new(seed: u64, settings: Settings) -> Self {
        Self {
            state: GameState::new(seed, settings),
            games_finished: 0,
        }
    }

    /// Restart action: always succeeds
    pub fn restart(&mut self) {
        if self.state.status.is_terminal() {
            self.games_finished += 1;
        }
        self.state.reset();
    }

    pub fn score_label(&self) -> String {
        format!("Score: {}", self.state.score)
    }

    /// Banner text, only while the game is over
    pub fn banner(&self) -> Option<&'static str> {
        match self.state.status {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(WIN_BANNER),
            GameStatus::Lost => Some(LOSE_BANNER),
        }
    }
}
