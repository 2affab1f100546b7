//! Paddle movement, clamped to the board.

use crate::types::{Board, PADDLE_HEIGHT};

/// A paddle, identified by the row of its top cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    y: f64,
}

impl Paddle {
    /// Place a paddle, clamping `y` into `[0, board.max_paddle_y()]`.
    pub fn new(y: f64, board: &Board) -> Self {
        Self {
            y: y.clamp(0.0, board.max_paddle_y()),
        }
    }

    /// A paddle roughly in the middle of `board`.
    pub fn centered(board: &Board) -> Self {
        Self::new((board.max_paddle_y() / 2.0).floor(), board)
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Move one cell up. Returns false when already at the top.
    pub fn move_up(&mut self) -> bool {
        if self.y > 0.0 {
            self.y -= 1.0;
            true
        } else {
            false
        }
    }

    /// Move one cell down. Returns false when already at the bottom.
    pub fn move_down(&mut self, board: &Board) -> bool {
        if self.y < board.max_paddle_y() {
            self.y += 1.0;
            true
        } else {
            false
        }
    }

    /// Whether row `y` lies within the paddle's reach (both ends inclusive).
    pub fn covers(&self, y: f64) -> bool {
        y >= self.y && y <= self.y + f64::from(PADDLE_HEIGHT)
    }
}
