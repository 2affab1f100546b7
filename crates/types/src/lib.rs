//! Shared types module - constants and plain data used by every crate
//!
//! Everything here is pure data with no dependencies, so the engine, the
//! input mapping and the terminal view can all agree on the same vocabulary.
//!
//! # Playing Field
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 80 | Columns of the default board |
//! | `BOARD_HEIGHT` | 24 | Rows of the default board |
//! | `PADDLE_HEIGHT` | 4 | Rows covered by a paddle |
//! | `PADDLE_WIDTH` | 1 | Columns covered by a paddle |
//! | `TICKS_PER_SECOND` | 30 | Default tick cadence |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{Board, GameEvent, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let board = Board::default();
//! assert_eq!(board.width, BOARD_WIDTH);
//! assert_eq!(board.height, BOARD_HEIGHT);
//! assert_eq!(board.max_paddle_y(), 20.0);
//!
//! assert_eq!(GameEvent::MoveLeftPaddleUp.as_str(), "moveLeftPaddleUp");
//! ```

use std::time::Duration;

/// Default board width in cells
pub const BOARD_WIDTH: u16 = 80;

/// Default board height in cells
pub const BOARD_HEIGHT: u16 = 24;

/// Paddle footprint height in cells
pub const PADDLE_HEIGHT: u16 = 4;

/// Paddle footprint width in cells
pub const PADDLE_WIDTH: u16 = 1;

/// Default tick cadence (ticks per wall-clock second)
pub const TICKS_PER_SECOND: u32 = 30;

/// Wall-clock interval between ticks at a given cadence.
///
/// A cadence of zero is treated as the default cadence.
///
/// ```
/// use std::time::Duration;
/// use tui_pong_types::tick_interval;
///
/// assert_eq!(tick_interval(1), Duration::from_secs(1));
/// assert_eq!(tick_interval(0), tick_interval(30));
/// ```
pub fn tick_interval(ticks_per_second: u32) -> Duration {
    let hz = if ticks_per_second == 0 {
        TICKS_PER_SECOND
    } else {
        ticks_per_second
    };
    Duration::from_secs(1) / hz
}

/// Playing field dimensions, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub width: u16,
    pub height: u16,
}

impl Board {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Largest legal paddle top position (`height - PADDLE_HEIGHT`).
    ///
    /// Boards shorter than a paddle pin the paddle at zero.
    pub fn max_paddle_y(&self) -> f64 {
        f64::from(self.height.saturating_sub(PADDLE_HEIGHT))
    }

    /// Ball spawn point, the middle of the board.
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

/// The two sides of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Events consumed by the game engine
///
/// Paddle moves come from key presses, `Tick` from the runtime clock and
/// `Quit` from either the keyboard or an interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// Move the left paddle one cell towards the top
    MoveLeftPaddleUp,
    /// Move the left paddle one cell towards the bottom
    MoveLeftPaddleDown,
    /// Move the right paddle one cell towards the top
    MoveRightPaddleUp,
    /// Move the right paddle one cell towards the bottom
    MoveRightPaddleDown,
    /// Advance the simulation by one fixed step
    Tick,
    /// End the session
    Quit,
}

impl GameEvent {
    /// Convert to the camelCase name used in the session log
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::MoveLeftPaddleUp => "moveLeftPaddleUp",
            GameEvent::MoveLeftPaddleDown => "moveLeftPaddleDown",
            GameEvent::MoveRightPaddleUp => "moveRightPaddleUp",
            GameEvent::MoveRightPaddleDown => "moveRightPaddleDown",
            GameEvent::Tick => "tick",
            GameEvent::Quit => "quit",
        }
    }
}
