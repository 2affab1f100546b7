//! Core game logic module - pure, deterministic, and testable
//!
//! This crate owns the authoritative Pong state and the single transition
//! rule that advances it. It has **zero dependencies** on terminals, clocks or
//! I/O, making it:
//!
//! - **Deterministic**: No randomness anywhere; the same event stream always
//!   replays to the same state
//! - **Testable**: Every rule can be exercised without a terminal
//! - **Portable**: The runtime decides cadence and presentation
//!
//! # Module Structure
//!
//! - [`ball`]: Ball position and unit-speed heading
//! - [`paddle`]: Clamped vertical paddle movement
//! - [`game_state`]: The state machine, tick physics and scoring
//! - [`snapshot`]: Plain-data copy of the state for renderers
//!
//! # Example
//!
//! ```
//! use tui_pong_core::{Command, GameState};
//! use tui_pong_types::{Board, GameEvent};
//!
//! let mut game = GameState::new(Board::default());
//!
//! assert_eq!(game.apply(GameEvent::MoveLeftPaddleUp), None);
//! assert_eq!(game.apply(GameEvent::Tick), Some(Command::ScheduleTick));
//! assert_eq!(game.ball().x, 41.0);
//!
//! assert_eq!(game.apply(GameEvent::Quit), Some(Command::Quit));
//! assert!(game.ended());
//! ```

pub mod ball;
pub mod game_state;
pub mod paddle;
pub mod snapshot;

pub use tui_pong_types as types;

pub use ball::{Ball, Heading};
pub use game_state::{Command, GameState, PointScored};
pub use paddle::Paddle;
pub use snapshot::GameSnapshot;
