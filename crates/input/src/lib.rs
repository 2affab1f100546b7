//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameEvent`]s. Both players
//! share one keyboard: `W`/`S` drive the left paddle and the arrow keys drive
//! the right one.

pub mod map;

pub use tui_pong_types as types;

pub use map::{handle_key_event, should_quit};
