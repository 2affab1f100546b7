//! Terminal "game renderer" module.
//!
//! Renders a [`core::GameSnapshot`] into a framebuffer of styled character
//! cells and flushes that framebuffer to a terminal backend.
//!
//! - [`GameView`] is pure and maps a snapshot to cells
//! - [`TerminalRenderer`] owns the terminal and writes only what changed

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, CONTROLS_HINT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
