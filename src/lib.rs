//! Terminal Pong (workspace facade crate).
//!
//! The engine, input mapping and renderer live in dedicated crates under
//! `crates/` and are re-exported here as `tui_pong::{core,input,term,types}`.
//! The runtime pieces that glue them to a real terminal (configuration, tick
//! scheduling, signal handling, the per-event step and the session log) live
//! in this crate.

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;

pub mod config;
pub mod event_log;
pub mod interrupt;
pub mod runtime;
pub mod scheduler;

pub use config::RuntimeConfig;
pub use event_log::EventLog;
pub use interrupt::Interrupt;
pub use scheduler::TickScheduler;
