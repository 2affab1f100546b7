//! Termination signals delivered from outside the terminal.
//!
//! In raw mode Ctrl+C arrives as a key, but `kill` or a closing session
//! still sends SIGINT/SIGTERM/SIGQUIT. The handlers only set a flag; the loop
//! turns it into a `Quit` event so the normal exit path restores the terminal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use signal_hook::consts::TERM_SIGNALS;

use crate::types::GameEvent;

#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    /// Install flag handlers for every termination signal.
    pub fn register() -> Result<Self> {
        let flag = Arc::new(AtomicBool::new(false));
        for &sig in TERM_SIGNALS {
            signal_hook::flag::register(sig, Arc::clone(&flag))
                .with_context(|| format!("failed to register handler for signal {sig}"))?;
        }
        Ok(Self { flag })
    }

    pub fn from_flag(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// `Quit` once a termination signal has arrived.
    pub fn poll(&self) -> Option<GameEvent> {
        self.flag
            .load(Ordering::Relaxed)
            .then_some(GameEvent::Quit)
    }
}
