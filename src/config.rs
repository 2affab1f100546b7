//! Runtime configuration, read once from the environment at startup.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `PONG_TICKS_PER_SECOND` | 30 | Tick cadence; zero or garbage falls back to the default |
//! | `PONG_LOG_PATH` | unset | Append a JSON-lines session log to this file |

use std::path::PathBuf;
use std::time::Duration;

use crate::types::{tick_interval, Board, TICKS_PER_SECOND};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub board: Board,
    pub ticks_per_second: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            board: Board::default(),
            ticks_per_second: TICKS_PER_SECOND,
            log_path: None,
        }
    }
}

impl RuntimeConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ticks_per_second = lookup("PONG_TICKS_PER_SECOND")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|hz| *hz > 0)
            .unwrap_or(TICKS_PER_SECOND);

        let log_path = lookup("PONG_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            board: Board::default(),
            ticks_per_second,
            log_path,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        tick_interval(self.ticks_per_second)
    }
}
