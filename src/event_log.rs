//! Session log: one JSON object per line.
//!
//! The terminal is in raw mode while playing, so diagnostics go to a file
//! instead of stderr. Records:
//!
//! ```text
//! {"tick":12,"event":"tick","ball":[52.0,22.0],"velocity":[1.0,-1.0],"paddles":[10.0,10.0],"score":[0,0]}
//! {"point":"left","score":[1,0]}
//! {"session":"ended","ticks":40,"score":[1,0]}
//! ```
//!
//! Write failures after opening disable the log; they never stop the game.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{GameSnapshot, PointScored};
use crate::types::GameEvent;

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum LogRecord<'a> {
    Event {
        tick: u64,
        event: &'a str,
        ball: [f64; 2],
        velocity: [f64; 2],
        paddles: [f64; 2],
        score: [u32; 2],
    },
    Point {
        point: &'a str,
        score: [u32; 2],
    },
    Session {
        session: &'a str,
        ticks: u64,
        score: [u32; 2],
    },
}

pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl EventLog {
    /// Open (or create) `path` for appending.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open session log {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    /// A log that discards everything.
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    /// Record an applied event together with the state it produced.
    pub fn event(&mut self, event: GameEvent, snap: &GameSnapshot) {
        self.write(&LogRecord::Event {
            tick: snap.ticks,
            event: event.as_str(),
            ball: [snap.ball_x, snap.ball_y],
            velocity: [snap.ball_vx, snap.ball_vy],
            paddles: [snap.paddle_left_y, snap.paddle_right_y],
            score: [snap.score_left, snap.score_right],
        });
    }

    pub fn point(&mut self, point: &PointScored) {
        self.write(&LogRecord::Point {
            point: point.side.as_str(),
            score: [point.score_left, point.score_right],
        });
    }

    pub fn session_ended(&mut self, snap: &GameSnapshot) {
        self.write(&LogRecord::Session {
            session: "ended",
            ticks: snap.ticks,
            score: [snap.score_left, snap.score_right],
        });
        self.flush();
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }

    /// Give back the underlying writer, if still enabled.
    pub fn into_inner(self) -> Option<W> {
        self.out
    }

    fn write(&mut self, record: &LogRecord<'_>) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::{Board, Side};

    fn lines(log: EventLog<Vec<u8>>) -> Vec<serde_json::Value> {
        let bytes = log.into_inner().unwrap();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn event_record_carries_state() {
        let mut state = GameState::new(Board::default());
        state.apply(GameEvent::Tick);

        let mut log = EventLog::from_writer(Vec::new());
        log.event(GameEvent::Tick, &state.snapshot());

        let recs = lines(log);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0]["tick"], 1);
        assert_eq!(recs[0]["event"], "tick");
        assert_eq!(recs[0]["ball"], serde_json::json!([41.0, 13.0]));
        assert_eq!(recs[0]["velocity"], serde_json::json!([1.0, 1.0]));
        assert_eq!(recs[0]["score"], serde_json::json!([0, 0]));
    }

    #[test]
    fn point_and_session_records() {
        let mut log = EventLog::from_writer(Vec::new());
        log.point(&PointScored {
            side: Side::Left,
            score_left: 1,
            score_right: 0,
        });
        log.session_ended(&GameState::default().snapshot());

        let recs = lines(log);
        assert_eq!(recs[0]["point"], "left");
        assert_eq!(recs[0]["score"], serde_json::json!([1, 0]));
        assert_eq!(recs[1]["session"], "ended");
        assert_eq!(recs[1]["ticks"], 0);
    }

    #[test]
    fn disabled_log_writes_nothing() {
        let mut log: EventLog<Vec<u8>> = EventLog::disabled();
        log.event(GameEvent::Quit, &GameState::default().snapshot());
        assert!(log.into_inner().is_none());
    }
}
