//! One round of the runtime loop, minus the terminal.
//!
//! Applies an event, records it in the session log and acts on the command
//! the engine returned.

use std::io::Write;
use std::time::Instant;

use crate::core::{Command, GameState};
use crate::event_log::EventLog;
use crate::scheduler::TickScheduler;
use crate::types::GameEvent;

/// Apply `event` and carry out the resulting command.
///
/// Returns `false` once the session has ended and the loop should stop.
pub fn step<W: Write>(
    state: &mut GameState,
    event: GameEvent,
    scheduler: &mut TickScheduler,
    log: &mut EventLog<W>,
    now: Instant,
) -> bool {
    let command = state.apply(event);
    let snap = state.snapshot();
    log.event(event, &snap);
    if let Some(point) = state.take_last_point() {
        log.point(&point);
    }

    match command {
        Some(Command::ScheduleTick) => scheduler.schedule(now),
        Some(Command::Quit) => {
            scheduler.cancel();
            log.session_ended(&snap);
            return false;
        }
        None => {}
    }
    true
}
