//! Terminal Pong runner (default binary).
//!
//! Owns the event loop: it renders after every step, delivers key presses as
//! they arrive and delivers a `Tick` whenever the scheduler says one is due.
//! Events reach the engine strictly one at a time.

use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pong::core::GameState;
use tui_pong::input::handle_key_event;
use tui_pong::runtime::step;
use tui_pong::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_pong::types::GameEvent;
use tui_pong::{EventLog, Interrupt, RuntimeConfig, TickScheduler};

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    let mut log = match config.log_path.as_deref() {
        Some(path) => EventLog::open(path)?,
        None => EventLog::disabled(),
    };
    let interrupt = Interrupt::register()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &interrupt, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &RuntimeConfig,
    interrupt: &Interrupt,
    log: &mut EventLog,
) -> Result<()> {
    let mut game_state = GameState::new(config.board);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut scheduler = TickScheduler::new(config.tick_interval());
    scheduler.schedule(Instant::now());

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let Some(game_event) = next_event(term, interrupt, &mut scheduler)? else {
            continue;
        };

        if !step(&mut game_state, game_event, &mut scheduler, log, Instant::now()) {
            return Ok(());
        }
    }
}

/// Wait for the next engine event: a pending signal first, then a due tick,
/// otherwise input until the tick deadline. `None` means nothing to apply
/// this round.
fn next_event(
    term: &mut TerminalRenderer,
    interrupt: &Interrupt,
    scheduler: &mut TickScheduler,
) -> Result<Option<GameEvent>> {
    if let Some(quit) = interrupt.poll() {
        return Ok(Some(quit));
    }

    if scheduler.take_due(Instant::now()) {
        return Ok(Some(GameEvent::Tick));
    }

    match event::poll(scheduler.timeout(Instant::now())) {
        Ok(true) => {}
        Ok(false) => return Ok(None),
        // A signal woke the poll; the next round picks up the flag.
        Err(err) if err.kind() == io::ErrorKind::Interrupted => return Ok(None),
        Err(err) => return Err(err.into()),
    }

    match event::read()? {
        // Terminal auto-repeat arrives as presses on most terminals; each one
        // is one step. Release events carry no meaning here.
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(handle_key_event(key)),
        Event::Resize(..) => {
            term.invalidate();
            Ok(None)
        }
        _ => Ok(None),
    }
}
