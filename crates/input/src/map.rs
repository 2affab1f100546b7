//! Key mapping from terminal events to game events.

use crate::types::GameEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game events. Unrecognized keys map to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<GameEvent> {
    if should_quit(key) {
        return Some(GameEvent::Quit);
    }

    match key.code {
        // Left player
        KeyCode::Char('w') => Some(GameEvent::MoveLeftPaddleUp),
        KeyCode::Char('s') => Some(GameEvent::MoveLeftPaddleDown),

        // Right player
        KeyCode::Up => Some(GameEvent::MoveRightPaddleUp),
        KeyCode::Down => Some(GameEvent::MoveRightPaddleDown),

        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Raw mode delivers Ctrl+C as a key event rather than a signal.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
