//! Input boundary - raw key events to movement intents
//!
//! The simulation never sees key codes; this module owns the keyboard
//! binding. Unrecognized keys translate to `Neutral`, which overwrites any
//! buffered intent (the pending slot is last-writer-wins).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::MoveIntent;

/// Map a key code to a movement intent.
pub fn translate(code: KeyCode) -> MoveIntent {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => MoveIntent::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => MoveIntent::Right,
        _ => MoveIntent::Neutral,
    }
}

/// Quit keys: q, Esc, Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => {
            key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}
