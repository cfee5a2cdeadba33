//! Key mapping from terminal events to logical keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use starlance_types::Key;

/// Map keyboard input to a logical key.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),

        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Key::AltFire),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Key::Switch),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        KeyCode::Esc => Some(Key::Escape),

        _ => None,
    }
}

/// Check if a key event should quit outright.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    matches!(key.code, KeyCode::Char('q' | 'Q'))
}
