//! Key mapping from terminal events to ship controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One steering or firing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

/// Map keyboard input to ship controls.
pub fn handle_key_event(key: KeyEvent) -> Option<Control> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Control::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Control::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Control::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Control::Right)
        }

        KeyCode::Char(' ') => Some(Control::Fire),

        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
