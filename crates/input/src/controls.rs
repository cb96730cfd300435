//! Folds the key events of one tick into an input snapshot.
//!
//! Every key press received since the last [`ControlsReader::take`] counts.
//! On each axis the most recent press wins, and any fire press during the
//! tick requests one shot. Taking the snapshot resets the reader, so a tick
//! without input is neutral.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit, Control};
use crate::types::{InputSnapshot, CONTROL_STEP};

#[derive(Debug, Clone)]
pub struct ControlsReader {
    step: i32,
    current: InputSnapshot,
    quit: bool,
}

impl ControlsReader {
    pub fn new() -> Self {
        Self::with_step(CONTROL_STEP)
    }

    /// Cells moved per key press.
    pub fn with_step(step: i32) -> Self {
        Self {
            step,
            current: InputSnapshot::default(),
            quit: false,
        }
    }

    /// Feed one key event. Releases are ignored; auto-repeat counts as a press
    /// so holding an arrow keeps the ship moving.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if should_quit(key) {
            self.quit = true;
            return;
        }
        if let Some(control) = handle_key_event(key) {
            self.apply(control);
        }
    }

    pub fn apply(&mut self, control: Control) {
        match control {
            Control::Up => self.current.row_delta = -self.step,
            Control::Down => self.current.row_delta = self.step,
            Control::Left => self.current.column_delta = -self.step,
            Control::Right => self.current.column_delta = self.step,
            Control::Fire => self.current.fire_requested = true,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Return this tick's snapshot and start a fresh one.
    pub fn take(&mut self) -> InputSnapshot {
        std::mem::take(&mut self.current)
    }
}

impl Default for ControlsReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_move_five_cells() {
        let mut reader = ControlsReader::new();
        reader.handle_key(press(KeyCode::Up));
        reader.handle_key(press(KeyCode::Right));
        assert_eq!(reader.take(), InputSnapshot::new(-5, 5, false));
    }

    #[test]
    fn last_press_on_an_axis_wins() {
        let mut reader = ControlsReader::new();
        reader.handle_key(press(KeyCode::Left));
        reader.handle_key(press(KeyCode::Right));
        reader.handle_key(press(KeyCode::Right));
        assert_eq!(reader.take().column_delta, 5);
    }

    #[test]
    fn take_resets_to_neutral() {
        let mut reader = ControlsReader::new();
        reader.handle_key(press(KeyCode::Down));
        reader.handle_key(press(KeyCode::Char(' ')));
        assert_eq!(reader.take(), InputSnapshot::new(5, 0, true));
        assert!(reader.take().is_neutral());
    }

    #[test]
    fn releases_are_ignored() {
        let mut reader = ControlsReader::new();
        reader.handle_key(release(KeyCode::Up));
        assert!(reader.take().is_neutral());
    }

    #[test]
    fn quit_keys_are_latched() {
        let mut reader = ControlsReader::with_step(1);
        assert!(!reader.quit_requested());
        reader.handle_key(press(KeyCode::Char('q')));
        assert!(reader.quit_requested());
        reader.take();
        assert!(reader.quit_requested());
    }
}
