//! Terminal input module.
//!
//! This module is intentionally independent of the scene. It maps `crossterm`
//! key events into [`Control`]s and folds a tick's worth of them into one
//! [`crate::types::InputSnapshot`].

pub mod controls;
pub mod map;

pub use tui_starfield_types as types;

pub use controls::ControlsReader;
pub use map::{handle_key_event, should_quit, Control};
