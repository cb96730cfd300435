//! Terminal backend module.
//!
//! This is a small, game-oriented rendering layer for the starfield. The core
//! renders into a plain [`Grid`](tui_starfield_core::Grid); this crate flushes
//! that grid to a real terminal with crossterm and feeds key presses back.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only send the cells that changed since the previous frame
//! - Restore the terminal on the way out, even after an error

pub mod backend;
pub mod renderer;

pub use tui_starfield_core as core;
pub use tui_starfield_types as types;

pub use backend::CrosstermBackend;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
