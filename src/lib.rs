//! TUI Starfield (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof
//! (`tui_starfield::{core,frames,input,term,types}`) and hosts the runtime
//! [`config`] shared by the binary and the integration tests.

pub mod config;

pub use tui_starfield_core as core;
pub use tui_starfield_frames as frames;
pub use tui_starfield_input as input;
pub use tui_starfield_term as term;
pub use tui_starfield_types as types;
