//! Seam between the pace loop and whatever displays the grid.
//!
//! The core never talks to a terminal library directly; the terminal crate
//! implements [`Backend`] with crossterm and tests implement it in memory.

use std::io;
use std::time::Instant;

use crate::grid::Grid;
use crate::types::InputSnapshot;

/// Result of draining input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputPoll {
    pub input: InputSnapshot,
    /// The operator asked to leave.
    pub quit: bool,
    /// New `(rows, columns)` if the display was resized.
    pub resized: Option<(u16, u16)>,
}

pub trait Backend {
    /// Current display size as `(rows, columns)`.
    fn grid_dimensions(&self) -> io::Result<(u16, u16)>;

    /// Show the grid.
    fn blit(&mut self, grid: &Grid) -> io::Result<()>;

    /// Collect input until `deadline`, then return what was seen.
    ///
    /// This is also where the loop waits out the rest of the tick.
    fn poll_input(&mut self, deadline: Instant) -> io::Result<InputPoll>;

    /// Ring the bell.
    fn beep(&mut self) -> io::Result<()>;

    /// Forget any cached screen state so the next blit redraws everything.
    fn invalidate(&mut self) {}
}
