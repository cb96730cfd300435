//! Fixed-rate render/pace loop.

use std::io;
use std::time::{Duration, Instant};

use crate::backend::Backend;
use crate::grid::Grid;
use crate::scheduler::{Scheduler, TickReport};
use crate::types::TICK_MS;

/// Whether the loop should keep going after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue(TickReport),
    Quit,
}

/// Drives the scheduler at a fixed tick rate and shows the grid after
/// every tick.
///
/// One turn: blit the grid, wait out the tick while collecting input,
/// advance the scheduler once, forward bell requests.
#[derive(Debug)]
pub struct PaceLoop {
    grid: Grid,
    scheduler: Scheduler,
    tick: Duration,
    last_tick: Instant,
    border: bool,
}

impl PaceLoop {
    pub fn new(grid: Grid, scheduler: Scheduler) -> Self {
        Self {
            grid,
            scheduler,
            tick: Duration::from_millis(TICK_MS as u64),
            last_tick: Instant::now(),
            border: false,
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Draw a border now and again after every resize.
    pub fn with_border(mut self) -> Self {
        self.border = true;
        self.grid.draw_border();
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Run until the backend reports a quit request.
    pub fn run<B: Backend>(&mut self, backend: &mut B) -> io::Result<()> {
        tracing::info!(
            tasks = self.scheduler.len(),
            tick_ms = self.tick.as_millis() as u64,
            "pace loop started"
        );
        self.last_tick = Instant::now();
        loop {
            if self.turn(backend)? == Flow::Quit {
                tracing::info!(ticks = self.scheduler.ticks(), "quit requested");
                return Ok(());
            }
        }
    }

    /// Run at most `ticks` turns. Returns `true` if a quit request ended the run early.
    pub fn run_ticks<B: Backend>(&mut self, backend: &mut B, ticks: u64) -> io::Result<bool> {
        for _ in 0..ticks {
            if self.turn(backend)? == Flow::Quit {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// One tick of the loop.
    pub fn turn<B: Backend>(&mut self, backend: &mut B) -> io::Result<Flow> {
        backend.blit(&self.grid)?;

        let deadline = self.last_tick + self.tick;
        let poll = backend.poll_input(deadline)?;
        self.last_tick = Instant::now();

        if poll.quit {
            return Ok(Flow::Quit);
        }

        if let Some((rows, columns)) = poll.resized {
            tracing::debug!(rows, columns, "grid resized");
            self.grid.resize(rows, columns);
            if self.border {
                self.grid.draw_border();
            }
            backend.invalidate();
        }

        let report = self.scheduler.tick(&mut self.grid, poll.input);
        for _ in 0..report.bells {
            backend.beep()?;
        }
        Ok(Flow::Continue(report))
    }
}
