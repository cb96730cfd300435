//! crossterm implementation of the core [`Backend`] seam.

use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;

use tui_starfield_input::ControlsReader;

use crate::core::{Backend, Grid, InputPoll};
use crate::renderer::TerminalRenderer;

/// Real terminal: alternate screen, raw mode, diffed redraws.
pub struct CrosstermBackend {
    renderer: TerminalRenderer,
    controls: ControlsReader,
}

impl CrosstermBackend {
    /// Take over the terminal. Fails before anything is drawn if the terminal
    /// cannot be switched to raw mode.
    pub fn enter() -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            controls: ControlsReader::new(),
        })
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Backend for CrosstermBackend {
    fn grid_dimensions(&self) -> io::Result<(u16, u16)> {
        let (columns, rows) = terminal::size()?;
        Ok((rows, columns))
    }

    fn blit(&mut self, grid: &Grid) -> io::Result<()> {
        self.renderer.draw(grid)
    }

    fn poll_input(&mut self, deadline: Instant) -> io::Result<InputPoll> {
        let mut resized = None;

        // Input with timeout until next tick.
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => self.controls.handle_key(key),
                Event::Resize(columns, rows) => resized = Some((rows, columns)),
                _ => {}
            }
            if self.controls.quit_requested() {
                break;
            }
        }

        Ok(InputPoll {
            input: self.controls.take(),
            quit: self.controls.quit_requested(),
            resized,
        })
    }

    fn beep(&mut self) -> io::Result<()> {
        self.renderer.beep()
    }

    fn invalidate(&mut self) {
        self.renderer.invalidate();
    }
}
