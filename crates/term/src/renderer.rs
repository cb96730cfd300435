//! TerminalRenderer: flushes a grid to a real terminal.
//!
//! The first frame (and any frame after [`TerminalRenderer::invalidate`]) is a
//! full redraw; after that only runs of changed cells are sent.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::{Cell, Grid};
use crate::types::Emphasis;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Grid>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf().context("failed to set up the terminal")?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a grid, diffing against the previously drawn one.
    ///
    /// The grid keeps accumulating task output across ticks, so it is copied
    /// into the renderer's shadow grid rather than swapped.
    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        self.buf.clear();
        if self.last.as_ref().map(Grid::size) != Some(grid.size()) {
            self.last = None;
        }

        if let Some(prev) = self.last.as_mut() {
            encode_diff_into(prev, grid, &mut self.buf)?;
            prev.clone_from(grid);
        } else {
            encode_full_into(grid, &mut self.buf)?;
            self.last = Some(grid.clone());
        }
        self.flush_buf()
    }

    /// Ring the terminal bell.
    pub fn beep(&mut self) -> io::Result<()> {
        self.stdout.write_all(b"\x07")?;
        self.stdout.flush()
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// The bottom-right cell is never printed, matching [`Grid::set`].
pub fn encode_full_into(grid: &Grid, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current: Option<Emphasis> = None;
    for row in 0..grid.rows() {
        out.queue(cursor::MoveTo(0, row))?;
        for column in 0..printable_columns(grid, row) {
            let cell = grid.get(row as i32, column as i32).unwrap_or_default();
            print_cell(out, cell, &mut current)?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &Grid, next: &Grid, out: &mut Vec<u8>) -> io::Result<()> {
    let mut current: Option<Emphasis> = None;

    for_each_changed_run(prev, next, |row, column, len| {
        out.queue(cursor::MoveTo(column, row))?;
        for dx in 0..len {
            let cell = next
                .get(row as i32, (column + dx) as i32)
                .unwrap_or_default();
            print_cell(out, cell, &mut current)?;
        }
        Ok(())
    })?;

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn print_cell(out: &mut Vec<u8>, cell: Cell, current: &mut Option<Emphasis>) -> io::Result<()> {
    if *current != Some(cell.emphasis) {
        apply_emphasis_into(out, cell.emphasis)?;
        *current = Some(cell.emphasis);
    }
    out.queue(Print(cell.glyph))?;
    Ok(())
}

fn apply_emphasis_into(out: &mut Vec<u8>, emphasis: Emphasis) -> io::Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    if let Some(attr) = emphasis_attribute(emphasis) {
        out.queue(SetAttribute(attr))?;
    }
    Ok(())
}

fn emphasis_attribute(emphasis: Emphasis) -> Option<Attribute> {
    match emphasis {
        Emphasis::Normal => None,
        Emphasis::Dim => Some(Attribute::Dim),
        Emphasis::Bold => Some(Attribute::Bold),
    }
}

/// Columns that may be printed on `row`; the last row stops short of the corner.
fn printable_columns(grid: &Grid, row: u16) -> u16 {
    if row + 1 == grid.rows() {
        grid.columns().saturating_sub(1)
    } else {
        grid.columns()
    }
}

/// Call `f(row, column, len)` for every horizontal run of changed cells.
fn for_each_changed_run(
    prev: &Grid,
    next: &Grid,
    mut f: impl FnMut(u16, u16, u16) -> io::Result<()>,
) -> io::Result<()> {
    if prev.size() != next.size() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for row in 0..next.rows() {
            let len = printable_columns(next, row);
            if len > 0 {
                f(row, 0, len)?;
            }
        }
        return Ok(());
    }

    let columns = next.columns();
    let same = |row: u16, column: u16| {
        prev.get(row as i32, column as i32) == next.get(row as i32, column as i32)
    };

    for row in 0..next.rows() {
        let mut column = 0;
        while column < columns {
            if same(row, column) {
                column += 1;
                continue;
            }

            let start = column;
            column += 1;
            while column < columns && !same(row, column) {
                column += 1;
            }
            f(row, start, column - start)?;
        }
    }

    Ok(())
}
