//! Shared character grid that every visual task draws onto.

use crate::types::{Emphasis, BLANK};

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub emphasis: Emphasis,
}

impl Cell {
    pub const fn new(glyph: char, emphasis: Emphasis) -> Self {
        Self { glyph, emphasis }
    }

    pub fn is_blank(&self) -> bool {
        self.glyph == BLANK
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: BLANK,
            emphasis: Emphasis::Normal,
        }
    }
}

/// 2D surface of `rows x columns` cells.
///
/// Coordinates are signed so callers can pass positions that drifted off
/// screen; every write outside the surface is dropped. The bottom-right cell
/// is never written either: printing there makes some terminals scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u16,
    columns: u16,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: u16, columns: u16) -> Self {
        let len = (rows as usize) * (columns as usize);
        Self {
            rows,
            columns,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// `(rows, columns)`
    pub fn size(&self) -> (u16, u16) {
        (self.rows, self.columns)
    }

    /// Resize the grid, blanking every cell.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, rows: u16, columns: u16) {
        self.rows = rows;
        self.columns = columns;
        let len = (rows as usize) * (columns as usize);
        self.cells.resize(len, Cell::default());
        self.clear_all();
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, row: i32, column: i32) -> Option<usize> {
        if row < 0 || column < 0 || row >= self.rows as i32 || column >= self.columns as i32 {
            return None;
        }
        Some((row as usize) * (self.columns as usize) + (column as usize))
    }

    #[inline(always)]
    fn is_corner(&self, row: i32, column: i32) -> bool {
        row == self.rows as i32 - 1 && column == self.columns as i32 - 1
    }

    pub fn get(&self, row: i32, column: i32) -> Option<Cell> {
        self.idx(row, column).map(|i| self.cells[i])
    }

    /// Write a glyph. Out-of-bounds and bottom-right writes are no-ops.
    pub fn set(&mut self, row: i32, column: i32, glyph: char, emphasis: Emphasis) {
        if self.is_corner(row, column) {
            return;
        }
        if let Some(i) = self.idx(row, column) {
            self.cells[i] = Cell::new(glyph, emphasis);
        }
    }

    /// Blank a single cell, with the same clipping as [`Grid::set`].
    pub fn clear(&mut self, row: i32, column: i32) {
        self.set(row, column, BLANK, Emphasis::Normal);
    }

    /// Blank the whole grid.
    pub fn clear_all(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Outline the grid with a box border.
    pub fn draw_border(&mut self) {
        if self.rows < 2 || self.columns < 2 {
            return;
        }
        let bottom = self.rows as i32 - 1;
        let right = self.columns as i32 - 1;

        for column in 1..right {
            self.set(0, column, '─', Emphasis::Normal);
            self.set(bottom, column, '─', Emphasis::Normal);
        }
        for row in 1..bottom {
            self.set(row, 0, '│', Emphasis::Normal);
            self.set(row, right, '│', Emphasis::Normal);
        }
        self.set(0, 0, '┌', Emphasis::Normal);
        self.set(0, right, '┐', Emphasis::Normal);
        self.set(bottom, 0, '└', Emphasis::Normal);
        self.set(bottom, right, '┘', Emphasis::Normal);
    }

    /// Render the glyphs as text, one line per row. Handy in tests.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.rows as usize);
        for row in self.cells.chunks(self.columns.max(1) as usize) {
            out.extend(row.iter().map(|c| c.glyph));
            out.push('\n');
        }
        out
    }
}
