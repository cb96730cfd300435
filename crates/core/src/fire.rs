//! Projectile flight.

use crate::task::{Step, TaskContext, VisualTask};
use crate::types::{Emphasis, HORIZONTAL_TRAIL_GLYPH, MUZZLE_GLYPH, VERTICAL_TRAIL_GLYPH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FireState {
    /// Nothing drawn yet.
    Loaded,
    /// Muzzle flash is on screen.
    Muzzle,
    /// Trail glyph is on screen at the drawn cell.
    Flying,
    Spent,
}

/// A shot travelling in a straight line until it leaves the grid interior.
///
/// Position is real-valued so speeds below one cell per tick work; each tick
/// the trail is drawn at the nearest cell.
#[derive(Debug, Clone)]
pub struct FireTask {
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    state: FireState,
    drawn: (i32, i32),
}

impl FireTask {
    pub fn new(start_row: f64, start_column: f64, row_speed: f64, column_speed: f64) -> Self {
        Self {
            row: start_row,
            column: start_column,
            row_speed,
            column_speed,
            state: FireState::Loaded,
            drawn: (0, 0),
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    pub fn trail_glyph(&self) -> char {
        if self.column_speed != 0.0 {
            HORIZONTAL_TRAIL_GLYPH
        } else {
            VERTICAL_TRAIL_GLYPH
        }
    }

    fn cell(&self) -> (i32, i32) {
        (self.row.round() as i32, self.column.round() as i32)
    }

    fn advance(&mut self) {
        self.row += self.row_speed;
        self.column += self.column_speed;
    }

    /// Strictly inside the border on every side.
    fn in_interior(&self, rows: u16, columns: u16) -> bool {
        let max_row = rows as f64 - 1.0;
        let max_column = columns as f64 - 1.0;
        0.0 < self.row && self.row < max_row && 0.0 < self.column && self.column < max_column
    }

    /// Draw the trail if still inside, otherwise finish.
    fn fly(&mut self, cx: &mut TaskContext<'_>) -> Step {
        let (rows, columns) = cx.grid.size();
        if !self.in_interior(rows, columns) {
            self.state = FireState::Spent;
            return Step::Done;
        }

        let (row, column) = self.cell();
        cx.grid.set(row, column, self.trail_glyph(), Emphasis::Normal);
        self.drawn = (row, column);
        self.state = FireState::Flying;
        Step::Suspended
    }
}

impl VisualTask for FireTask {
    fn step(&mut self, cx: &mut TaskContext<'_>) -> Step {
        match self.state {
            FireState::Loaded => {
                cx.beep();
                let (row, column) = self.cell();
                cx.grid.set(row, column, MUZZLE_GLYPH, Emphasis::Normal);
                self.drawn = (row, column);
                self.state = FireState::Muzzle;
                Step::Suspended
            }
            FireState::Muzzle | FireState::Flying => {
                cx.grid.clear(self.drawn.0, self.drawn.1);
                self.advance();
                self.fly(cx)
            }
            FireState::Spent => Step::Done,
        }
    }

    fn kind(&self) -> &'static str {
        "fire"
    }
}
