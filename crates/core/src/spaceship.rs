//! Player-controlled spaceship.

use std::sync::Arc;

use crate::fire::FireTask;
use crate::frame::{draw, TextFrame};
use crate::task::{Step, TaskContext, VisualTask};
use crate::types::{FIRE_COLUMN_SPEED, FIRE_ROW_SPEED};

/// Animated sprite steered by the per-tick input snapshot.
///
/// Each tick erases the frame drawn on the previous tick, moves by this
/// tick's input, clamps so the whole frame stays on the grid and draws the
/// next frame of the cycle. Shots are spawned as separate fire tasks.
#[derive(Debug, Clone)]
pub struct SpaceshipTask {
    row: f64,
    column: f64,
    frames: Arc<[TextFrame]>,
    next_frame: usize,
    drawn: Option<(i32, i32, usize)>,
}

impl SpaceshipTask {
    /// `frames` must not be empty; with no frames the ship only clamps and
    /// fires without drawing anything.
    pub fn new(start_row: f64, start_column: f64, frames: Arc<[TextFrame]>) -> Self {
        Self {
            row: start_row,
            column: start_column,
            frames,
            next_frame: 0,
            drawn: None,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    /// Index of the frame drawn on the last step.
    pub fn current_frame(&self) -> Option<usize> {
        self.drawn.map(|(_, _, i)| i)
    }

    fn clamp_to(&mut self, rows: u16, columns: u16, frame_rows: usize, frame_columns: usize) {
        let max_row = (rows as f64 - frame_rows as f64).max(0.0);
        let max_column = (columns as f64 - frame_columns as f64).max(0.0);
        self.row = self.row.clamp(0.0, max_row);
        self.column = self.column.clamp(0.0, max_column);
    }

    /// Launch a shot from the center cell of the frame's bounding box.
    fn fire(&self, cx: &mut TaskContext<'_>, frame_rows: usize, frame_columns: usize) {
        let row = self.row.round() + (frame_rows / 2) as f64;
        let column = self.column.round() + (frame_columns / 2) as f64;
        tracing::trace!(row, column, "spaceship fired");
        cx.spawn(Box::new(FireTask::new(
            row,
            column,
            FIRE_ROW_SPEED,
            FIRE_COLUMN_SPEED,
        )));
    }
}

impl VisualTask for SpaceshipTask {
    fn step(&mut self, cx: &mut TaskContext<'_>) -> Step {
        if let Some((row, column, index)) = self.drawn.take() {
            draw(cx.grid, row, column, &self.frames[index], true);
        }

        let index = self.next_frame;
        let (frame_rows, frame_columns) = self
            .frames
            .get(index)
            .map(|f| (f.rows(), f.columns()))
            .unwrap_or((0, 0));

        self.row += cx.input.row_delta as f64;
        self.column += cx.input.column_delta as f64;
        let (rows, columns) = cx.grid.size();
        self.clamp_to(rows, columns, frame_rows, frame_columns);

        if cx.input.fire_requested {
            self.fire(cx, frame_rows, frame_columns);
        }

        if let Some(frame) = self.frames.get(index) {
            let (row, column) = (self.row.round() as i32, self.column.round() as i32);
            draw(cx.grid, row, column, frame, false);
            self.drawn = Some((row, column, index));
            self.next_frame = (index + 1) % self.frames.len();
        }

        Step::Suspended
    }

    fn kind(&self) -> &'static str {
        "spaceship"
    }
}
