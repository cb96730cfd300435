//! Text frames: multi-line glyph patterns drawn onto the grid.

use crate::grid::Grid;
use crate::types::{Emphasis, BLANK};

/// An immutable multi-line glyph pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    name: String,
    lines: Vec<Vec<char>>,
    columns: usize,
}

impl TextFrame {
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        let lines: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            name: name.into(),
            lines,
            columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> usize {
        self.lines.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn lines(&self) -> impl Iterator<Item = &[char]> {
        self.lines.iter().map(Vec::as_slice)
    }
}

/// Bounding box of a frame as `(rows, columns)`.
pub fn size_of(frame: &TextFrame) -> (usize, usize) {
    (frame.rows(), frame.columns())
}

/// Draw `frame` with its top-left corner at `(origin_row, origin_column)`.
///
/// Blank glyphs in the frame are transparent in both modes, so erasing a
/// frame only touches the cells that drawing it wrote. Cells left of or above
/// the grid are skipped one by one; the rest of a line (or of the frame) is
/// dropped once the right (or bottom) edge is reached.
pub fn draw(grid: &mut Grid, origin_row: i32, origin_column: i32, frame: &TextFrame, erase: bool) {
    let (rows, columns) = grid.size();

    for (dy, line) in frame.lines().enumerate() {
        let row = origin_row.saturating_add(dy as i32);
        if row < 0 {
            continue;
        }
        if row >= rows as i32 {
            break;
        }

        for (dx, &glyph) in line.iter().enumerate() {
            let column = origin_column.saturating_add(dx as i32);
            if column < 0 {
                continue;
            }
            if column >= columns as i32 {
                break;
            }
            if glyph == BLANK {
                continue;
            }

            let glyph = if erase { BLANK } else { glyph };
            grid.set(row, column, glyph, Emphasis::Normal);
        }
    }
}
