//! Core types module - shared data structures and constants
//!
//! This module defines the small vocabulary shared by every crate in the
//! workspace: cell emphasis, the per-tick input snapshot, and the timing and
//! scene constants. Everything here is plain data with no dependencies, so it
//! can be used by the scheduler, the terminal backend and the key mapper alike.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed timestep interval (~10 ticks per second) |
//! | `DIM_HOLD_MAX` | 20 | Longest dim phase of a blinking star, in ticks |
//! | `NORMAL_HOLD_MAX` | 3 | Longest normal phase, in ticks |
//! | `BOLD_HOLD_MAX` | 5 | Longest bold phase, in ticks |
//!
//! # Scene Defaults
//!
//! - `DEFAULT_STAR_COUNT`: 100 stars
//! - `STAR_SYMBOLS`: `+*.:`
//! - `CONTROL_STEP`: each arrow key moves the ship 5 cells
//! - `FIRE_ROW_SPEED`: projectiles climb 0.3 rows per tick
//!
//! # Examples
//!
//! ```
//! use tui_starfield_types::{Emphasis, InputSnapshot, CONTROL_STEP};
//!
//! let mut input = InputSnapshot::default();
//! assert!(input.is_neutral());
//!
//! input.row_delta = -CONTROL_STEP;
//! input.fire_requested = true;
//! assert!(!input.is_neutral());
//!
//! assert_eq!(Emphasis::default(), Emphasis::Normal);
//! ```

/// Fixed timestep interval in milliseconds (100ms = 10 ticks per second)
pub const TICK_MS: u32 = 100;

/// Number of stars in the default scene
pub const DEFAULT_STAR_COUNT: usize = 100;

/// Glyphs a star is drawn with (one picked per star)
pub const STAR_SYMBOLS: [char; 4] = ['+', '*', '.', ':'];

/// Blink phase hold ranges, inclusive, in ticks.
pub const DIM_HOLD_MIN: u32 = 1;
pub const DIM_HOLD_MAX: u32 = 20;
pub const NORMAL_HOLD_MIN: u32 = 1;
pub const NORMAL_HOLD_MAX: u32 = 3;
pub const BOLD_HOLD_MIN: u32 = 1;
pub const BOLD_HOLD_MAX: u32 = 5;

/// Cells moved per arrow key press.
pub const CONTROL_STEP: i32 = 5;

/// Row velocity of a projectile (negative = upwards).
pub const FIRE_ROW_SPEED: f64 = -0.3;

/// Column velocity of a projectile.
pub const FIRE_COLUMN_SPEED: f64 = 0.0;

/// Glyph shown at the muzzle on the first tick of a shot.
pub const MUZZLE_GLYPH: char = '*';

/// Trail glyph for projectiles moving sideways.
pub const HORIZONTAL_TRAIL_GLYPH: char = '-';

/// Trail glyph for projectiles moving vertically.
pub const VERTICAL_TRAIL_GLYPH: char = '|';

/// Glyph written when a cell is cleared.
pub const BLANK: char = ' ';

/// Text attribute of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    #[default]
    Normal,
    Dim,
    Bold,
}

/// Controls state captured once per tick.
///
/// A snapshot is rebuilt from scratch every tick: a tick without key presses
/// yields a neutral snapshot, not the previous tick's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub row_delta: i32,
    pub column_delta: i32,
    pub fire_requested: bool,
}

impl InputSnapshot {
    pub fn new(row_delta: i32, column_delta: i32, fire_requested: bool) -> Self {
        Self {
            row_delta,
            column_delta,
            fire_requested,
        }
    }

    /// No movement and no fire request.
    pub fn is_neutral(&self) -> bool {
        self.row_delta == 0 && self.column_delta == 0 && !self.fire_requested
    }
}
