//! Core animation module - pure, deterministic, and testable
//!
//! This crate contains the scene model and the cooperative scheduler that
//! animates it. It has **no dependency** on any terminal library: the only
//! I/O seam is the [`Backend`] trait, implemented elsewhere.
//!
//! - **Deterministic**: the same seed produces the same starfield and blinks
//! - **Single-threaded**: tasks take turns on one `&mut Grid`
//! - **Testable**: every task can be stepped by hand against a plain grid
//!
//! # Module Structure
//!
//! - [`grid`]: shared character surface with silent clipping
//! - [`frame`]: multi-line text frames, their size, draw and erase
//! - [`task`]: the [`VisualTask`] trait, [`Step`] and [`TaskContext`]
//! - [`blink`], [`fire`], [`spaceship`]: the three task kinds
//! - [`scheduler`]: resumes every live task once per tick and reaps finished ones
//! - [`pace`]: fixed-rate loop tying scheduler and backend together
//! - [`scene`]: initial population
//! - [`rng`]: seedable LCG
//!
//! # Example
//!
//! ```
//! use tui_starfield_core::{BlinkTask, Grid, Scheduler, SimpleRng};
//! use tui_starfield_core::types::{Emphasis, InputSnapshot};
//!
//! let mut grid = Grid::new(10, 10);
//! let mut scheduler = Scheduler::new();
//! scheduler.spawn(Box::new(BlinkTask::new(5, 5, '*', SimpleRng::new(1))));
//!
//! scheduler.tick(&mut grid, InputSnapshot::default());
//!
//! let cell = grid.get(5, 5).unwrap();
//! assert_eq!(cell.glyph, '*');
//! assert_eq!(cell.emphasis, Emphasis::Dim);
//! ```

pub mod backend;
pub mod blink;
pub mod fire;
pub mod frame;
pub mod grid;
pub mod pace;
pub mod rng;
pub mod scene;
pub mod scheduler;
pub mod spaceship;
pub mod task;

pub use tui_starfield_types as types;

pub use backend::{Backend, InputPoll};
pub use blink::{BlinkPhase, BlinkTask};
pub use fire::FireTask;
pub use frame::{draw, size_of, TextFrame};
pub use grid::{Cell, Grid};
pub use pace::{Flow, PaceLoop};
pub use rng::SimpleRng;
pub use scene::{populate, SceneConfig};
pub use scheduler::{Scheduler, TickReport};
pub use spaceship::SpaceshipTask;
pub use task::{Step, TaskContext, VisualTask};
