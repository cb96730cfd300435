//! The visual task abstraction the scheduler drives.
//!
//! A task is an explicit state machine. Every tick the scheduler calls
//! [`VisualTask::step`] exactly once; the task draws whatever belongs to this
//! tick and reports whether it wants to run again.

use crate::grid::Grid;
use crate::types::InputSnapshot;

/// Outcome of one resumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Run again next tick.
    Suspended,
    /// Remove permanently.
    Done,
}

/// Everything a task may touch during its step.
pub struct TaskContext<'a> {
    pub grid: &'a mut Grid,
    pub input: InputSnapshot,
    spawned: &'a mut Vec<Box<dyn VisualTask>>,
    bells: &'a mut u32,
}

impl<'a> TaskContext<'a> {
    pub fn new(
        grid: &'a mut Grid,
        input: InputSnapshot,
        spawned: &'a mut Vec<Box<dyn VisualTask>>,
        bells: &'a mut u32,
    ) -> Self {
        Self {
            grid,
            input,
            spawned,
            bells,
        }
    }

    /// Queue a new task. It joins the live set after the current pass and
    /// first runs on the next tick.
    pub fn spawn(&mut self, task: Box<dyn VisualTask>) {
        self.spawned.push(task);
    }

    /// Ask the terminal to ring its bell once.
    pub fn beep(&mut self) {
        *self.bells += 1;
    }
}

/// A resumable unit of animation.
pub trait VisualTask {
    /// Advance by one tick.
    fn step(&mut self, cx: &mut TaskContext<'_>) -> Step;

    /// Short label used in logs.
    fn kind(&self) -> &'static str;
}

impl std::fmt::Debug for dyn VisualTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisualTask").field("kind", &self.kind()).finish()
    }
}
