//! Blinking star.

use crate::rng::SimpleRng;
use crate::task::{Step, TaskContext, VisualTask};
use crate::types::{
    Emphasis, BOLD_HOLD_MAX, BOLD_HOLD_MIN, DIM_HOLD_MAX, DIM_HOLD_MIN, NORMAL_HOLD_MAX,
    NORMAL_HOLD_MIN,
};

/// Phases of one blink cycle, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPhase {
    Dim,
    Brightening,
    Bold,
    Fading,
}

impl BlinkPhase {
    pub fn next(self) -> Self {
        match self {
            BlinkPhase::Dim => BlinkPhase::Brightening,
            BlinkPhase::Brightening => BlinkPhase::Bold,
            BlinkPhase::Bold => BlinkPhase::Fading,
            BlinkPhase::Fading => BlinkPhase::Dim,
        }
    }

    pub fn emphasis(self) -> Emphasis {
        match self {
            BlinkPhase::Dim => Emphasis::Dim,
            BlinkPhase::Brightening | BlinkPhase::Fading => Emphasis::Normal,
            BlinkPhase::Bold => Emphasis::Bold,
        }
    }

    /// Inclusive hold range in ticks.
    pub fn hold_range(self) -> (u32, u32) {
        match self {
            BlinkPhase::Dim => (DIM_HOLD_MIN, DIM_HOLD_MAX),
            BlinkPhase::Brightening | BlinkPhase::Fading => (NORMAL_HOLD_MIN, NORMAL_HOLD_MAX),
            BlinkPhase::Bold => (BOLD_HOLD_MIN, BOLD_HOLD_MAX),
        }
    }
}

/// A star that cycles dim -> normal -> bold -> normal forever.
///
/// The glyph is written once when a phase is entered; that tick counts as the
/// first tick of the phase's hold. Holds are re-rolled every time a phase is
/// entered.
#[derive(Debug, Clone)]
pub struct BlinkTask {
    row: i32,
    column: i32,
    symbol: char,
    rng: SimpleRng,
    phase: BlinkPhase,
    ticks_left: u32,
    started: bool,
}

impl BlinkTask {
    pub fn new(row: i32, column: i32, symbol: char, rng: SimpleRng) -> Self {
        Self {
            row,
            column,
            symbol,
            rng,
            phase: BlinkPhase::Dim,
            ticks_left: 0,
            started: false,
        }
    }

    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// Ticks remaining in the current phase after the last step.
    pub fn ticks_left(&self) -> u32 {
        self.ticks_left
    }
}

impl VisualTask for BlinkTask {
    fn step(&mut self, cx: &mut TaskContext<'_>) -> Step {
        if self.ticks_left == 0 {
            if self.started {
                self.phase = self.phase.next();
            }
            self.started = true;

            let (min, max) = self.phase.hold_range();
            self.ticks_left = self.rng.next_inclusive(min, max);
            cx.grid
                .set(self.row, self.column, self.symbol, self.phase.emphasis());
        }

        self.ticks_left -= 1;
        Step::Suspended
    }

    fn kind(&self) -> &'static str {
        "blink"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::types::InputSnapshot;

    fn step(task: &mut BlinkTask, grid: &mut Grid) -> Step {
        let mut spawned = Vec::new();
        let mut bells = 0;
        let mut cx = TaskContext::new(grid, InputSnapshot::default(), &mut spawned, &mut bells);
        let out = task.step(&mut cx);
        assert!(spawned.is_empty());
        assert_eq!(bells, 0);
        out
    }

    #[test]
    fn first_step_writes_dim_glyph() {
        let mut grid = Grid::new(10, 10);
        let mut task = BlinkTask::new(5, 5, '*', SimpleRng::new(1));
        assert_eq!(step(&mut task, &mut grid), Step::Suspended);

        let cell = grid.get(5, 5).unwrap();
        assert_eq!(cell.glyph, '*');
        assert_eq!(cell.emphasis, Emphasis::Dim);
        assert_eq!(task.phase(), BlinkPhase::Dim);
    }

    #[test]
    fn holds_stay_within_phase_ranges() {
        let mut grid = Grid::new(10, 10);
        let mut task = BlinkTask::new(1, 1, '+', SimpleRng::new(99));
        let mut last_phase = None;
        for _ in 0..2000 {
            step(&mut task, &mut grid);
            if last_phase != Some(task.phase()) {
                let hold = task.ticks_left() + 1;
                let (min, max) = task.phase().hold_range();
                assert!((min..=max).contains(&hold), "{:?} hold {hold}", task.phase());
                last_phase = Some(task.phase());
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_dim() {
        let mut grid = Grid::new(10, 10);
        let mut task = BlinkTask::new(2, 3, '.', SimpleRng::new(2024));

        // Tick 1 enters the dim phase; record every hold of this cycle.
        step(&mut task, &mut grid);
        let mut holds = vec![task.ticks_left() + 1];
        let mut phase = task.phase();
        let mut ticks = 1u32;
        while holds.len() < 4 {
            step(&mut task, &mut grid);
            ticks += 1;
            if task.phase() != phase {
                phase = task.phase();
                holds.push(task.ticks_left() + 1);
            }
        }
        let cycle: u32 = holds.iter().sum();

        while ticks < cycle {
            step(&mut task, &mut grid);
            ticks += 1;
        }
        assert_eq!(task.phase(), BlinkPhase::Fading);
        assert_eq!(grid.get(2, 3).unwrap().emphasis, Emphasis::Normal);

        step(&mut task, &mut grid);
        assert_eq!(task.phase(), BlinkPhase::Dim);
        assert_eq!(grid.get(2, 3).unwrap().emphasis, Emphasis::Dim);
    }

    #[test]
    fn never_finishes() {
        let mut grid = Grid::new(4, 4);
        let mut task = BlinkTask::new(1, 1, ':', SimpleRng::new(5));
        for _ in 0..500 {
            assert_eq!(step(&mut task, &mut grid), Step::Suspended);
        }
    }
}
