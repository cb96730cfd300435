//! Cooperative tick scheduler.
//!
//! Owns every live visual task and resumes each one exactly once per tick, in
//! insertion order. Tasks that report [`Step::Done`] are dropped before
//! [`Scheduler::tick`] returns. Tasks spawned during a tick are appended after
//! the pass and first run on the following tick, so nothing is advanced twice
//! in one tick.
//!
//! Tasks share the grid through `&mut` handed out one at a time, so a later
//! task in the order sees (and may overwrite) what earlier tasks drew during
//! the same tick.

use crate::grid::Grid;
use crate::task::{Step, TaskContext, VisualTask};
use crate::types::InputSnapshot;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Tasks resumed (the live count at the start of the tick).
    pub resumed: usize,
    /// Tasks that finished and were removed.
    pub completed: usize,
    /// Tasks queued by other tasks; they run from the next tick on.
    pub spawned: usize,
    /// Bell requests raised by tasks.
    pub bells: u32,
}

#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Box<dyn VisualTask>>,
    pending: Vec<Box<dyn VisualTask>>,
    ticks: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task to the live set.
    pub fn spawn(&mut self, task: Box<dyn VisualTask>) {
        tracing::trace!(kind = task.kind(), "task spawned");
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Kinds of the live tasks, in resumption order.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tasks.iter().map(|t| t.kind())
    }

    /// Resume every live task once.
    pub fn tick(&mut self, grid: &mut Grid, input: InputSnapshot) -> TickReport {
        let resumed = self.tasks.len();
        let mut bells = 0u32;
        let pending = &mut self.pending;

        self.tasks.retain_mut(|task| {
            let mut cx = TaskContext::new(grid, input, pending, &mut bells);
            match task.step(&mut cx) {
                Step::Suspended => true,
                Step::Done => {
                    tracing::trace!(kind = task.kind(), "task finished");
                    false
                }
            }
        });

        let completed = resumed - self.tasks.len();
        let spawned = self.pending.len();
        self.tasks.append(&mut self.pending);
        self.ticks += 1;

        if completed > 0 || spawned > 0 {
            tracing::debug!(
                tick = self.ticks,
                completed,
                spawned,
                live = self.tasks.len(),
                "task population changed"
            );
        }

        TickReport {
            resumed,
            completed,
            spawned,
            bells,
        }
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("live", &self.tasks.len())
            .field("ticks", &self.ticks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::types::Emphasis;

    /// Records every resumption into a shared log and finishes after `lifetime` steps.
    struct Probe {
        id: u32,
        lifetime: u32,
        steps: u32,
        log: Rc<RefCell<Vec<u32>>>,
        children: Vec<Probe>,
    }

    impl Probe {
        fn new(id: u32, lifetime: u32, log: &Rc<RefCell<Vec<u32>>>) -> Self {
            Self {
                id,
                lifetime,
                steps: 0,
                log: Rc::clone(log),
                children: Vec::new(),
            }
        }
    }

    impl VisualTask for Probe {
        fn step(&mut self, cx: &mut TaskContext<'_>) -> Step {
            self.log.borrow_mut().push(self.id);
            self.steps += 1;
            for child in self.children.drain(..) {
                cx.spawn(Box::new(child));
            }
            if self.steps >= self.lifetime {
                Step::Done
            } else {
                Step::Suspended
            }
        }

        fn kind(&self) -> &'static str {
            "probe"
        }
    }

    /// Writes its glyph into the top-left cell.
    struct Painter {
        glyph: char,
    }

    impl VisualTask for Painter {
        fn step(&mut self, cx: &mut TaskContext<'_>) -> Step {
            cx.grid.set(0, 0, self.glyph, Emphasis::Normal);
            Step::Suspended
        }

        fn kind(&self) -> &'static str {
            "painter"
        }
    }

    #[test]
    fn resumes_in_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        for id in 1..=3 {
            scheduler.spawn(Box::new(Probe::new(id, u32::MAX, &log)));
        }
        let mut grid = Grid::new(4, 4);

        scheduler.tick(&mut grid, InputSnapshot::default());
        scheduler.tick(&mut grid, InputSnapshot::default());
        assert_eq!(*log.borrow(), vec![1, 2, 3, 1, 2, 3]);
        assert_eq!(scheduler.ticks(), 2);
    }

    #[test]
    fn done_tasks_are_removed_after_their_last_step() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        scheduler.spawn(Box::new(Probe::new(1, 1, &log)));
        scheduler.spawn(Box::new(Probe::new(2, 2, &log)));
        scheduler.spawn(Box::new(Probe::new(3, u32::MAX, &log)));
        let mut grid = Grid::new(4, 4);

        let report = scheduler.tick(&mut grid, InputSnapshot::default());
        assert_eq!(report.resumed, 3);
        assert_eq!(report.completed, 1);
        assert_eq!(scheduler.len(), 2);

        let report = scheduler.tick(&mut grid, InputSnapshot::default());
        assert_eq!(report.completed, 1);
        assert_eq!(scheduler.len(), 1);

        scheduler.tick(&mut grid, InputSnapshot::default());
        assert_eq!(*log.borrow(), vec![1, 2, 3, 2, 3, 3]);
    }

    #[test]
    fn spawned_tasks_wait_for_next_tick() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut parent = Probe::new(1, 1, &log);
        parent.children.push(Probe::new(10, u32::MAX, &log));
        parent.children.push(Probe::new(11, u32::MAX, &log));

        let mut scheduler = Scheduler::new();
        scheduler.spawn(Box::new(parent));
        scheduler.spawn(Box::new(Probe::new(2, u32::MAX, &log)));
        let mut grid = Grid::new(4, 4);

        let before = scheduler.len();
        let report = scheduler.tick(&mut grid, InputSnapshot::default());
        assert_eq!(*log.borrow(), vec![1, 2]);
        assert_eq!(report.spawned, 2);
        assert_eq!(
            scheduler.len(),
            before - report.completed + report.spawned
        );

        scheduler.tick(&mut grid, InputSnapshot::default());
        assert_eq!(*log.borrow(), vec![1, 2, 2, 10, 11]);
    }

    #[test]
    fn later_tasks_overwrite_earlier_writes_in_the_same_tick() {
        let mut scheduler = Scheduler::new();
        scheduler.spawn(Box::new(Painter { glyph: 'a' }));
        scheduler.spawn(Box::new(Painter { glyph: 'b' }));
        let mut grid = Grid::new(2, 2);

        scheduler.tick(&mut grid, InputSnapshot::default());
        assert_eq!(grid.get(0, 0).unwrap().glyph, 'b');
    }

    #[test]
    fn empty_scheduler_ticks() {
        let mut scheduler = Scheduler::new();
        let mut grid = Grid::new(1, 1);
        let report = scheduler.tick(&mut grid, InputSnapshot::default());
        assert_eq!(report, TickReport::default());
        assert!(scheduler.is_empty());
    }
}
