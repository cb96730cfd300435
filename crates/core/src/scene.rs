//! Initial task population: stars, an opening shot and the spaceship.

use std::sync::Arc;

use crate::blink::BlinkTask;
use crate::fire::FireTask;
use crate::frame::TextFrame;
use crate::rng::SimpleRng;
use crate::scheduler::Scheduler;
use crate::spaceship::SpaceshipTask;
use crate::types::{DEFAULT_STAR_COUNT, FIRE_COLUMN_SPEED, FIRE_ROW_SPEED, STAR_SYMBOLS};

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub stars: usize,
    pub symbols: Vec<char>,
    /// Fire one shot from the middle of the screen when the scene starts.
    pub opening_shot: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            stars: DEFAULT_STAR_COUNT,
            symbols: STAR_SYMBOLS.to_vec(),
            opening_shot: true,
        }
    }
}

/// Spawn the starting tasks for a `rows x columns` grid.
///
/// Stars land strictly inside the border; every star gets its own generator
/// forked from `rng`. Spawn order is stars, opening shot, spaceship, so the
/// ship is drawn on top.
pub fn populate(
    scheduler: &mut Scheduler,
    (rows, columns): (u16, u16),
    frames: Arc<[TextFrame]>,
    config: &SceneConfig,
    rng: &mut SimpleRng,
) {
    let middle_row = (rows / 2) as f64;
    let middle_column = (columns / 2) as f64;

    if rows >= 3 && columns >= 3 && !config.symbols.is_empty() {
        for _ in 0..config.stars {
            let row = rng.next_inclusive(1, rows as u32 - 2) as i32;
            let column = rng.next_inclusive(1, columns as u32 - 2) as i32;
            let symbol = rng.choose(&config.symbols).copied().unwrap_or('*');
            scheduler.spawn(Box::new(BlinkTask::new(row, column, symbol, rng.fork())));
        }
    }

    if config.opening_shot {
        scheduler.spawn(Box::new(FireTask::new(
            middle_row,
            middle_column,
            FIRE_ROW_SPEED,
            FIRE_COLUMN_SPEED,
        )));
    }

    scheduler.spawn(Box::new(SpaceshipTask::new(middle_row, middle_column, frames)));

    tracing::debug!(rows, columns, tasks = scheduler.len(), "scene populated");
}
