//! Terminal starfield runner (default binary).
//!
//! Loads the spaceship frames, takes over the terminal with crossterm and
//! hands control to the pace loop until the player quits.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tui_starfield::config::{Config, USAGE};
use tui_starfield::core::{populate, Backend, Grid, PaceLoop, SceneConfig, Scheduler, SimpleRng, TextFrame};
use tui_starfield::frames::load_frames;
use tui_starfield::term::CrosstermBackend;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env()
        .apply_args(&args)
        .with_context(|| USAGE.to_string())?;
    if config.show_help {
        println!("{USAGE}");
        return Ok(());
    }

    if let Some(path) = config.log_path.as_deref() {
        init_logging(path)?;
    }

    // Frames are loaded before touching the terminal so a bad path is
    // reported on a normal screen.
    let frames = load_frames(&config.frames_dir).context("cannot start without spaceship frames")?;

    let mut backend = CrosstermBackend::enter().context("terminal setup failed")?;

    let result = run(&mut backend, &config, frames.into());

    // Always try to restore terminal state.
    let _ = backend.exit();
    result
}

fn run(backend: &mut CrosstermBackend, config: &Config, frames: Arc<[TextFrame]>) -> Result<()> {
    let (rows, columns) = backend.grid_dimensions()?;
    let seed = config.seed_or_clock();
    tracing::info!(seed, rows, columns, stars = config.stars, "starting scene");

    let mut rng = SimpleRng::new(seed);
    let mut scheduler = Scheduler::new();
    let scene = SceneConfig {
        stars: config.stars,
        ..SceneConfig::default()
    };
    populate(&mut scheduler, (rows, columns), frames, &scene, &mut rng);

    let mut pace = PaceLoop::new(Grid::new(rows, columns), scheduler)
        .with_tick(config.tick)
        .with_border();
    pace.run(backend)?;
    Ok(())
}

/// Log to a file; stdout belongs to the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("tui_starfield=info,tui_starfield_core=info,tui_starfield_frames=info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(())
}
