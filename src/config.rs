//! Runtime configuration.
//!
//! Values come from built-in defaults, then environment variables, then
//! command-line flags, each layer overriding the previous one.
//!
//! # Environment Variables
//!
//! - `STARFIELD_FRAMES_DIR`: directory of spaceship frames (default: "rocket_frame")
//! - `STARFIELD_STARS`: number of stars (default: 100)
//! - `STARFIELD_SEED`: RNG seed (default: derived from the clock)
//! - `STARFIELD_TICK_MS`: tick interval in milliseconds (default: 100)
//! - `STARFIELD_LOG_PATH`: write logs to this file (default: no logging)
//!
//! # Flags
//!
//! ```text
//! tui-starfield [--frames DIR] [--stars N] [--seed N] [--tick-ms N] [--log PATH]
//! ```

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::types::{DEFAULT_STAR_COUNT, TICK_MS};

/// Default directory of spaceship frames, relative to the working directory.
pub const DEFAULT_FRAMES_DIR: &str = "rocket_frame";

pub const USAGE: &str =
    "usage: tui-starfield [--frames DIR] [--stars N] [--seed N] [--tick-ms N] [--log PATH]";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub frames_dir: PathBuf,
    pub stars: usize,
    pub seed: Option<u32>,
    pub tick: Duration,
    pub log_path: Option<PathBuf>,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frames_dir: PathBuf::from(DEFAULT_FRAMES_DIR),
            stars: DEFAULT_STAR_COUNT,
            seed: None,
            tick: Duration::from_millis(TICK_MS as u64),
            log_path: None,
            show_help: false,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        if let Some(dir) = non_empty("STARFIELD_FRAMES_DIR") {
            config.frames_dir = PathBuf::from(dir);
        }
        if let Some(stars) = non_empty("STARFIELD_STARS").and_then(|s| s.parse().ok()) {
            config.stars = stars;
        }
        config.seed = non_empty("STARFIELD_SEED").and_then(|s| s.parse().ok());
        if let Some(ms) = non_empty("STARFIELD_TICK_MS").and_then(|s| s.parse::<u64>().ok()) {
            config.tick = Duration::from_millis(ms);
        }
        config.log_path = non_empty("STARFIELD_LOG_PATH").map(PathBuf::from);

        config
    }

    /// Apply command-line flags (without the program name).
    pub fn apply_args(mut self, args: &[String]) -> Result<Self, ConfigError> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "-h" | "--help" => self.show_help = true,
                "--frames" => self.frames_dir = PathBuf::from(value(args, i, flag)?),
                "--stars" => self.stars = parse(args, i, flag)?,
                "--seed" => self.seed = Some(parse(args, i, flag)?),
                "--tick-ms" => self.tick = Duration::from_millis(parse(args, i, flag)?),
                "--log" => self.log_path = Some(PathBuf::from(value(args, i, flag)?)),
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
            if flag != "-h" && flag != "--help" {
                i += 1;
            }
            i += 1;
        }
        Ok(self)
    }

    /// The configured seed, or one derived from the clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, ConfigError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, ConfigError> {
    let raw = value(args, i, flag)?;
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: raw.to_string(),
    })
}
