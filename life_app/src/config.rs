// config.rs - Command line options and validated settings

use std::time::Duration;

use clap::Parser;
use life_core::viewport::{DEFAULT_CELL_SIZE, MAX_CELL_SIZE, MIN_CELL_SIZE};
use thiserror::Error;

pub const MIN_RUN_DELAY_MS: u64 = 1;
pub const MAX_RUN_DELAY_MS: u64 = 1000;
pub const DEFAULT_RUN_DELAY_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("run delay {0} ms is outside 1..=1000")]
    RunDelayOutOfRange(u64),

    #[error("cell size {0} px is outside 2..=50")]
    CellSizeOutOfRange(i32),

    #[error("window size {width}x{height} must be positive")]
    WindowSize { width: f32, height: f32 },
}

#[derive(Parser, Debug)]
#[command(name = "life")]
#[command(about = "Conway's Game of Life on an infinite grid")]
pub struct Cli {
    /// Time between generations while running, in milliseconds
    #[arg(long, default_value_t = DEFAULT_RUN_DELAY_MS)]
    pub run_delay_ms: u64,

    /// Initial cell size in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE, allow_negative_numbers = true)]
    pub cell_size: i32,

    /// Initial window width
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 600.0)]
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub run_delay: Duration,
    pub cell_size: i32,
    pub window_size: [f32; 2],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            run_delay: Duration::from_millis(DEFAULT_RUN_DELAY_MS),
            cell_size: DEFAULT_CELL_SIZE,
            window_size: [800.0, 600.0],
        }
    }
}

impl Settings {
    pub fn new(run_delay_ms: u64, cell_size: i32, width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(MIN_RUN_DELAY_MS..=MAX_RUN_DELAY_MS).contains(&run_delay_ms) {
            return Err(ConfigError::RunDelayOutOfRange(run_delay_ms));
        }
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&cell_size) {
            return Err(ConfigError::CellSizeOutOfRange(cell_size));
        }
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::WindowSize { width, height });
        }
        Ok(Self {
            run_delay: Duration::from_millis(run_delay_ms),
            cell_size,
            window_size: [width, height],
        })
    }
}

impl TryFrom<Cli> for Settings {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        Settings::new(cli.run_delay_ms, cli.cell_size, cli.width, cli.height)
    }
}
