// app.rs - Front end state: grid, camera and the auto-run timer

use std::time::{Duration, Instant};

use egui::Color32;
use life_core::{GridState, Viewport};
use log::{debug, info};

use crate::config::{MAX_RUN_DELAY_MS, MIN_RUN_DELAY_MS, Settings};

pub struct GameOfLife {
    pub state           : GridState,
    pub viewport        : Viewport,
    pub is_running      : bool,
    pub last_update     : Instant,
    pub update_interval : Duration,
    pub live_color      : Color32,
    pub dead_color      : Color32,
    pub line_color      : Color32,
}

impl Default for GameOfLife {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl GameOfLife {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state           : GridState::seed(),
            viewport        : Viewport::new(settings.cell_size),
            is_running      : false,
            last_update     : Instant::now(),
            update_interval : settings.run_delay,
            live_color      : Color32::BLACK,
            dead_color      : Color32::WHITE,
            line_color      : Color32::LIGHT_GRAY,
        }
    }

    pub fn run_delay_ms(&self) -> u64 {
        self.update_interval.as_millis() as u64
    }

    pub fn set_run_delay_ms(&mut self, ms: u64) {
        let ms = ms.clamp(MIN_RUN_DELAY_MS, MAX_RUN_DELAY_MS);
        self.update_interval = Duration::from_millis(ms);
        debug!("run delay set to {ms} ms");
    }

    /// Advances one generation if running and the interval has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running || now.saturating_duration_since(self.last_update) < self.update_interval {
            return false;
        }
        self.next_generation();
        self.last_update = now;
        true
    }
}

/// Operations the UI drives from its event handlers.
pub trait GameOfLifeInterface {
    fn next_generation(&mut self);
    fn toggle_at(&mut self, px: f64, py: f64);
    fn pan_by(&mut self, dx: f64, dy: f64);
    fn zoom(&mut self, px: f64, py: f64, wheel_delta: f64);
    fn jump_to_origin(&mut self);
    fn set_running(&mut self, running: bool);
}

impl GameOfLifeInterface for GameOfLife {
    fn next_generation(&mut self) {
        self.state = life_core::step(&self.state);
    }

    fn toggle_at(&mut self, px: f64, py: f64) {
        let cell = self.viewport.screen_to_cell(px, py);
        self.state.toggle(cell);
        debug!("toggled {cell:?}, population {}", self.state.population());
    }

    fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
    }

    fn zoom(&mut self, px: f64, py: f64, wheel_delta: f64) {
        if self.viewport.zoom_step(px, py, wheel_delta) {
            debug!("cell size {}", self.viewport.cell_size());
        }
    }

    fn jump_to_origin(&mut self) {
        self.viewport.reset_origin();
        info!("jumped to (0, 0)");
    }

    fn set_running(&mut self, running: bool) {
        if running == self.is_running {
            return;
        }
        self.is_running = running;
        if running {
            self.last_update = Instant::now();
            info!("auto-run started, {} ms between generations", self.run_delay_ms());
        } else {
            info!("auto-run stopped at generation {}", self.state.generation());
        }
    }
}
