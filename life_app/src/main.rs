// main.rs - Conway's Game of Life on an infinite, pannable, zoomable grid

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use log::info;

mod app;     // Grid, camera and timer state
mod config;  // CLI flags and validated settings
mod ui;      // eframe::App impl

use app::GameOfLife;
use config::{Cli, Settings};

fn main() -> anyhow::Result<()> {
    // info+ unless RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let settings = Settings::try_from(Cli::parse()).context("invalid settings")?;
    info!(
        "starting: {} ms between generations, cell size {} px",
        settings.run_delay.as_millis(),
        settings.cell_size
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLife::new(&settings))),
    )
    .map_err(|e| anyhow::anyhow!("window failed to start: {e}"))
}
