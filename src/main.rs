mod app;
mod config;
mod data;
mod error;
mod figure;
mod plotter;
mod surface;
mod ui;

use anyhow::{Context, Result};

use config::Config;
use plotter::ColumnPlotter;
use surface::{PlotSurface, WindowSurface};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::default();
    let mut surface = WindowSurface::new(config.window_size);
    let shown = run(&config, &mut surface)?;

    log::info!("Displayed {shown} plots from {}", config.input.display());
    Ok(())
}

/// Load the configured table, then show every dependent column on `surface`.
fn run(config: &Config, surface: &mut impl PlotSurface) -> Result<usize> {
    let table = data::loader::load_file(&config.input)
        .with_context(|| format!("loading {}", config.input.display()))?;

    ColumnPlotter::new(config.style.clone()).plot_each_column(&table, surface)
}
