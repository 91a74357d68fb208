// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use bmi_tracker::config::{Config, CONFIG_FILE};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::load(CONFIG_FILE).context("Failed to load configuration")?;
    init_logging(&config)?;

    tracing::info!(data_file = %config.data_file.display(), "starting bmi tracker");
    run_ui_mode(&config)
}

/// Logs go to a file because the terminal belongs to the UI.
fn init_logging(config: &Config) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file: {:?}", config.log_file))?;

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log level: {}", config.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &Config) -> Result<()> {
    let store = bmi_tracker::JsonFileStore::new(&config.data_file);

    let mut app = ui::App::new(store);
    ui::run_ui(&mut app)?;

    tracing::info!("ui closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &Config) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
