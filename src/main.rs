use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use torus_snake::game::GameConfig;
use torus_snake::modes::HumanMode;
use torus_snake::store::{JsonFileStore, KeyValueStore, MemoryStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a board whose edges wrap around")]
struct Cli {
    /// Board width in pixels (a multiple of the cell size)
    #[arg(long, default_value = "500")]
    width: i32,

    /// Board height in pixels (a multiple of the cell size)
    #[arg(long, default_value = "500")]
    height: i32,

    /// Side of one cell in pixels
    #[arg(long, default_value = "50")]
    cell_size: i32,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value = "170")]
    tick_ms: u64,

    /// File the best score is kept in
    #[arg(long, default_value = "snake_best.json")]
    best_score_file: PathBuf,

    /// Keep the best score in memory only
    #[arg(long)]
    no_persist: bool,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig {
        board_width: cli.width,
        board_height: cli.height,
        cell_size: cli.cell_size,
        tick_interval_ms: cli.tick_ms,
        ..Default::default()
    };
    config.validate().context("Invalid board configuration")?;

    let store: Box<dyn KeyValueStore> = if cli.no_persist {
        Box::new(MemoryStore::new())
    } else {
        let store = JsonFileStore::open(&cli.best_score_file);
        info!(path = %store.path().display(), "best_score_store");
        Box::new(store)
    };

    let mut human_mode = HumanMode::new(config, store);
    human_mode.run().await?;

    Ok(())
}
