use anyhow::Result;
use clap::Parser;
use drive_viewer::app::{run_window, Session};
use drive_viewer::config::ViewerConfig;
use tracing_subscriber::EnvFilter;

/// Steer with the left/right arrow keys; close the window or press Escape to quit.
#[derive(Parser, Debug)]
#[command(name = "drive-viewer", version)]
#[command(about = "Steer a vehicle around a ring of checkpoints while avoiding obstacles")]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();
    let config = ViewerConfig::default();
    tracing::info!(
        tick_ms = config.tick.as_millis() as u64,
        max_catch_up = config.max_catch_up,
        "starting drive"
    );

    let session = run_window(Session::new(), &config)?;

    let summary = session.summary();
    tracing::info!(
        ticks = summary.ticks,
        checkpoint_index = summary.checkpoint_index,
        checkpoints_reached = summary.checkpoints_reached,
        collisions = summary.collisions,
        trail_len = summary.trail_len,
        "session ended"
    );

    Ok(())
}
