//! TrackName CLI
//!
//! Gives the audio and subtitle tracks of Matroska files consistent names
//! and default/forced/hearing-impaired flags.
//!
//! # Usage
//!
//! ```bash
//! trackname "Show S01E01.mkv" "Show S01E02.mkv"
//! trackname ./season1/
//! TRACKNAME_MAX_WRITERS=2 trackname ./season1/
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use trackname_cli::app::{AppContainer, DefaultAppContainer};
use trackname_cli::cli::Cli;
use trackname_cli::config_initialization::initialize_configuration_hierarchy;
use trackname_cli::utils::logging::init_logging;

/// Main entry point for the TrackName CLI application
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings =
        initialize_configuration_hierarchy().context("Failed to load configuration")?;
    init_logging(&settings.logging);
    settings.log_sources();
    debug!("Starting TrackName with {} input(s)", cli.paths.len());

    let container = DefaultAppContainer::new(&settings);
    let discovery = container.input_discovery().discover(&cli.paths);
    if !discovery.missing.is_empty() {
        warn!("{} input(s) were skipped because they do not exist", discovery.missing.len());
    }

    // Per-file failures are reported, they do not change the exit status
    let outcome = container
        .rename_interactor()
        .execute(&discovery.files)
        .await;
    debug!("Batch finished with {} file(s)", outcome.len());

    Ok(())
}
