// Tracing report adapter - Status lines through the tracing crate

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::ports::*;
use crate::utils::Utils;

/// Reports batch progress as one log line per event
#[derive(Debug, Default)]
pub struct TracingReportAdapter;

impl TracingReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportPort for TracingReportAdapter {
    async fn report(&self, event: ReportEvent) {
        match event {
            ReportEvent::RunStarted {
                file_count,
                started_at,
            } => {
                info!(
                    "Track renaming started at {} for {} file(s)",
                    started_at.format("%H:%M:%S"),
                    file_count
                );
            }
            ReportEvent::NoInputFiles => {
                warn!("No files imported, nothing to do");
            }
            ReportEvent::ReadPhaseStarted => {
                info!("Extracting track info from files:");
            }
            ReportEvent::FileRead { path, track_count } => {
                info!("{} analyzed: {} track(s)", path.display(), track_count);
            }
            ReportEvent::ReadFailed { path, reason } => {
                error!("There was an error while analyzing {}: {}", path.display(), reason);
            }
            ReportEvent::TrackSkipped { path, error } => {
                warn!("{}: skipping {}", path.display(), error);
            }
            ReportEvent::WritePhaseStarted { file_count } => {
                info!("Writing new track info to {} file(s):", file_count);
            }
            ReportEvent::FileWritten { path } => {
                info!("Writing metadata to {}... Success!", path.display());
            }
            ReportEvent::WriteFailed { path, diagnostic } => {
                error!(
                    "There was an error while editing {}\n{}",
                    path.display(),
                    diagnostic
                );
            }
            ReportEvent::RunFinished {
                succeeded,
                failed,
                elapsed,
            } => {
                info!(
                    "All files have been processed: {} succeeded, {} failed ({})",
                    succeeded,
                    failed,
                    Utils::format_duration(elapsed)
                );
            }
        }
    }
}
