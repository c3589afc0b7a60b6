// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::domain::errors::TrackError;
use crate::domain::model::*;
use crate::error::TrackNameResult;

/// Port for reading track metadata out of a container
#[async_trait]
pub trait ReaderPort: Send + Sync {
    /// Return the file's tracks in container discovery order
    async fn read_tracks(&self, file_path: &Path) -> TrackNameResult<Vec<TrackRecord>>;
}

/// Port for writing names and flags back into a container
#[async_trait]
pub trait WriterPort: Send + Sync {
    /// Apply every edit in the set; the file is expected to be rewritten atomically
    async fn write_edits(&self, edit_set: &FileEditSet) -> TrackNameResult<()>;
}

/// Port for user-facing progress reporting
#[async_trait]
pub trait ReportPort: Send + Sync {
    async fn report(&self, event: ReportEvent);
}

/// Something worth telling the user about during a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    RunStarted {
        file_count: usize,
        started_at: DateTime<Local>,
    },
    NoInputFiles,
    ReadPhaseStarted,
    FileRead { path: PathBuf, track_count: usize },
    ReadFailed { path: PathBuf, reason: String },
    TrackSkipped { path: PathBuf, error: TrackError },
    WritePhaseStarted { file_count: usize },
    FileWritten { path: PathBuf },
    WriteFailed { path: PathBuf, diagnostic: String },
    RunFinished {
        succeeded: usize,
        failed: usize,
        elapsed: Duration,
    },
}
