// Rename interactor - Orchestrates the read, classify and write phases of a batch

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::domain::errors::TrackError;
use crate::domain::model::*;
use crate::domain::usecases::EditSetBuilder;
use crate::error::{TrackNameError, TrackNameResult};
use crate::ports::*;

/// Per-file state after the read phase
enum ReadSlot {
    Finished(BatchEntry),
    Classified {
        edit_set: FileEditSet,
        track_errors: Vec<TrackError>,
    },
}

/// Per-file state once every write has been launched
enum WriteSlot {
    Finished(BatchEntry),
    Writing {
        path: PathBuf,
        track_errors: Vec<TrackError>,
        handle: JoinHandle<TrackNameResult<()>>,
    },
}

/// Interactor for the batch rename use case
pub struct RenameInteractor {
    reader_port: Arc<dyn ReaderPort>,
    writer_port: Arc<dyn WriterPort>,
    report_port: Arc<dyn ReportPort>,
    max_concurrent_writes: usize,
}

impl RenameInteractor {
    /// Create new rename interactor with injected ports
    pub fn new(
        reader_port: Arc<dyn ReaderPort>,
        writer_port: Arc<dyn WriterPort>,
        report_port: Arc<dyn ReportPort>,
        max_concurrent_writes: usize,
    ) -> Self {
        Self {
            reader_port,
            writer_port,
            report_port,
            max_concurrent_writes: max_concurrent_writes.max(1),
        }
    }

    /// Rename tracks in every file and report one outcome per file, in input order.
    ///
    /// Failures never abort the batch: a failed read drops that file, a track
    /// that cannot be classified drops that track, a failed write is recorded.
    pub async fn execute(&self, file_paths: &[PathBuf]) -> BatchOutcome {
        let started = Instant::now();
        let paths = unique_in_order(file_paths);

        if paths.is_empty() {
            self.report_port.report(ReportEvent::NoInputFiles).await;
            return BatchOutcome::default();
        }

        self.report_port
            .report(ReportEvent::RunStarted {
                file_count: paths.len(),
                started_at: chrono::Local::now(),
            })
            .await;

        let slots = self.read_phase(paths).await;
        let slots = self.launch_writes(slots).await;
        let outcome = self.join_writes(slots).await;

        self.report_port
            .report(ReportEvent::RunFinished {
                succeeded: outcome.succeeded(),
                failed: outcome.failed(),
                elapsed: started.elapsed(),
            })
            .await;

        outcome
    }

    /// Read and classify files one at a time
    async fn read_phase(&self, paths: Vec<PathBuf>) -> Vec<ReadSlot> {
        self.report_port.report(ReportEvent::ReadPhaseStarted).await;
        let mut slots = Vec::with_capacity(paths.len());

        for path in paths {
            let records = match self.reader_port.read_tracks(&path).await {
                Ok(records) => records,
                Err(e) => {
                    let reason = failure_reason(e);
                    self.report_port
                        .report(ReportEvent::ReadFailed {
                            path: path.clone(),
                            reason: reason.clone(),
                        })
                        .await;
                    slots.push(ReadSlot::Finished(BatchEntry {
                        path,
                        outcome: FileOutcome::ReadFailed(reason),
                        track_errors: Vec::new(),
                    }));
                    continue;
                }
            };

            self.report_port
                .report(ReportEvent::FileRead {
                    path: path.clone(),
                    track_count: records.len(),
                })
                .await;

            let build = EditSetBuilder::build(&path, &records);
            for error in &build.track_errors {
                self.report_port
                    .report(ReportEvent::TrackSkipped {
                        path: path.clone(),
                        error: error.clone(),
                    })
                    .await;
            }

            slots.push(ReadSlot::Classified {
                edit_set: build.edit_set,
                track_errors: build.track_errors,
            });
        }

        slots
    }

    /// Start one writer task per classified file, bounded by the worker limit
    async fn launch_writes(&self, slots: Vec<ReadSlot>) -> Vec<WriteSlot> {
        let file_count = slots
            .iter()
            .filter(|slot| matches!(slot, ReadSlot::Classified { .. }))
            .count();
        self.report_port
            .report(ReportEvent::WritePhaseStarted { file_count })
            .await;

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_writes));

        slots
            .into_iter()
            .map(|slot| match slot {
                ReadSlot::Classified {
                    edit_set,
                    track_errors,
                } => {
                    let path = edit_set.file_path().to_path_buf();
                    let writer = Arc::clone(&self.writer_port);
                    let semaphore = Arc::clone(&semaphore);
                    let handle = tokio::spawn(async move {
                        let _permit = semaphore.acquire_owned().await.map_err(|_| {
                            TrackNameError::WriteFailed {
                                path: edit_set.file_path().to_path_buf(),
                                message: "writer pool closed".to_string(),
                            }
                        })?;
                        writer.write_edits(&edit_set).await
                    });
                    WriteSlot::Writing {
                        path,
                        track_errors,
                        handle,
                    }
                }
                ReadSlot::Finished(entry) => WriteSlot::Finished(entry),
            })
            .collect()
    }

    /// Await writers in input order, whatever order they finish in
    async fn join_writes(&self, slots: Vec<WriteSlot>) -> BatchOutcome {
        let mut entries = Vec::with_capacity(slots.len());

        for slot in slots {
            let entry = match slot {
                WriteSlot::Finished(entry) => entry,
                WriteSlot::Writing {
                    path,
                    track_errors,
                    handle,
                } => {
                    let outcome = match handle.await {
                        Ok(Ok(())) => FileOutcome::Success,
                        Ok(Err(e)) => FileOutcome::WriteFailed(failure_reason(e)),
                        Err(e) => FileOutcome::WriteFailed(format!("writer task failed: {}", e)),
                    };

                    let event = match &outcome {
                        FileOutcome::WriteFailed(diagnostic) => ReportEvent::WriteFailed {
                            path: path.clone(),
                            diagnostic: diagnostic.clone(),
                        },
                        _ => ReportEvent::FileWritten { path: path.clone() },
                    };
                    self.report_port.report(event).await;

                    BatchEntry {
                        path,
                        outcome,
                        track_errors,
                    }
                }
            };
            entries.push(entry);
        }

        BatchOutcome::new(entries)
    }
}

/// The text users should see for a failed read or write
fn failure_reason(error: TrackNameError) -> String {
    match error {
        TrackNameError::ReadFailed { message, .. } | TrackNameError::WriteFailed { message, .. } => {
            message
        }
        other => other.to_string(),
    }
}

fn unique_in_order(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .iter()
        .filter(|path| seen.insert(path.as_path()))
        .cloned()
        .collect()
}
