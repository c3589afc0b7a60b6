//! Error handling module for TrackName

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Main error type for TrackName operations
#[derive(Error, Debug)]
pub enum TrackNameError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// External reader could not produce track records
    #[error("Failed to read tracks from {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// External writer rejected the edits
    #[error("Failed to write metadata to {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// External tool did not finish in time
    #[error("{tool} timed out after {}s", .after.as_secs())]
    Timeout { tool: String, after: Duration },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reader output was not valid identification JSON
    #[error("Invalid identification output: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be parsed
    #[error("Invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for TrackName operations
pub type TrackNameResult<T> = std::result::Result<T, TrackNameError>;
