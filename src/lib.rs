//! TrackName CLI Library
//!
//! Reads the tracks of Matroska files with mkvmerge, derives consistent names
//! and flags for audio and subtitle tracks, and writes them back with
//! mkvpropedit as a concurrent batch.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::{DomainError, TrackError};
pub use domain::model::{
    BatchEntry, BatchOutcome, FileEditSet, FileOutcome, PropertyEdit, TrackDescriptor, TrackRecord,
    TrackType,
};
pub use error::{TrackNameError, TrackNameResult};
