// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::errors::TrackError;

/// Kind of stream multiplexed in a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackType {
    Audio,
    Subtitle,
    Video,
    Other,
}

impl TrackType {
    /// Map the container tool's type string onto a track type
    pub fn from_container_type(type_str: &str) -> Self {
        match type_str {
            "audio" => TrackType::Audio,
            "subtitles" => TrackType::Subtitle,
            "video" => TrackType::Video,
            _ => TrackType::Other,
        }
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackType::Audio => write!(f, "audio"),
            TrackType::Subtitle => write!(f, "subtitle"),
            TrackType::Video => write!(f, "video"),
            TrackType::Other => write!(f, "other"),
        }
    }
}

/// Raw per-track metadata as reported by the container reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    /// Container-assigned, zero-based
    pub id: u32,
    pub track_type: TrackType,
    pub language: Option<String>,
    pub codec: Option<String>,
    pub existing_name: Option<String>,
    pub channel_count: Option<u32>,
    pub hearing_impaired: bool,
}

impl TrackRecord {
    /// Create a record with no optional metadata
    pub fn new(id: u32, track_type: TrackType) -> Self {
        Self {
            id,
            track_type,
            language: None,
            codec: None,
            existing_name: None,
            channel_count: None,
            hearing_impaired: false,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_codec(mut self, codec: impl Into<String>) -> Self {
        self.codec = Some(codec.into());
        self
    }

    pub fn with_existing_name(mut self, name: impl Into<String>) -> Self {
        self.existing_name = Some(name.into());
        self
    }

    pub fn with_channels(mut self, channels: u32) -> Self {
        self.channel_count = Some(channels);
        self
    }

    pub fn with_hearing_impaired(mut self, hearing_impaired: bool) -> Self {
        self.hearing_impaired = hearing_impaired;
        self
    }
}

/// Which rule set produced a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    Audio,
    Subtitle,
}

/// Presentation metadata derived for one track.
///
/// Only subtitle descriptors can carry a forced flag, so the fields are
/// private and set through the kind-specific constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDescriptor {
    track_id: u32,
    kind: DescriptorKind,
    display_name: String,
    is_default: bool,
    is_forced: bool,
    is_hearing_impaired: bool,
}

impl TrackDescriptor {
    pub fn audio(track_id: u32, display_name: String, is_default: bool) -> Self {
        Self {
            track_id,
            kind: DescriptorKind::Audio,
            display_name,
            is_default,
            is_forced: false,
            is_hearing_impaired: false,
        }
    }

    pub fn subtitle(
        track_id: u32,
        display_name: String,
        is_forced: bool,
        is_hearing_impaired: bool,
    ) -> Self {
        Self {
            track_id,
            kind: DescriptorKind::Subtitle,
            display_name,
            is_default: false,
            is_forced,
            is_hearing_impaired,
        }
    }

    pub fn track_id(&self) -> u32 {
        self.track_id
    }

    pub fn kind(&self) -> DescriptorKind {
        self.kind
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn is_forced(&self) -> bool {
        self.is_forced
    }

    pub fn is_hearing_impaired(&self) -> bool {
        self.is_hearing_impaired
    }

    /// Forced flag assignment for the writer; audio never assigns one
    pub fn forced_assignment(&self) -> Option<bool> {
        match self.kind {
            DescriptorKind::Subtitle => Some(self.is_forced),
            DescriptorKind::Audio => None,
        }
    }

    /// Hearing-impaired assignment for the writer; only a positive flag is written
    pub fn hearing_impaired_assignment(&self) -> Option<bool> {
        self.is_hearing_impaired.then_some(true)
    }
}

/// Everything the writer needs to rename one file's tracks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEditSet {
    file_path: PathBuf,
    container_title: String,
    track_descriptors: Vec<TrackDescriptor>,
}

impl FileEditSet {
    pub fn new(
        file_path: PathBuf,
        container_title: String,
        track_descriptors: Vec<TrackDescriptor>,
    ) -> Self {
        Self {
            file_path,
            container_title,
            track_descriptors,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn container_title(&self) -> &str {
        &self.container_title
    }

    /// Descriptors in container discovery order
    pub fn track_descriptors(&self) -> &[TrackDescriptor] {
        &self.track_descriptors
    }

    pub fn descriptor_for(&self, track_id: u32) -> Option<&TrackDescriptor> {
        self.track_descriptors
            .iter()
            .find(|d| d.track_id() == track_id)
    }

    /// Ordered edits for the writer: the container title first, then one per track
    pub fn property_edits(&self) -> Vec<PropertyEdit> {
        std::iter::once(PropertyEdit::ContainerTitle(self.container_title.clone()))
            .chain(self.track_descriptors.iter().map(|d| PropertyEdit::Track {
                track_id: d.track_id(),
                name: d.display_name().to_string(),
                is_default: d.is_default(),
                is_forced: d.forced_assignment(),
                is_hearing_impaired: d.hearing_impaired_assignment(),
            }))
            .collect()
    }
}

/// A single writer edit. `None` leaves the container's current flag untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyEdit {
    ContainerTitle(String),
    Track {
        track_id: u32,
        name: String,
        is_default: bool,
        is_forced: Option<bool>,
        is_hearing_impaired: Option<bool>,
    },
}

/// Terminal result for one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Success,
    ReadFailed(String),
    WriteFailed(String),
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Success)
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Success => write!(f, "success"),
            FileOutcome::ReadFailed(reason) => write!(f, "read failed: {}", reason),
            FileOutcome::WriteFailed(reason) => write!(f, "write failed: {}", reason),
        }
    }
}

/// Outcome of one file plus the tracks dropped while classifying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub outcome: FileOutcome,
    pub track_errors: Vec<TrackError>,
}

/// Per-file results of a batch, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    entries: Vec<BatchEntry>,
}

impl BatchOutcome {
    pub fn new(entries: Vec<BatchEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    pub fn get(&self, path: &Path) -> Option<&FileOutcome> {
        self.entries
            .iter()
            .find(|e| e.path == path)
            .map(|e| &e.outcome)
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.entries.iter().map(|e| e.path.as_path()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }
}
