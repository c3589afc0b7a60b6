// Domain errors - Error types for the domain layer

use std::fmt;

/// Per-track classification failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Audio codec identifier has no display name
    UnknownCodec(String),
    /// Subtitle codec identifier lacks the `<family>/<variant>` separator
    MalformedCodec(String),
    /// Track carries no codec identifier at all
    MissingCodec,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::UnknownCodec(codec) => write!(f, "Unknown audio codec: {}", codec),
            DomainError::MalformedCodec(codec) => {
                write!(f, "Malformed subtitle codec identifier: {}", codec)
            }
            DomainError::MissingCodec => write!(f, "Track has no codec identifier"),
        }
    }
}

impl std::error::Error for DomainError {}

/// A classification failure tied to the track that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackError {
    pub track_id: u32,
    pub error: DomainError,
}

impl TrackError {
    pub fn new(track_id: u32, error: DomainError) -> Self {
        Self { track_id, error }
    }
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "track {}: {}", self.track_id, self.error)
    }
}

impl std::error::Error for TrackError {}
