// Domain rules - Track naming and flag policies

use crate::domain::errors::*;
use crate::domain::model::*;

/// Markers in an existing subtitle name that indicate an SDH track
pub const SDH_MARKERS: &[&str] = &[
    "SDH",
    "sdh",
    "Sdh",
    "Closed Captions",
    "CC",
    "Full",
    "full sync",
    "Full subtitles",
];

/// Markers in an existing subtitle name that indicate a signs/songs track
pub const SIGN_SONG_MARKERS: &[&str] = &["Sign", "signs/songs", "songs", "signs / songs"];

/// Audio codec identifiers and their display names
const AUDIO_CODECS: &[(&str, &str)] = &[
    ("A_FLAC", "FLAC"),
    ("A_EAC3", "Dolby Digital Plus"),
    ("A_TRUEHD", "TrueHD Atmos"),
    ("A_AC3", "Dolby Digital"),
    ("A_DTS", "DTS-HD Master Audio"),
    ("A_PCM", "PCM"),
    ("A_AAC", "Advanced Audio Coding (AAC)"),
];

const LANGUAGE_DEFAULT_AUDIO: &str = "English";
const SDH_SUFFIX: &str = " [SDH]";
const SIGN_SONG_SUFFIX: &str = " [Sign/Songs]";

/// Result of an audio codec table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecLookup {
    Found(&'static str),
    Unknown,
}

impl CodecLookup {
    /// Look up a codec identifier, falling back to its family
    /// (`A_PCM/INT/LIT` is looked up as `A_PCM`)
    pub fn audio(codec_id: &str) -> Self {
        let family = codec_id.split('/').next().unwrap_or(codec_id);
        AUDIO_CODECS
            .iter()
            .find(|(id, _)| *id == codec_id)
            .or_else(|| AUDIO_CODECS.iter().find(|(id, _)| *id == family))
            .map(|(_, name)| CodecLookup::Found(*name))
            .unwrap_or(CodecLookup::Unknown)
    }
}

/// Output of classifying a single track
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Descriptor(TrackDescriptor),
    /// Track type the classifier does not name
    Skip,
}

/// Business rules deriving display names and flags from track metadata
pub struct TrackClassifier;

impl TrackClassifier {
    /// Classify one track given its resolved display language
    pub fn classify(
        record: &TrackRecord,
        display_language: &str,
    ) -> Result<Classification, DomainError> {
        match record.track_type {
            TrackType::Audio => Self::classify_audio(record, display_language),
            TrackType::Subtitle => Self::classify_subtitle(record, display_language),
            TrackType::Video | TrackType::Other => Ok(Classification::Skip),
        }
    }

    fn classify_audio(
        record: &TrackRecord,
        display_language: &str,
    ) -> Result<Classification, DomainError> {
        let codec = record.codec.as_deref().ok_or(DomainError::MissingCodec)?;
        let codec_name = match CodecLookup::audio(codec) {
            CodecLookup::Found(name) => name,
            CodecLookup::Unknown => return Err(DomainError::UnknownCodec(codec.to_string())),
        };

        let display_name = match record.channel_count {
            Some(channels) => format!("{} {}", codec_name, Self::channel_label(channels)),
            None => codec_name.to_string(),
        };
        let is_default = display_language == LANGUAGE_DEFAULT_AUDIO;

        Ok(Classification::Descriptor(TrackDescriptor::audio(
            record.id,
            display_name,
            is_default,
        )))
    }

    fn classify_subtitle(
        record: &TrackRecord,
        display_language: &str,
    ) -> Result<Classification, DomainError> {
        let codec = record.codec.as_deref().ok_or(DomainError::MissingCodec)?;
        let variant = Self::subtitle_variant(codec)?;
        let existing_name = record.existing_name.as_deref().unwrap_or_default();

        let mut display_name = display_language.to_string();
        let mut is_forced = false;
        let is_hearing_impaired =
            record.hearing_impaired || Self::contains_any(existing_name, SDH_MARKERS);

        if is_hearing_impaired {
            display_name.push_str(SDH_SUFFIX);
        } else if Self::contains_any(existing_name, SIGN_SONG_MARKERS) {
            display_name.push_str(SIGN_SONG_SUFFIX);
            is_forced = true;
        }

        display_name.push_str(&format!(" [{}]", variant));

        Ok(Classification::Descriptor(TrackDescriptor::subtitle(
            record.id,
            display_name,
            is_forced,
            is_hearing_impaired,
        )))
    }

    /// Human label for a channel count; unmapped counts are shown as-is
    pub fn channel_label(channels: u32) -> String {
        match channels {
            2 => "2.0".to_string(),
            6 => "5.1".to_string(),
            8 => "7.1".to_string(),
            other => other.to_string(),
        }
    }

    /// Display form of the variant half of a `<family>/<variant>` subtitle codec
    pub fn subtitle_variant(codec_id: &str) -> Result<&str, DomainError> {
        match codec_id.split('/').nth(1) {
            Some("UTF8") => Ok("SRT"),
            Some(variant) if !variant.is_empty() => Ok(variant),
            _ => Err(DomainError::MalformedCodec(codec_id.to_string())),
        }
    }

    fn contains_any(haystack: &str, markers: &[&str]) -> bool {
        markers.iter().any(|marker| haystack.contains(marker))
    }
}
