//! mkvmerge reader adapter
//!
//! Reads track metadata with `mkvmerge -J` and maps the identification JSON
//! onto domain track records.

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::adapters::process_runner::{ToolOutput, ToolRunner};
use crate::domain::model::*;
use crate::error::{TrackNameError, TrackNameResult};
use crate::ports::*;

#[derive(Debug, Deserialize)]
struct Identification {
    #[serde(default)]
    tracks: Vec<IdentifiedTrack>,
    #[serde(default)]
    errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct IdentifiedTrack {
    id: u32,
    #[serde(rename = "type")]
    track_type: String,
    #[serde(default)]
    properties: TrackProperties,
}

#[derive(Debug, Default, Deserialize)]
struct TrackProperties {
    language: Option<String>,
    language_ietf: Option<String>,
    codec_id: Option<String>,
    track_name: Option<String>,
    audio_channels: Option<u32>,
    flag_hearing_impaired: Option<bool>,
}

impl From<IdentifiedTrack> for TrackRecord {
    fn from(track: IdentifiedTrack) -> Self {
        let props = track.properties;
        TrackRecord {
            id: track.id,
            track_type: TrackType::from_container_type(&track.track_type),
            language: props.language.or(props.language_ietf),
            codec: props.codec_id,
            existing_name: props.track_name,
            channel_count: props.audio_channels,
            hearing_impaired: props.flag_hearing_impaired.unwrap_or(false),
        }
    }
}

/// Parse `mkvmerge -J` output into track records, preserving track order
pub fn parse_identification(json: &str) -> TrackNameResult<Vec<TrackRecord>> {
    let identification: Identification = serde_json::from_str(json)?;
    Ok(identification
        .tracks
        .into_iter()
        .map(TrackRecord::from)
        .collect())
}

/// Reason for a failed identification.
///
/// mkvmerge still prints its JSON document on failure; its `errors` list is
/// preferred over the raw output.
pub fn failure_message(output: &ToolOutput) -> String {
    match serde_json::from_str::<Identification>(&output.stdout) {
        Ok(identification) if !identification.errors.is_empty() => {
            identification.errors.join("\n")
        }
        _ => output.diagnostic(),
    }
}

/// mkvmerge-based reader adapter
pub struct MkvmergeReader {
    runner: ToolRunner,
}

impl MkvmergeReader {
    pub fn new(runner: ToolRunner) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl ReaderPort for MkvmergeReader {
    async fn read_tracks(&self, file_path: &Path) -> TrackNameResult<Vec<TrackRecord>> {
        let args: Vec<OsString> = vec!["-J".into(), file_path.as_os_str().to_owned()];
        let output = self.runner.run(&args).await?;

        if !output.success {
            return Err(TrackNameError::ReadFailed {
                path: file_path.to_path_buf(),
                message: failure_message(&output),
            });
        }

        parse_identification(&output.stdout)
    }
}
