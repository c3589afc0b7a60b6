// Domain use cases - Per-file edit set construction

use std::path::Path;

use crate::domain::errors::*;
use crate::domain::language;
use crate::domain::model::*;
use crate::domain::rules::*;

/// Container extensions stripped when deriving a title
pub const MEDIA_EXTENSIONS: &[&str] = &[".mkv", ".mk3d", ".mka", ".mks", ".mp4", ".m4v", ".webm"];

/// Result of building one file's edit set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSetBuild {
    pub edit_set: FileEditSet,
    /// Tracks dropped from the edit set because they could not be classified
    pub track_errors: Vec<TrackError>,
}

/// Aggregates per-track descriptors into a file edit set
pub struct EditSetBuilder;

impl EditSetBuilder {
    /// Classify every track of a file, in discovery order.
    ///
    /// A track that fails classification is left out and reported; the
    /// remaining tracks are still included.
    pub fn build(file_path: &Path, records: &[TrackRecord]) -> EditSetBuild {
        let mut descriptors = Vec::new();
        let mut track_errors = Vec::new();

        for record in records {
            let display_language = language::resolve(record.language.as_deref());
            match TrackClassifier::classify(record, display_language) {
                Ok(Classification::Descriptor(descriptor)) => descriptors.push(descriptor),
                Ok(Classification::Skip) => {}
                Err(error) => track_errors.push(TrackError::new(record.id, error)),
            }
        }

        EditSetBuild {
            edit_set: FileEditSet::new(
                file_path.to_path_buf(),
                container_title(file_path),
                descriptors,
            ),
            track_errors,
        }
    }
}

/// File base name with the longest matching media extension removed
pub fn container_title(file_path: &Path) -> String {
    let base_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    let longest = MEDIA_EXTENSIONS
        .iter()
        .filter(|ext| base_name.len() > ext.len() && base_name.ends_with(*ext))
        .max_by_key(|ext| ext.len());

    match longest {
        Some(ext) => base_name[..base_name.len() - ext.len()].to_string(),
        None => base_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_container_title_strips_extension() {
        assert_eq!(container_title(Path::new("/media/Show S01E01.mkv")), "Show S01E01");
        assert_eq!(container_title(Path::new("Movie.mp4")), "Movie");
        assert_eq!(container_title(Path::new("clip.webm")), "clip");
    }

    #[test]
    fn test_container_title_is_case_sensitive() {
        assert_eq!(container_title(Path::new("Movie.MKV")), "Movie.MKV");
    }

    #[test]
    fn test_container_title_strips_only_the_suffix() {
        assert_eq!(container_title(Path::new("a.mkv.b.mkv")), "a.mkv.b");
        assert_eq!(container_title(Path::new("notes.txt")), "notes.txt");
        assert_eq!(container_title(Path::new(".mkv")), ".mkv");
    }

    #[test]
    fn test_build_keeps_discovery_order_and_skips_video() {
        let records = vec![
            TrackRecord::new(0, TrackType::Video).with_codec("V_MPEG4/ISO/AVC"),
            TrackRecord::new(1, TrackType::Audio)
                .with_language("jpn")
                .with_codec("A_FLAC")
                .with_channels(2),
            TrackRecord::new(2, TrackType::Subtitle)
                .with_language("eng")
                .with_codec("S_TEXT/ASS")
                .with_existing_name("Signs & Songs"),
            TrackRecord::new(3, TrackType::Other),
            TrackRecord::new(4, TrackType::Subtitle)
                .with_language("eng")
                .with_codec("S_TEXT/ASS"),
        ];

        let build = EditSetBuilder::build(Path::new("/anime/Episode 01.mkv"), &records);
        let ids: Vec<u32> = build
            .edit_set
            .track_descriptors()
            .iter()
            .map(|d| d.track_id())
            .collect();

        assert_eq!(ids, vec![1, 2, 4]);
        assert!(build.track_errors.is_empty());
        assert_eq!(build.edit_set.container_title(), "Episode 01");
        assert_eq!(build.edit_set.file_path(), PathBuf::from("/anime/Episode 01.mkv"));

        let audio = build.edit_set.descriptor_for(1).unwrap();
        assert_eq!(audio.display_name(), "FLAC 2.0");
        assert!(!audio.is_default());

        let signs = build.edit_set.descriptor_for(2).unwrap();
        assert_eq!(signs.display_name(), "English [Sign/Songs] [ASS]");
        assert!(signs.is_forced());
    }

    #[test]
    fn test_build_reports_failed_tracks_and_keeps_the_rest() {
        let records = vec![
            TrackRecord::new(1, TrackType::Audio)
                .with_language("eng")
                .with_codec("A_OPUS")
                .with_channels(2),
            TrackRecord::new(2, TrackType::Audio)
                .with_language("eng")
                .with_codec("A_EAC3")
                .with_channels(6),
            TrackRecord::new(3, TrackType::Subtitle)
                .with_language("eng")
                .with_codec("S_VOBSUB"),
        ];

        let build = EditSetBuilder::build(Path::new("Film.mkv"), &records);

        assert_eq!(build.edit_set.track_descriptors().len(), 1);
        assert_eq!(
            build.edit_set.track_descriptors()[0].display_name(),
            "Dolby Digital Plus 5.1"
        );
        assert_eq!(
            build.track_errors,
            vec![
                TrackError::new(1, DomainError::UnknownCodec("A_OPUS".to_string())),
                TrackError::new(3, DomainError::MalformedCodec("S_VOBSUB".to_string())),
            ]
        );
    }

    #[test]
    fn test_unknown_language_still_classifies() {
        let records = vec![TrackRecord::new(1, TrackType::Subtitle).with_codec("S_TEXT/UTF8")];
        let build = EditSetBuilder::build(Path::new("x.mkv"), &records);
        assert_eq!(
            build.edit_set.track_descriptors()[0].display_name(),
            "Unknown [SRT]"
        );
    }
}
