//! mkvpropedit writer adapter
//!
//! Turns a file edit set into a single mkvpropedit invocation.

use std::ffi::OsString;

use async_trait::async_trait;

use crate::adapters::process_runner::ToolRunner;
use crate::domain::model::*;
use crate::error::{TrackNameError, TrackNameResult};
use crate::ports::*;

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Build the mkvpropedit argument list for an edit set.
///
/// mkvpropedit numbers tracks from one while container ids start at zero.
pub fn build_arguments(edit_set: &FileEditSet) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![edit_set.file_path().as_os_str().to_owned(), "-q".into()];

    for edit in edit_set.property_edits() {
        match edit {
            PropertyEdit::ContainerTitle(title) => {
                push_edit(&mut args, "info", &[format!("title={}", title)]);
            }
            PropertyEdit::Track {
                track_id,
                name,
                is_default,
                is_forced,
                is_hearing_impaired,
            } => {
                let mut assignments = vec![
                    format!("name={}", name),
                    format!("flag-default={}", flag(is_default)),
                ];
                if let Some(forced) = is_forced {
                    assignments.push(format!("flag-forced={}", flag(forced)));
                }
                if let Some(hearing_impaired) = is_hearing_impaired {
                    assignments.push(format!("flag-hearing-impaired={}", flag(hearing_impaired)));
                }
                push_edit(&mut args, &format!("track:{}", track_id + 1), &assignments);
            }
        }
    }

    args
}

fn push_edit(args: &mut Vec<OsString>, selector: &str, assignments: &[String]) {
    args.push("-e".into());
    args.push(selector.into());
    for assignment in assignments {
        args.push("-s".into());
        args.push(assignment.into());
    }
}

/// mkvpropedit-based writer adapter
pub struct MkvpropeditWriter {
    runner: ToolRunner,
}

impl MkvpropeditWriter {
    pub fn new(runner: ToolRunner) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl WriterPort for MkvpropeditWriter {
    async fn write_edits(&self, edit_set: &FileEditSet) -> TrackNameResult<()> {
        let output = self.runner.run(&build_arguments(edit_set)).await?;

        if output.success {
            Ok(())
        } else {
            Err(TrackNameError::WriteFailed {
                path: edit_set.file_path().to_path_buf(),
                message: output.diagnostic(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn as_strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().to_string()).collect()
    }

    #[test]
    fn test_build_arguments() {
        let edit_set = FileEditSet::new(
            PathBuf::from("/media/Film.mkv"),
            "Film".to_string(),
            vec![
                TrackDescriptor::audio(1, "DTS-HD Master Audio 5.1".to_string(), true),
                TrackDescriptor::subtitle(2, "English [SDH] [SRT]".to_string(), false, true),
                TrackDescriptor::subtitle(3, "English [Sign/Songs] [ASS]".to_string(), true, false),
            ],
        );

        assert_eq!(
            as_strings(&build_arguments(&edit_set)),
            vec![
                "/media/Film.mkv",
                "-q",
                "-e",
                "info",
                "-s",
                "title=Film",
                "-e",
                "track:2",
                "-s",
                "name=DTS-HD Master Audio 5.1",
                "-s",
                "flag-default=1",
                "-e",
                "track:3",
                "-s",
                "name=English [SDH] [SRT]",
                "-s",
                "flag-default=0",
                "-s",
                "flag-forced=0",
                "-s",
                "flag-hearing-impaired=1",
                "-e",
                "track:4",
                "-s",
                "name=English [Sign/Songs] [ASS]",
                "-s",
                "flag-default=0",
                "-s",
                "flag-forced=1",
            ]
        );
    }

    #[test]
    fn test_build_arguments_title_only() {
        let edit_set = FileEditSet::new(PathBuf::from("a.mkv"), "a".to_string(), vec![]);
        assert_eq!(
            as_strings(&build_arguments(&edit_set)),
            vec!["a.mkv", "-q", "-e", "info", "-s", "title=a"]
        );
    }
}
