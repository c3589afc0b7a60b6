use assert_cmd::Command;
use predicates::prelude::*;

fn trackname() -> Command {
    let mut cmd = Command::cargo_bin("trackname").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("TRACKNAME_CONFIG")
        .env("TRACKNAME_MKVMERGE", "/nonexistent/mkvmerge")
        .env("TRACKNAME_MKVPROPEDIT", "/nonexistent/mkvpropedit");
    cmd
}

#[test]
fn test_no_inputs_is_not_an_error() {
    trackname()
        .assert()
        .success()
        .stdout(predicate::str::contains("No files imported"));
}

#[test]
fn test_missing_input_is_skipped() {
    trackname()
        .arg("/nonexistent/trackname/input.mkv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input does not exist"));
}

#[test]
fn test_unreadable_file_is_reported_as_failed() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("episode.mkv");
    std::fs::write(&file, b"").unwrap();

    trackname()
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 succeeded, 1 failed"));
}

#[test]
fn test_invalid_configuration_fails() {
    trackname()
        .env("TRACKNAME_MAX_WRITERS", "0")
        .arg("episode.mkv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_configuration_sources_are_logged() {
    trackname()
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied environment variable overrides"));
}

#[test]
fn test_help_lists_path_argument() {
    trackname()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PATH"));
}
