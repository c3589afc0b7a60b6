//! CLI module for TrackName
//!
//! This module handles command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Rename audio and subtitle tracks of Matroska files in place.
///
/// Tools, timeouts and logging are configured through TRACKNAME_* environment
/// variables or a TOML file named by TRACKNAME_CONFIG.
#[derive(Parser, Debug)]
#[command(name = "trackname")]
#[command(about = "TrackName - Consistent track names and flags for Matroska files")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Media files, or directories whose media files are processed
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_positional() {
        let cli = Cli::try_parse_from(["trackname", "a.mkv", "shows/"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("a.mkv"), PathBuf::from("shows/")]);
    }

    #[test]
    fn test_no_paths_is_accepted() {
        let cli = Cli::try_parse_from(["trackname"]).unwrap();
        assert!(cli.paths.is_empty());
    }

    #[test]
    fn test_unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["trackname", "--mode", "copy"]).is_err());
    }
}
