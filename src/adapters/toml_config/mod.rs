// TOML config adapter - Optional settings file

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{TrackNameError, TrackNameResult};

/// Values a settings file may override; everything is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsOverrides {
    pub mkvmerge_path: Option<PathBuf>,
    pub mkvpropedit_path: Option<PathBuf>,
    pub read_timeout_secs: Option<u64>,
    pub write_timeout_secs: Option<u64>,
    pub max_concurrent_writes: Option<usize>,
    pub container_extension: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    trackname: SettingsOverrides,
}

/// TOML settings file adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Load overrides from the `[trackname]` table of a TOML file
    pub fn load(file_path: &Path) -> TrackNameResult<SettingsOverrides> {
        if !file_path.is_file() {
            return Err(TrackNameError::Config {
                message: format!("Settings file does not exist: {}", file_path.display()),
            });
        }

        let content = std::fs::read_to_string(file_path)?;
        let overrides = Self::parse(&content)?;
        tracing::debug!("Loaded settings from {}", file_path.display());
        Ok(overrides)
    }

    /// Parse overrides from TOML text
    pub fn parse(toml_content: &str) -> TrackNameResult<SettingsOverrides> {
        let file: SettingsFile = toml::from_str(toml_content)?;
        Ok(file.trackname)
    }
}
