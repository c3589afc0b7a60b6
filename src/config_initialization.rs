//! Configuration initialization and hierarchy management

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::adapters::toml_config::{SettingsOverrides, TomlConfigAdapter};
use crate::error::{TrackNameError, TrackNameResult};
use crate::utils::logging::{LogFormat, LogLevel, LoggingConfig};

/// Environment variable naming an optional settings file
pub const CONFIG_ENV: &str = "TRACKNAME_CONFIG";

/// A configuration layer that contributed to the resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    File(PathBuf),
    Environment,
}

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub mkvmerge_path: PathBuf,
    pub mkvpropedit_path: PathBuf,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    pub max_concurrent_writes: usize,
    pub container_extension: String,
    pub logging: LoggingConfig,
    /// Layers applied on top of the defaults, in precedence order
    pub sources: Vec<SettingsSource>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            mkvmerge_path: PathBuf::from("mkvmerge"),
            mkvpropedit_path: PathBuf::from("mkvpropedit"),
            read_timeout: Duration::from_secs(120),
            write_timeout: Duration::from_secs(300),
            max_concurrent_writes: num_cpus::get().max(1),
            container_extension: "mkv".to_string(),
            logging: LoggingConfig::default(),
            sources: Vec::new(),
        }
    }
}

impl AppSettings {
    /// Overlay values from a settings file or the environment
    pub fn apply(&mut self, overrides: SettingsOverrides) -> TrackNameResult<()> {
        if let Some(path) = overrides.mkvmerge_path {
            self.mkvmerge_path = path;
        }
        if let Some(path) = overrides.mkvpropedit_path {
            self.mkvpropedit_path = path;
        }
        if let Some(secs) = overrides.read_timeout_secs {
            self.read_timeout = positive_secs("read_timeout_secs", secs)?;
        }
        if let Some(secs) = overrides.write_timeout_secs {
            self.write_timeout = positive_secs("write_timeout_secs", secs)?;
        }
        if let Some(limit) = overrides.max_concurrent_writes {
            if limit == 0 {
                return Err(TrackNameError::Config {
                    message: "max_concurrent_writes must be at least 1".to_string(),
                });
            }
            self.max_concurrent_writes = limit;
        }
        if let Some(ext) = overrides.container_extension {
            let ext = ext.trim_start_matches('.').to_string();
            if ext.is_empty() {
                return Err(TrackNameError::Config {
                    message: "container_extension cannot be empty".to_string(),
                });
            }
            self.container_extension = ext;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = LogLevel::parse(&level)?;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = LogFormat::parse(&format)?;
        }
        Ok(())
    }

    /// Log where the settings came from. Call once logging is initialized.
    pub fn log_sources(&self) {
        for source in &self.sources {
            match source {
                SettingsSource::File(path) => {
                    info!("Applied settings file {}", path.display())
                }
                SettingsSource::Environment => info!("Applied environment variable overrides"),
            }
        }
        debug!("Resolved settings: {:?}", self);
    }
}

fn positive_secs(key: &str, secs: u64) -> TrackNameResult<Duration> {
    if secs == 0 {
        return Err(TrackNameError::Config {
            message: format!("{} must be greater than zero", key),
        });
    }
    Ok(Duration::from_secs(secs))
}

/// Build settings following precedence: Env > File > Defaults
pub fn initialize_configuration_hierarchy() -> TrackNameResult<AppSettings> {
    initialize_with(|key| std::env::var(key).ok())
}

/// Same as [`initialize_configuration_hierarchy`] with an injectable environment
pub fn initialize_with<F>(env: F) -> TrackNameResult<AppSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = AppSettings::default();

    if let Some(path) = env(CONFIG_ENV) {
        let path = PathBuf::from(path);
        let overrides = TomlConfigAdapter::load(&path)?;
        settings.apply(overrides)?;
        settings.sources.push(SettingsSource::File(path));
    }

    let env_overrides = load_environment_variables(&env)?;
    if env_overrides != SettingsOverrides::default() {
        settings.apply(env_overrides)?;
        settings.sources.push(SettingsSource::Environment);
    }

    Ok(settings)
}

/// Collect environment variable overrides
fn load_environment_variables<F>(env: &F) -> TrackNameResult<SettingsOverrides>
where
    F: Fn(&str) -> Option<String>,
{
    let mut overrides = SettingsOverrides {
        mkvmerge_path: env("TRACKNAME_MKVMERGE").map(PathBuf::from),
        mkvpropedit_path: env("TRACKNAME_MKVPROPEDIT").map(PathBuf::from),
        container_extension: env("TRACKNAME_EXTENSION"),
        log_level: env("TRACKNAME_LOG_LEVEL"),
        log_format: env("TRACKNAME_LOG_FORMAT"),
        ..SettingsOverrides::default()
    };

    if let Some(value) = env("TRACKNAME_READ_TIMEOUT") {
        overrides.read_timeout_secs = Some(parse_number("TRACKNAME_READ_TIMEOUT", &value)?);
    }
    if let Some(value) = env("TRACKNAME_WRITE_TIMEOUT") {
        overrides.write_timeout_secs = Some(parse_number("TRACKNAME_WRITE_TIMEOUT", &value)?);
    }
    if let Some(value) = env("TRACKNAME_MAX_WRITERS") {
        overrides.max_concurrent_writes = Some(parse_number("TRACKNAME_MAX_WRITERS", &value)?);
    }

    Ok(overrides)
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> TrackNameResult<T> {
    value.trim().parse().map_err(|_| TrackNameError::Config {
        message: format!("{} must be a positive integer, got {:?}", key, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let settings = initialize_with(env_from(&[])).unwrap();
        assert_eq!(settings.mkvmerge_path, PathBuf::from("mkvmerge"));
        assert_eq!(settings.mkvpropedit_path, PathBuf::from("mkvpropedit"));
        assert_eq!(settings.container_extension, "mkv");
        assert!(settings.max_concurrent_writes >= 1);
        assert!(settings.sources.is_empty());
    }

    #[test]
    fn test_environment_overrides() {
        let settings = initialize_with(env_from(&[
            ("TRACKNAME_MKVPROPEDIT", "/usr/local/bin/mkvpropedit"),
            ("TRACKNAME_WRITE_TIMEOUT", "45"),
            ("TRACKNAME_MAX_WRITERS", "3"),
            ("TRACKNAME_EXTENSION", ".mka"),
            ("TRACKNAME_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(settings.mkvpropedit_path, PathBuf::from("/usr/local/bin/mkvpropedit"));
        assert_eq!(settings.write_timeout, Duration::from_secs(45));
        assert_eq!(settings.max_concurrent_writes, 3);
        assert_eq!(settings.container_extension, "mka");
        assert_eq!(settings.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_invalid_environment_values() {
        assert!(initialize_with(env_from(&[("TRACKNAME_MAX_WRITERS", "0")])).is_err());
        assert!(initialize_with(env_from(&[("TRACKNAME_READ_TIMEOUT", "soon")])).is_err());
        assert!(initialize_with(env_from(&[("TRACKNAME_LOG_FORMAT", "xml")])).is_err());
    }

    #[test]
    fn test_environment_wins_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[trackname]\nread_timeout_secs = 10\nmax_concurrent_writes = 8"
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let settings = initialize_with(env_from(&[
            (CONFIG_ENV, path.as_str()),
            ("TRACKNAME_MAX_WRITERS", "2"),
        ]))
        .unwrap();

        assert_eq!(settings.read_timeout, Duration::from_secs(10));
        assert_eq!(settings.max_concurrent_writes, 2);
        assert_eq!(
            settings.sources,
            vec![
                SettingsSource::File(file.path().to_path_buf()),
                SettingsSource::Environment,
            ]
        );
    }

    #[test]
    fn test_missing_settings_file_is_an_error() {
        let result = initialize_with(env_from(&[(CONFIG_ENV, "/nonexistent/trackname.toml")]));
        assert!(matches!(result, Err(TrackNameError::Config { .. })));
    }
}
