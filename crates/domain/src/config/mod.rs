mod custom;
mod sessions;

pub use custom::*;
pub use sessions::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::trace::TraceEvent;

/// Environment variable naming the config file to load.
pub const CONFIG_ENV: &str = "IL_CONFIG";

/// Config file used when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub custom: CustomConfig,
    #[serde(default)]
    pub sessions: SessionsConfig,
}

impl Config {
    /// The root data directory (`custom.imaging_root_data_dir`), or `None`
    /// when it is not configured.
    pub fn imaging_root_data_dir(&self) -> Option<PathBuf> {
        self.custom.root_data_dir()
    }

    /// Parse a config from TOML text.  Missing sections take their defaults.
    pub fn from_toml_str(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Load the config file at `path`.  A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file_present = path.exists();
        let config = if file_present {
            let raw = std::fs::read_to_string(path).map_err(|source| Error::Read {
                path: path.display().to_string(),
                source,
            })?;
            Self::from_toml_str(&raw).map_err(|source| Error::Toml {
                path: path.display().to_string(),
                source,
            })?
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        TraceEvent::ConfigLoaded {
            path: path.display().to_string(),
            file_present,
            root_configured: config.imaging_root_data_dir().is_some(),
        }
        .emit();

        Ok(config)
    }
}

/// Resolve the config path from `IL_CONFIG` (or `config.toml`) and load it.
/// Returns the parsed [`Config`] and the path that was used.
pub fn load_config() -> Result<(Config, PathBuf)> {
    let config_path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = Config::load_from_path(&config_path)?;
    Ok((config, config_path))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return a list of issues.
    ///
    /// Returns an empty vec when everything looks good.  An unset root is
    /// only a warning: the config is still usable for `config show` and
    /// store inspection, but every file lookup will fail.
    pub fn validate(&self) -> Vec<ConfigError> {
        const ROOT_FIELD: &str = "custom.imaging_root_data_dir";
        let mut errors = Vec::new();

        match self.imaging_root_data_dir() {
            None => errors.push(ConfigError {
                severity: ConfigSeverity::Warning,
                field: ROOT_FIELD.into(),
                message: "not configured; file lookups will fail".into(),
            }),
            Some(root) => {
                if !root.is_absolute() {
                    errors.push(ConfigError {
                        severity: ConfigSeverity::Warning,
                        field: ROOT_FIELD.into(),
                        message: format!(
                            "{} is relative; it will be resolved against the working directory",
                            root.display()
                        ),
                    });
                }
                if !root.is_dir() {
                    errors.push(ConfigError {
                        severity: ConfigSeverity::Warning,
                        field: ROOT_FIELD.into(),
                        message: format!("{} is not an existing directory", root.display()),
                    });
                }
            }
        }

        if self.sessions.directory_store.as_os_str().is_empty() {
            errors.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "sessions.directory_store".into(),
                message: "directory_store must not be empty".into(),
            });
        }

        errors
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn validate_warns_when_root_unset() {
        let issues = Config::default().validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, ConfigSeverity::Warning);
        assert_eq!(issues[0].field, "custom.imaging_root_data_dir");
    }

    #[test]
    fn validate_accepts_existing_absolute_root() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.custom.imaging_root_data_dir = Some(dir.path().to_path_buf());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn validate_warns_on_missing_root_dir() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.custom.imaging_root_data_dir = Some(dir.path().join("nope"));
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("not an existing directory"));
    }

    #[test]
    fn validate_errors_on_empty_store_path() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.custom.imaging_root_data_dir = Some(dir.path().to_path_buf());
        config.sessions.directory_store = PathBuf::new();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, ConfigSeverity::Error);
        assert_eq!(issues[0].to_string(), "[ERROR] sessions.directory_store: directory_store must not be empty");
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(&dir.path().join("config.toml")).unwrap();
        assert!(config.imaging_root_data_dir().is_none());
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[custom\nimaging_root_data_dir = 1").unwrap();
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Toml { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
