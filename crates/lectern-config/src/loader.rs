//! Configuration loading and validation
//!
//! Resolution order:
//! 1. An explicit path (must exist)
//! 2. `./lectern.toml`
//! 3. `<config_dir>/lectern/config.toml`
//! 4. Built-in defaults

use crate::components::{LoggingConfig, ServerConfig, StorageConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "lectern.toml";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested file does not exist
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File exists but could not be read
    #[error("Failed to read config at {}: {source}", path.display())]
    Read {
        /// Offending file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("Failed to parse config at {}: {source}", path.display())]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// A value parsed but is not usable
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// Dotted field name
        field: String,
        /// Explanation
        value: String,
    },

    /// Configuration could not be rendered back to TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LecternConfig {
    /// HTTP server section
    pub server: ServerConfig,
    /// Translation database section
    pub storage: StorageConfig,
    /// Logging section
    pub logging: LoggingConfig,
}

impl LecternConfig {
    /// Load configuration, falling back to defaults when no file is found
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(),
        };

        match path {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration");
                Self::from_file(&path)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// First existing config file in the standard locations
    pub fn discover() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        discover_in(&cwd, dirs::config_dir().as_deref())
    }

    /// Read and validate a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot work
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                value: "port must be non-zero".to_string(),
            });
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".to_string(),
                value: "host must not be empty".to_string(),
            });
        }
        let extension = self.storage.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.extension".to_string(),
                value: "extension must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Search `cwd` and then `config_dir` for a config file
pub fn discover_in(cwd: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    config_dir
        .map(|dir| dir.join("lectern").join("config.toml"))
        .filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogFormat;
    use tempfile::TempDir;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: LecternConfig = toml::from_str("").unwrap();
        assert_eq!(config, LecternConfig::default());
        assert_eq!(config.server.port, 8000);
        assert_eq!(
            config.storage.data_dir,
            PathBuf::from("bible_databases/formats/sqlite")
        );
        assert_eq!(config.storage.exclude, vec!["TRANSLATIONS".to_string()]);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config: LecternConfig = toml::from_str(
            r#"
            [server]
            port = 9000

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.server.cors);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = LecternConfig::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "server.port"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_extension() {
        let mut config = LecternConfig::default();
        config.storage.extension = ".".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            LecternConfig::load(Some(&missing)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[storage]\ndata_dir = \"/srv/bibles\"\n").unwrap();

        let config = LecternConfig::load(Some(&path)).unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/srv/bibles"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[server\nport = ").unwrap();

        let err = LecternConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_discover_prefers_working_directory() {
        let cwd = TempDir::new().unwrap();
        let config_dir = TempDir::new().unwrap();
        let global = config_dir.path().join("lectern");
        fs::create_dir_all(&global).unwrap();
        fs::write(global.join("config.toml"), "").unwrap();

        assert_eq!(
            discover_in(cwd.path(), Some(config_dir.path())),
            Some(global.join("config.toml"))
        );

        fs::write(cwd.path().join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(
            discover_in(cwd.path(), Some(config_dir.path())),
            Some(cwd.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_discover_nothing() {
        let cwd = TempDir::new().unwrap();
        assert_eq!(discover_in(cwd.path(), None), None);
    }
}
