use fs2::FileExt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {source}")]
    SerializeError {
        #[source]
        source: toml::ser::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `dirs::config_dir()/cgview/config.toml`, falling back to the
    /// current directory if no config dir is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cgview").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Writes configuration to `path`, creating parent directories.
    ///
    /// The file is replaced by rename while holding an exclusive lock on
    /// `<path>.lock`, so concurrent viewers never read a partial file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source: std::io::Error| ConfigError::WriteError {
            path: path.to_path_buf(),
            source,
        };

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError { source: e })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let lock_file = File::create(path.with_extension("lock")).map_err(write_err)?;
        lock_file.lock_exclusive().map_err(write_err)?;

        let tmp_path = path.with_extension("toml.tmp");
        let result = fs::write(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, path));

        let _ = FileExt::unlock(&lock_file);
        result.map_err(write_err)
    }
}
