//! # Configuration
//!
//! Settings for the `popx` tools: where user records live, which key they
//! are stored under, the log level, and form presentation defaults.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::directory::USERS_KEY;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The YAML document is malformed.
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yml::Error,
    },

    /// The JSON document is malformed.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The file extension is neither YAML nor JSON.
    #[error("unsupported configuration format for {0}. Use 'yaml' or 'json'.")]
    UnsupportedFormat(PathBuf),

    /// An environment override could not be parsed.
    #[error("invalid {var} value '{value}'")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Rejected value.
        value: String,
    },

    /// The resolved configuration failed validation.
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Resolved settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Logging level (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: String,

    /// Directory holding the JSON record files.
    pub store_path: PathBuf,

    /// Key the user list is stored under.
    pub users_key: String,

    /// Whether valid required fields show success indication.
    pub show_success: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Config {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            log_level: "info".to_string(),
            store_path: default_store_path(),
            users_key: USERS_KEY.to_string(),
            show_success: true,
        }
    }

    /// Loads the configuration from a file, environment variables, or
    /// defaults, in that order of precedence, then validates it.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, an
    /// environment override is malformed, or validation fails.
    pub fn load_config(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::with_defaults(),
        };

        config.apply_env_overrides(|name| env::var(name).ok())?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Parses a YAML or JSON file, chosen by extension.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml" | "yml") => {
                let content = read(&path)?;
                serde_yml::from_str(&content).map_err(|source| ConfigError::Yaml { path, source })
            }
            Some("json") => {
                let content = read(&path)?;
                serde_json::from_str(&content).map_err(|source| ConfigError::Json { path, source })
            }
            _ => Err(ConfigError::UnsupportedFormat(path)),
        }
    }

    /// Applies `POPX_*` variables to values still at their defaults.
    ///
    /// `lookup` resolves a variable name to its value.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidEnv`] for an unparseable
    /// `POPX_SHOW_SUCCESS`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::with_defaults();

        if self.log_level == defaults.log_level
            && let Some(level) = lookup("POPX_LOG_LEVEL")
        {
            self.log_level = level;
        }
        if self.store_path == defaults.store_path
            && let Some(path) = lookup("POPX_STORE_PATH")
        {
            self.store_path = PathBuf::from(path);
        }
        if self.users_key == defaults.users_key
            && let Some(key) = lookup("POPX_USERS_KEY")
        {
            self.users_key = key;
        }
        if self.show_success == defaults.show_success
            && let Some(value) = lookup("POPX_SHOW_SUCCESS")
        {
            self.show_success = match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        var: "POPX_SHOW_SUCCESS",
                        value,
                    });
                }
            };
        }
        Ok(())
    }

    /// Checks every setting, collecting all problems.
    ///
    /// # Errors
    /// Returns the list of problems found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log level '{}'. Expected one of: {}.",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if self.users_key.trim().is_empty() {
            errors.push("Users key must not be empty.".to_string());
        }

        if self.store_path.as_os_str().is_empty() {
            errors.push("Store path must not be empty.".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn default_store_path() -> PathBuf {
    ProjectDirs::from("io", "popx", "popx")
        .map_or_else(|| PathBuf::from("popx-data"), |dirs| dirs.data_dir().to_path_buf())
}
