//! Configuration loading from disk and environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::LoggerConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::level::Threshold;

/// Environment variable holding the console threshold.
pub const THRESHOLD_ENV: &str = "DEBUG";

/// Environment variable holding the log file path.
pub const FILE_ENV: &str = "ACCESS_LOG_FILE";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// Environment overrides are applied between parsing and validation.
pub fn load_config(path: &Path) -> Result<LoggerConfig, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Like [`load_config`], with overrides taken from `lookup` instead of the
/// process environment.
pub fn load_config_with(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<LoggerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: LoggerConfig = toml::from_str(&content)?;

    config.apply_overrides(lookup);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

impl LoggerConfig {
    /// Apply `DEBUG` and `ACCESS_LOG_FILE` from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(THRESHOLD_ENV) {
            self.threshold = Threshold::parse(&raw);
            if !self.threshold.is_valid() {
                tracing::warn!(
                    threshold = %raw,
                    "Unrecognized debug level; console output will report it"
                );
            }
        }
        if let Some(path) = lookup(FILE_ENV).filter(|p| !p.is_empty()) {
            self.file.path = PathBuf::from(path);
        }
    }
}
