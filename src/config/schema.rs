//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_TIMESTAMP_FORMAT;
use crate::level::Threshold;
use crate::record::ColumnPolicy;

/// Root configuration for the access logger.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// Console verbosity (true, debug, info, error).
    pub threshold: Threshold,

    /// Log file settings.
    pub file: FileConfig,

    /// Console settings.
    pub console: ConsoleConfig,

    /// Column padding rules.
    pub columns: ColumnPolicy,
}

impl LoggerConfig {
    /// Defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }
}

/// Log file configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FileConfig {
    /// Path of the append-only log file.
    pub path: PathBuf,

    /// Pad file records like console lines.
    pub align_columns: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("logs/access.log"),
            align_columns: false,
        }
    }
}

/// Console configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Color the level column.
    pub color: bool,

    /// `strftime` layout of the timestamp column.
    pub timestamp_format: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}
