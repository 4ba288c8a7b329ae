//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject an empty log file path
//! - Reject timestamp layouts chrono cannot render
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ValidationError>>
//! - The threshold is never rejected here

use thiserror::Error;

use crate::clock::is_valid_layout;
use crate::config::schema::LoggerConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("file.path must not be empty")]
    EmptyFilePath,

    #[error("console.timestamp_format must not be empty")]
    EmptyTimestampFormat,

    #[error("console.timestamp_format is not a valid strftime layout: {0}")]
    InvalidTimestampFormat(String),
}

pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.file.path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyFilePath);
    }

    let format = &config.console.timestamp_format;
    if format.is_empty() {
        errors.push(ValidationError::EmptyTimestampFormat);
    } else if !is_valid_layout(format) {
        errors.push(ValidationError::InvalidTimestampFormat(format.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
