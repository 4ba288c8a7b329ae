//! Timestamp source for records.

use chrono::format::{Item, StrftimeItems};
use chrono::Local;

/// Default `strftime` layout for record timestamps.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Supplies the leading timestamp column.
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// True when chrono can render every specifier in `format`.
pub fn is_valid_layout(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Local wall-clock time.
#[derive(Debug, Clone)]
pub struct SystemClock {
    format: String,
}

impl SystemClock {
    /// An unrenderable layout is replaced by [`DEFAULT_TIMESTAMP_FORMAT`].
    pub fn new(format: impl Into<String>) -> Self {
        let format = format.into();
        if is_valid_layout(&format) {
            return Self { format };
        }

        tracing::warn!(
            format = %format,
            fallback = DEFAULT_TIMESTAMP_FORMAT,
            "Invalid timestamp layout; using default"
        );
        Self::default()
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        Local::now().format(&self.format).to_string()
    }
}

/// Always returns the same timestamp.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
