//! Incoming log request.

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// One log call as supplied by the host.
///
/// Every field may be absent. Absent fields render as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogRequest {
    /// Free-text message. Also accepted as `logMsg`.
    #[serde(alias = "logMsg")]
    pub message: Option<String>,

    /// HTTP method of the logged access.
    pub method: Option<String>,

    /// Accessed URL.
    pub url: Option<String>,

    /// Client IP address.
    pub ip: Option<String>,

    /// Severity tag.
    pub level: Option<Level>,
}

impl LogRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    pub fn method(&self) -> &str {
        self.method.as_deref().unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn ip(&self) -> &str {
        self.ip.as_deref().unwrap_or_default()
    }

    pub fn level_tag(&self) -> &str {
        self.level.as_ref().map(Level::as_str).unwrap_or_default()
    }
}
