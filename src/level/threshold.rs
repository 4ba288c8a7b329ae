//! Level and threshold types.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Severity tag carried by a single log request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Debug,
    Error,
    /// Any tag outside the recognized set, kept verbatim for rendering.
    Other(String),
}

impl Level {
    /// Parse a request level tag. Matching is case-sensitive.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "INFO" => Level::Info,
            "DEBUG" => Level::Debug,
            "ERROR" => Level::Error,
            other => Level::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
            Level::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Level::parse(s))
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Level::parse(&tag))
    }
}

/// Configured console verbosity.
///
/// `True` is the legacy boolean-style "log everything" value and sits above
/// `Debug`. Anything unrecognized becomes `Invalid`, keeping the raw text so
/// the diagnostic can quote it back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Threshold {
    #[default]
    True,
    Info,
    Debug,
    Error,
    Invalid(String),
}

impl Threshold {
    /// Parse a threshold value. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => Threshold::True,
            "info" => Threshold::Info,
            "debug" => Threshold::Debug,
            "error" => Threshold::Error,
            other => Threshold::Invalid(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Threshold::True => "true",
            Threshold::Info => "info",
            Threshold::Debug => "debug",
            Threshold::Error => "error",
            Threshold::Invalid(raw) => raw,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Threshold::Invalid(_))
    }

    /// Console line written in place of the record when the threshold is invalid.
    pub fn diagnostic(&self) -> String {
        format!(
            "The debug level {} is incorrect. Please choose true, error, debug or info.",
            self.as_str()
        )
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Threshold {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Threshold::parse(s))
    }
}

impl Serialize for Threshold {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Threshold {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Threshold::parse(&raw))
    }
}
