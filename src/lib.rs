//! Leveled access logger.
//!
//! Every request is appended to a log file as a tab-delimited, timestamped
//! record. Whether it also reaches the console depends on the configured
//! threshold (`true`, `debug`, `info`, `error`).
//!
//! ```text
//!   LogRequest ──▶ level::resolve ──▶ record::RecordFormatter
//!                                          │
//!                        ┌─────────────────┴──────────────┐
//!                        ▼                                ▼
//!                 sink::FileSink (always)       sink::ConsoleSink (filtered)
//! ```

pub mod clock;
pub mod config;
pub mod dispatcher;
pub mod level;
pub mod observability;
pub mod record;
pub mod sink;

pub use config::LoggerConfig;
pub use dispatcher::LogDispatcher;
pub use level::{Level, Threshold};
pub use record::LogRequest;
