//! Severity levels and console verbosity thresholds.
//!
//! # Data Flow
//! ```text
//! DEBUG env / config file
//!     → Threshold::parse (never fails, unknown text → Invalid)
//!     → LoggerConfig (immutable for the process lifetime)
//!
//! per request:
//!     LogRequest.level (Option<Level>)
//!     → resolver::resolve(&Threshold, level)
//!     → Decision { emit, threshold_valid }
//! ```
//!
//! # Design Decisions
//! - Threshold text is compared case-sensitively
//! - An invalid threshold is not a load-time error; it is reported on every call
//! - A missing or unrecognized request level behaves like ERROR

pub mod resolver;
pub mod threshold;

pub use resolver::{resolve, Decision};
pub use threshold::{Level, Threshold};
