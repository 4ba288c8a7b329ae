//! Access-log records.
//!
//! # Data Flow
//! ```text
//! LogRequest (all fields optional)
//!     → formatter.rs (missing fields → "")
//!         → file record:    ts \t ip \t method \t url \t level \t message \n
//!         → console line:   ts \t columns.rs padded fields (level colored)
//! ```
//!
//! # Design Decisions
//! - Formatting is pure; the timestamp is passed in by the caller
//! - Padding is driven by a rule table (ColumnPolicy), not string splicing
//! - The file record keeps the fixed six-field layout unless alignment is
//!   switched on in configuration

pub mod columns;
pub mod formatter;
pub mod request;

pub use columns::{Column, ColumnPolicy};
pub use formatter::{FormattedRecord, RecordFormatter};
pub use request::LogRequest;
