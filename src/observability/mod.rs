//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! dispatcher / config loader produce:
//!     → tracing events (decisions at debug, I/O failures at warn)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, filtered by RUST_LOG)
//! ```
//!
//! # Design Decisions
//! - Diagnostics go to stderr so they never interleave with the console sink
//! - The library only emits events; installing a subscriber is the host's call

pub mod logging;
