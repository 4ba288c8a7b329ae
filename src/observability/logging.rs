//! Diagnostic logging setup.
//!
//! # Responsibilities
//! - Install the global tracing subscriber for the host binary
//! - Honour `RUST_LOG`, falling back to a caller-supplied directive
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Writes to stderr; stdout belongs to the console sink

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "access_logger=info";

/// Install the global subscriber. Returns false if one was already set.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}
