//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (DEBUG, ACCESS_LOG_FILE)
//!     → validation.rs (semantic checks)
//!     → LoggerConfig (validated, immutable)
//!     → handed to LogDispatcher at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the dispatcher never reads the environment
//! - All fields have defaults to allow minimal configs
//! - An unrecognized threshold is accepted here and reported per call

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_with, ConfigError};
pub use schema::ConsoleConfig;
pub use schema::FileConfig;
pub use schema::LoggerConfig;
