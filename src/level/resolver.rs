//! Threshold × level → console decision.

use crate::level::threshold::{Level, Threshold};

/// Outcome of resolving one request against the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Write the formatted record to the console.
    pub emit: bool,
    /// False when the threshold is unrecognized; the console then gets the
    /// diagnostic line instead of the record.
    pub threshold_valid: bool,
}

impl Decision {
    fn valid(emit: bool) -> Self {
        Self {
            emit,
            threshold_valid: true,
        }
    }

    fn invalid() -> Self {
        Self {
            emit: false,
            threshold_valid: false,
        }
    }
}

/// Decide whether a request at `level` reaches the console.
///
/// | threshold | INFO | DEBUG | ERROR / absent / other |
/// |-----------|------|-------|------------------------|
/// | true      | emit | emit  | emit                   |
/// | debug     | emit | emit  | emit                   |
/// | info      | emit | -     | emit                   |
/// | error     | -    | -     | emit                   |
pub fn resolve(threshold: &Threshold, level: Option<&Level>) -> Decision {
    let level = match level {
        Some(Level::Info) => Level::Info,
        Some(Level::Debug) => Level::Debug,
        // absent and unrecognized tags share ERROR's treatment
        _ => Level::Error,
    };

    match (threshold, level) {
        (Threshold::Invalid(_), _) => Decision::invalid(),
        (Threshold::True | Threshold::Debug, _) => Decision::valid(true),
        (Threshold::Info, Level::Debug) => Decision::valid(false),
        (Threshold::Info, _) => Decision::valid(true),
        (Threshold::Error, Level::Error) => Decision::valid(true),
        (Threshold::Error, _) => Decision::valid(false),
    }
}
