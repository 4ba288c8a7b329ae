//! Per-call orchestration: resolve, format, append, print.
//!
//! # Data Flow
//! ```text
//! log(request)
//!     → level::resolve(threshold, request.level)
//!     → RecordFormatter::format(request, clock.timestamp())
//!     → file.exists()           (advisory)
//!     → file.append(record)     (every call)
//!     → console.write_line(...) (diagnostic | record | nothing)
//! ```
//!
//! # Design Decisions
//! - Collaborator I/O failures are reported through `tracing` and swallowed
//! - The append is attempted on every call regardless of earlier failures
//! - Calls are serialized by `&mut self`; hosts sharing a dispatcher across
//!   threads wrap it in a `Mutex`

use crate::clock::{Clock, SystemClock};
use crate::config::LoggerConfig;
use crate::level::{resolve, Threshold};
use crate::record::{LogRequest, RecordFormatter};
use crate::sink::{AppendFile, ConsoleSink, FileSink, Stdout};

/// Leveled access logger writing to a file and the console.
pub struct LogDispatcher<F, C, K> {
    threshold: Threshold,
    formatter: RecordFormatter,
    file: F,
    console: C,
    clock: K,
    append_failures: u64,
}

impl LogDispatcher<AppendFile, Stdout, SystemClock> {
    /// Dispatcher writing to the configured file and stdout.
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(
            config,
            AppendFile::new(&config.file.path),
            Stdout,
            SystemClock::new(&config.console.timestamp_format),
        )
    }
}

impl<F, C, K> LogDispatcher<F, C, K>
where
    F: FileSink,
    C: ConsoleSink,
    K: Clock,
{
    pub fn new(config: &LoggerConfig, file: F, console: C, clock: K) -> Self {
        let formatter = RecordFormatter::new(config.columns)
            .with_color(config.console.color)
            .with_aligned_file_columns(config.file.align_columns);

        Self {
            threshold: config.threshold.clone(),
            formatter,
            file,
            console,
            clock,
            append_failures: 0,
        }
    }

    /// Record one request.
    ///
    /// Always appends exactly one record to the file sink and writes at most
    /// one line to the console sink.
    pub fn log(&mut self, request: &LogRequest) {
        let decision = resolve(&self.threshold, request.level.as_ref());
        let record = self.formatter.format(request, &self.clock.timestamp());

        tracing::debug!(
            threshold = %self.threshold,
            level = request.level_tag(),
            emit = decision.emit,
            threshold_valid = decision.threshold_valid,
            "Resolved console decision"
        );

        match self.file.exists() {
            Ok(false) => tracing::debug!("Log file missing; append will create it"),
            Ok(true) => {}
            Err(e) => tracing::warn!(error = %e, "Failed to probe log file"),
        }

        if let Err(e) = self.file.append(&record.file_record) {
            self.append_failures += 1;
            tracing::warn!(
                error = %e,
                failures = self.append_failures,
                "Failed to append log record"
            );
        }

        let line = if !decision.threshold_valid {
            Some(self.threshold.diagnostic())
        } else if decision.emit {
            Some(record.console_message)
        } else {
            None
        };

        if let Some(line) = line {
            if let Err(e) = self.console.write_line(&line) {
                tracing::warn!(error = %e, "Failed to write console line");
            }
        }
    }

    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    /// Number of appends that failed since construction.
    pub fn append_failures(&self) -> u64 {
        self.append_failures
    }

    pub fn file_sink(&self) -> &F {
        &self.file
    }

    pub fn console_sink(&self) -> &C {
        &self.console
    }

    /// Take the sinks back, e.g. to inspect test doubles.
    pub fn into_sinks(self) -> (F, C) {
        (self.file, self.console)
    }
}
