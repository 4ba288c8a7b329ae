//! Shared sinks and fixtures for integration tests.

use std::cell::Cell;
use std::io;

use access_logger::clock::FixedClock;
use access_logger::sink::{ConsoleSink, FileSink};
use access_logger::{Level, LogDispatcher, LogRequest, LoggerConfig, Threshold};

pub const TS: &str = "2024-05-01 12:00:00.000";

/// File sink that keeps records in memory and counts existence probes.
#[derive(Default)]
pub struct RecordingFile {
    pub exists_calls: Cell<usize>,
    pub records: Vec<String>,
}

impl FileSink for RecordingFile {
    fn exists(&self) -> io::Result<bool> {
        self.exists_calls.set(self.exists_calls.get() + 1);
        Ok(!self.records.is_empty())
    }

    fn append(&mut self, record: &str) -> io::Result<()> {
        self.records.push(record.to_string());
        Ok(())
    }
}

/// Console sink that keeps lines in memory.
#[derive(Default)]
pub struct RecordingConsole {
    pub lines: Vec<String>,
}

impl ConsoleSink for RecordingConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Everything after the first tab.
#[allow(dead_code)]
pub fn after_first_tab(line: &str) -> &str {
    line.split_once('\t').map(|(_, rest)| rest).unwrap_or(line)
}

pub fn config(threshold: &str) -> LoggerConfig {
    let mut config = LoggerConfig::default();
    config.threshold = Threshold::parse(threshold);
    config.console.color = false;
    config
}

/// Run `requests` through a dispatcher and hand back the sinks.
#[allow(dead_code)]
pub fn dispatch(
    config: &LoggerConfig,
    requests: &[LogRequest],
) -> (RecordingFile, RecordingConsole) {
    let mut dispatcher = LogDispatcher::new(
        config,
        RecordingFile::default(),
        RecordingConsole::default(),
        FixedClock::new(TS),
    );
    for request in requests {
        dispatcher.log(request);
    }
    dispatcher.into_sinks()
}

/// INFO, DEBUG and ERROR requests; the ERROR one has no method.
#[allow(dead_code)]
pub fn level_requests() -> Vec<LogRequest> {
    vec![
        LogRequest::new("Sent an INFO log message to the console.")
            .with_method("METHOD")
            .with_url("http://www.url.com")
            .with_ip("IP ADDRESS")
            .with_level(Level::Info),
        LogRequest::new("Sent a DEBUG log message to the console.")
            .with_method("METHOD")
            .with_url("http://www.url.com")
            .with_ip("IP ADDRESS")
            .with_level(Level::Debug),
        LogRequest::new("Sent a ERROR log message to the console.")
            .with_url("http://www.url.com")
            .with_ip("IP ADDRESS")
            .with_level(Level::Error),
    ]
}
