//! End-to-end runs against a real log file.

use std::fs;

use access_logger::clock::FixedClock;
use access_logger::config::load_config_with;
use access_logger::sink::AppendFile;
use access_logger::{Level, LogDispatcher, LogRequest};

mod common;

use common::{config, RecordingConsole};

#[test]
fn test_records_accumulate_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("access.log");

    let mut dispatcher = LogDispatcher::new(
        &config("error"),
        AppendFile::new(&path),
        RecordingConsole::default(),
        FixedClock::new("T"),
    );

    dispatcher.log(&LogRequest::new("first").with_ip("1.2.3.4").with_level(Level::Info));
    dispatcher.log(&LogRequest::new("second").with_method("GET").with_level(Level::Error));

    assert_eq!(dispatcher.append_failures(), 0);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "T\t1.2.3.4\t\t\tINFO\tfirst\nT\t\tGET\t\tERROR\tsecond\n"
    );

    let (_, console) = dispatcher.into_sinks();
    assert_eq!(console.lines.len(), 1);
}

#[test]
fn test_unwritable_file_keeps_console_working() {
    let dir = tempfile::tempdir().unwrap();

    // a directory cannot be opened for appending
    let mut dispatcher = LogDispatcher::new(
        &config("true"),
        AppendFile::new(dir.path()),
        RecordingConsole::default(),
        FixedClock::new("T"),
    );

    dispatcher.log(&LogRequest::new("one"));
    dispatcher.log(&LogRequest::new("two"));

    assert_eq!(dispatcher.append_failures(), 2);
    assert_eq!(dispatcher.console_sink().lines.len(), 2);
}

#[test]
fn test_config_file_drives_dispatcher() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("app.log");
    let config_path = dir.path().join("access-logger.toml");
    fs::write(
        &config_path,
        format!(
            "threshold = \"info\"\n[file]\npath = {:?}\n[console]\ncolor = false\n",
            log_path.to_string_lossy()
        ),
    )
    .unwrap();

    let config = load_config_with(&config_path, |_| None).unwrap();
    assert_eq!(config.file.path, log_path);

    let mut dispatcher = LogDispatcher::new(
        &config,
        AppendFile::new(&config.file.path),
        RecordingConsole::default(),
        FixedClock::new("T"),
    );
    dispatcher.log(&LogRequest::new("hidden").with_level(Level::Debug));
    dispatcher.log(&LogRequest::new("shown").with_level(Level::Info));

    let contents = fs::read_to_string(&log_path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert_eq!(dispatcher.console_sink().lines, vec!["T\t\t\t\t\t\tINFO\tshown".to_string()]);
}

#[test]
fn test_unrenderable_timestamp_layout_does_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("access.log");

    let mut config = config("error");
    config.file.path = path.clone();
    config.console.timestamp_format = "%Y-%Q".to_string();

    let mut dispatcher = LogDispatcher::from_config(&config);
    dispatcher.log(&LogRequest::new("hello").with_level(Level::Info));

    assert_eq!(dispatcher.file_sink().path(), path.as_path());
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.ends_with("\t\t\t\tINFO\thello\n"));
}
