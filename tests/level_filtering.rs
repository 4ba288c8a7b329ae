//! Console filtering by threshold.

use access_logger::{Level, LogRequest};

mod common;

use common::{after_first_tab, config, dispatch, level_requests, TS};

fn expected_file_records() -> Vec<String> {
    level_requests()
        .iter()
        .map(|r| {
            format!(
                "{TS}\t{}\t{}\t{}\t{}\t{}\n",
                r.ip(),
                r.method(),
                r.url(),
                r.level_tag(),
                r.message()
            )
        })
        .collect()
}

#[test]
fn test_threshold_true_logs_all_levels() {
    let (file, console) = dispatch(&config("true"), &level_requests());

    assert_eq!(file.records, expected_file_records());
    assert_eq!(console.lines.len(), 3);
    assert_eq!(file.exists_calls.get(), 3);
}

#[test]
fn test_threshold_debug_logs_all_levels() {
    let (file, console) = dispatch(&config("debug"), &level_requests());

    assert_eq!(file.records, expected_file_records());
    assert_eq!(console.lines.len(), 3);
    assert_eq!(file.exists_calls.get(), 3);
}

#[test]
fn test_threshold_info_skips_debug() {
    let (file, console) = dispatch(&config("info"), &level_requests());

    assert_eq!(file.records.len(), 3);
    assert_eq!(console.lines.len(), 2);
    assert!(after_first_tab(&console.lines[0])
        .ends_with("\tINFO\tSent an INFO log message to the console."));
    assert!(after_first_tab(&console.lines[1])
        .ends_with("\tERROR\tSent a ERROR log message to the console."));
}

#[test]
fn test_threshold_error_logs_error_only() {
    let (file, console) = dispatch(&config("error"), &level_requests());

    assert_eq!(file.records, expected_file_records());
    assert_eq!(console.lines.len(), 1);
    assert!(console.lines[0].contains("Sent a ERROR log message"));
    assert_eq!(file.exists_calls.get(), 3);
}

#[test]
fn test_invalid_threshold_reports_every_call() {
    let (file, console) = dispatch(&config("invalid"), &level_requests());

    assert_eq!(file.records.len(), 3);
    assert_eq!(file.exists_calls.get(), 3);
    assert_eq!(console.lines.len(), 3);
    for line in &console.lines {
        assert_eq!(
            after_first_tab(line),
            "The debug level invalid is incorrect. Please choose true, error, debug or info."
        );
    }
}

#[test]
fn test_missing_level_behaves_like_error() {
    let without = LogRequest::new("no level").with_ip("IP ADDRESS");
    let with = without.clone().with_level(Level::Error);

    for threshold in ["true", "debug", "info", "error"] {
        let (_, a) = dispatch(&config(threshold), &[without.clone()]);
        let (_, b) = dispatch(&config(threshold), &[with.clone()]);
        assert_eq!(a.lines.len(), b.lines.len(), "threshold {threshold}");
        assert_eq!(a.lines.len(), 1, "threshold {threshold}");
    }
}

#[test]
fn test_appends_match_calls_for_every_threshold() {
    let mut requests = level_requests();
    requests.push(LogRequest::default());

    for threshold in ["true", "debug", "info", "error", "invalid", ""] {
        let (file, _) = dispatch(&config(threshold), &requests);
        assert_eq!(file.records.len(), requests.len(), "threshold {threshold:?}");
    }
}
