//! Record rendering for the file and console sinks.

use std::borrow::Cow;

use colored::Colorize;

use crate::level::Level;
use crate::record::columns::{self, Column, ColumnPolicy};
use crate::record::request::LogRequest;

/// Both renderings of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRecord {
    /// Line appended to the log file, newline-terminated.
    pub file_record: String,
    /// Line written to the console, without trailing newline.
    pub console_message: String,
}

/// Renders requests into file records and console lines.
#[derive(Debug, Clone, Default)]
pub struct RecordFormatter {
    columns: ColumnPolicy,
    color: bool,
    align_file_columns: bool,
}

impl RecordFormatter {
    pub fn new(columns: ColumnPolicy) -> Self {
        Self {
            columns,
            color: false,
            align_file_columns: false,
        }
    }

    /// Color the level column of console lines.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Use the padded console layout for file records too.
    pub fn with_aligned_file_columns(mut self, align: bool) -> Self {
        self.align_file_columns = align;
        self
    }

    pub fn format(&self, request: &LogRequest, timestamp: &str) -> FormattedRecord {
        let file_fields = if self.align_file_columns {
            columns::render(&self.columns_for(request, false))
        } else {
            fixed_fields(request)
        };

        FormattedRecord {
            file_record: format!("{timestamp}\t{file_fields}\n"),
            console_message: format!("{timestamp}\t{}", self.console_fields(request)),
        }
    }

    /// Console columns without the timestamp prefix.
    pub fn console_fields(&self, request: &LogRequest) -> String {
        columns::render(&self.columns_for(request, self.color))
    }

    fn columns_for(&self, request: &LogRequest, color: bool) -> Vec<Column> {
        let mut level = Column::plain(clean(request.level_tag()));
        if color {
            if let Some(tag) = &request.level {
                level = level.styled(paint(tag));
            }
        }

        vec![
            Column::padded(clean(request.ip()), self.columns.ip_width),
            Column::plain(clean(request.method())),
            Column::padded(clean(request.url()), self.columns.url_width),
            level,
            Column::plain(clean(request.message())),
        ]
    }
}

/// Six-field layout without fillers: ip, method, url, level, message.
pub fn fixed_fields(request: &LogRequest) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        clean(request.ip()),
        clean(request.method()),
        clean(request.url()),
        clean(request.level_tag()),
        clean(request.message())
    )
}

/// Replace tabs and line breaks with spaces so a field can neither shift
/// columns nor split the record across lines.
pub fn clean(field: &str) -> Cow<'_, str> {
    if field.contains(['\t', '\n', '\r']) {
        Cow::Owned(field.replace(['\t', '\n', '\r'], " "))
    } else {
        Cow::Borrowed(field)
    }
}

fn paint(level: &Level) -> String {
    match level {
        Level::Info => level.as_str().green().to_string(),
        Level::Debug => level.as_str().blue().to_string(),
        Level::Error => level.as_str().red().bold().to_string(),
        Level::Other(tag) => clean(tag).into_owned(),
    }
}
