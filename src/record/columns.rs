//! Tab-separated column rendering with filler fields.
//!
//! Console output relies on 8-column tab stops. A value shorter than its
//! column width would leave the following fields one stop to the left, so the
//! renderer inserts one blank field after it.

use serde::{Deserialize, Serialize};

/// Minimum widths, in characters, below which a column gets a filler field.
///
/// A width of zero disables padding for that column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColumnPolicy {
    /// Width of the client IP column.
    pub ip_width: usize,

    /// Width of the URL column. An empty URL is always short.
    pub url_width: usize,
}

impl Default for ColumnPolicy {
    fn default() -> Self {
        Self {
            ip_width: 8,
            url_width: 8,
        }
    }
}

/// A single rendered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Text written to the line.
    pub text: String,
    /// Character count used for the width check. May differ from
    /// `text.len()` when the text carries color escapes.
    pub visible_len: usize,
    /// Minimum width; zero means never pad.
    pub min_width: usize,
}

impl Column {
    /// A column that is never padded.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let visible_len = text.chars().count();
        Self {
            text,
            visible_len,
            min_width: 0,
        }
    }

    /// A column padded when shorter than `min_width`.
    pub fn padded(text: impl Into<String>, min_width: usize) -> Self {
        Self {
            min_width,
            ..Self::plain(text)
        }
    }

    /// Replace the written text while keeping the width measured on the
    /// original value.
    pub fn styled(mut self, text: String) -> Self {
        self.text = text;
        self
    }

    pub fn needs_filler(&self) -> bool {
        self.visible_len < self.min_width
    }
}

/// Join columns with tabs, adding one empty field after each short column.
pub fn render(columns: &[Column]) -> String {
    let mut line = String::new();
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            line.push('\t');
        }
        line.push_str(&column.text);
        if column.needs_filler() {
            line.push('\t');
        }
    }
    line
}
