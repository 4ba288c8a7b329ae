//! Output sinks.
//!
//! # Responsibilities
//! - Append file records to the access log (`file.rs`)
//! - Write console lines to stdout (`console.rs`)
//!
//! # Design Decisions
//! - Sinks are traits so the dispatcher can be driven by in-memory doubles
//! - Each record is handed over as one string and written with one call, so
//!   a record is never split across writes

pub mod console;
pub mod file;

use std::io;

pub use console::Stdout;
pub use file::AppendFile;

/// Destination of file records.
pub trait FileSink {
    /// Probe whether the destination exists. Advisory only.
    fn exists(&self) -> io::Result<bool>;

    /// Append one newline-terminated record.
    fn append(&mut self, record: &str) -> io::Result<()>;
}

/// Destination of console lines.
pub trait ConsoleSink {
    /// Write one line; the sink adds the newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<T: FileSink + ?Sized> FileSink for &mut T {
    fn exists(&self) -> io::Result<bool> {
        (**self).exists()
    }

    fn append(&mut self, record: &str) -> io::Result<()> {
        (**self).append(record)
    }
}

impl<T: ConsoleSink + ?Sized> ConsoleSink for &mut T {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}
