//! Append-only log file.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::sink::FileSink;

/// Appends records to a file, creating it (and its parent directories) on
/// first use.
#[derive(Debug, Clone)]
pub struct AppendFile {
    path: PathBuf,
}

impl AppendFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileSink for AppendFile {
    fn exists(&self) -> io::Result<bool> {
        self.path.try_exists()
    }

    fn append(&mut self, record: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.as_bytes())
    }
}
