//! Standard output console.

use std::io::{self, Write};

use crate::sink::ConsoleSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl ConsoleSink for Stdout {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }
}
