//! Plain text report.
//!
//! One line per file: `<path>: [Name Name ...]`.

use super::{ReportData, Reporter};
use std::io::{self, Write};

/// Text reporter implementation.
pub struct TextReporter;

impl Reporter for TextReporter {
    fn write_report<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        for entry in &data.entries {
            writeln!(writer, "{}: [{}]", entry.path, entry.components.join(" "))?;
        }
        Ok(())
    }
}
