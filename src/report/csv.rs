//! CSV report implementation.
//!
//! One row per component occurrence, for spreadsheet use.

use super::{ReportData, Reporter};
use std::io::{self, Write};

/// CSV reporter implementation.
pub struct CsvReporter;

impl CsvReporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Reporter for CsvReporter {
    fn write_report<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "path,component,position")?;

        for entry in &data.entries {
            let path = Self::escape_field(&entry.path);
            for (position, name) in entry.components.iter().enumerate() {
                writeln!(
                    writer,
                    "{},{},{}",
                    path,
                    Self::escape_field(name),
                    position + 1
                )?;
            }
        }

        Ok(())
    }
}
