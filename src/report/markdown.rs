//! Markdown report implementation.

use super::{ReportData, Reporter};
use crate::analysis::Mode;
use std::io::{self, Write};

/// Markdown reporter implementation.
pub struct MarkdownReporter;

impl Reporter for MarkdownReporter {
    fn write_report<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        let (title, verb) = match data.mode {
            Mode::Export => ("Exported Components", "exported"),
            Mode::Import => ("Imported Components", "imported"),
        };

        writeln!(writer, "# {}", title)?;
        writeln!(writer)?;
        writeln!(writer, "**Root:** `{}`", data.root)?;
        writeln!(writer)?;
        writeln!(
            writer,
            "{} components {} across {} files.",
            data.component_count(),
            verb,
            data.file_count()
        )?;
        writeln!(writer)?;

        if data.entries.is_empty() {
            writeln!(writer, "*No components found.*")?;
            return Ok(());
        }

        writeln!(writer, "| File | Components |")?;
        writeln!(writer, "|------|------------|")?;
        for entry in &data.entries {
            writeln!(
                writer,
                "| `{}` | {} |",
                entry.path,
                entry.components.join(", ")
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ComponentMap;
    use crate::report::sample_data;
    use std::path::Path;

    fn render(data: &ReportData) -> String {
        let mut output = Vec::new();
        MarkdownReporter.write_report(data, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_markdown_report_table() {
        let md = render(&sample_data());

        assert!(md.starts_with("# Exported Components\n"));
        assert!(md.contains("3 components exported across 2 files."));
        assert!(md.contains("| File | Components |"));
        assert!(md.contains("| `src/Button.tsx` | Button, IconButton |"));
    }

    #[test]
    fn test_markdown_report_empty() {
        let data = ReportData::new(Mode::Import, Path::new("src"), &ComponentMap::new());
        let md = render(&data);

        assert!(md.starts_with("# Imported Components\n"));
        assert!(md.contains("*No components found.*"));
        assert!(!md.contains("| File |"));
    }
}
