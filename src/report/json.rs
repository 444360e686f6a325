//! JSON report implementation.
//!
//! Writes the component map in JSON format for machine-readable output.

use super::{ReportData, Reporter};
use serde::Serialize;
use std::io::{self, Write};

/// JSON reporter implementation.
pub struct JsonReporter;

/// Serializable file entry for JSON output.
#[derive(Serialize)]
struct JsonFile<'a> {
    path: &'a str,
    components: &'a [String],
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    components: usize,
}

/// Root JSON report structure.
#[derive(Serialize)]
struct JsonReport<'a> {
    mode: String,
    root: &'a str,
    summary: JsonSummary,
    files: Vec<JsonFile<'a>>,
}

impl Reporter for JsonReporter {
    fn write_report<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        let report = JsonReport {
            mode: data.mode.to_string(),
            root: &data.root,
            summary: JsonSummary {
                files: data.file_count(),
                components: data.component_count(),
            },
            files: data
                .entries
                .iter()
                .map(|e| JsonFile {
                    path: &e.path,
                    components: &e.components,
                })
                .collect(),
        };

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ComponentMap, Mode};
    use crate::report::sample_data;
    use std::path::Path;

    fn render(data: &ReportData) -> serde_json::Value {
        let mut output = Vec::new();
        JsonReporter.write_report(data, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_json_report_basic() {
        let parsed = render(&sample_data());

        assert_eq!(parsed["mode"], "export");
        assert_eq!(parsed["root"], "/work/app");
        assert_eq!(parsed["summary"]["files"], 2);
        assert_eq!(parsed["summary"]["components"], 3);
    }

    #[test]
    fn test_json_report_files_list() {
        let parsed = render(&sample_data());

        let files = parsed["files"].as_array().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[1]["path"], "src/Button.tsx");
        assert_eq!(files[1]["components"][0], "Button");
        assert_eq!(files[1]["components"][1], "IconButton");
    }

    #[test]
    fn test_json_report_empty() {
        let data = ReportData::new(Mode::Import, Path::new("src"), &ComponentMap::new());
        let parsed = render(&data);

        assert_eq!(parsed["mode"], "import");
        assert!(parsed["files"].as_array().unwrap().is_empty());
    }
}
