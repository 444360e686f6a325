//! Rendering of component maps.
//!
//! This module provides reporters for writing a component map in various
//! formats: plain text, JSON, CSV, and Markdown.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod text;

use crate::analysis::{ComponentMap, Mode};
use std::io::{self, Write};
use std::path::Path;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `path: [Names]` line per file
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - one row per component occurrence
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Unknown output format: '{}'. Valid formats: text, json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// One file's line in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Path shown to the user, relative to the scanned root
    pub path: String,
    /// Component names in text order
    pub components: Vec<String>,
}

/// Data container for report operations.
#[derive(Debug, Clone)]
pub struct ReportData {
    /// Which side of the relationship was mapped
    pub mode: Mode,
    /// Root directory as given by the user
    pub root: String,
    /// Files with at least one component
    pub entries: Vec<ReportEntry>,
}

impl ReportData {
    /// Create report data from a component map.
    pub fn new(mode: Mode, root: &Path, components: &ComponentMap) -> Self {
        let entries = components
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(path, names)| ReportEntry {
                path: display_path(root, path),
                components: names.clone(),
            })
            .collect();

        Self {
            mode,
            root: root.display().to_string(),
            entries,
        }
    }

    /// Number of files in the report
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of component occurrences in the report
    pub fn component_count(&self) -> usize {
        self.entries.iter().map(|e| e.components.len()).sum()
    }
}

/// Path relative to `root`, with `/` separators.
///
/// A root that is itself a file displays as its file name.
pub fn display_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

/// Trait for reporters.
pub trait Reporter {
    /// Write the report to the given writer.
    fn write_report<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()>;
}

/// Write a report in the specified format.
pub fn write_report<W: Write>(
    format: OutputFormat,
    data: &ReportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => text::TextReporter.write_report(data, writer),
        OutputFormat::Json => json::JsonReporter.write_report(data, writer),
        OutputFormat::Csv => csv::CsvReporter.write_report(data, writer),
        OutputFormat::Markdown => markdown::MarkdownReporter.write_report(data, writer),
    }
}

/// Render a report to a string.
pub fn report_to_string(format: OutputFormat, data: &ReportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_report(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
pub(crate) fn sample_data() -> ReportData {
    let root = Path::new("/work/app");
    let mut components = ComponentMap::new();
    components.insert(
        root.join("src/Button.tsx"),
        vec!["Button".to_string(), "IconButton".to_string()],
    );
    components.insert(root.join("src/App.js"), vec!["App".to_string()]);
    ReportData::new(Mode::Export, root, &components)
}
