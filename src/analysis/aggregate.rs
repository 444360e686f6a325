//! Applying an extractor across a file set.
//!
//! The aggregator owns the try/skip/record loop: each file is extracted
//! once, files without matches are left out of the map, and files that
//! cannot be read are reported and skipped without stopping the batch.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::{AnalysisError, AnalysisResult};

/// Mapping from file path to the component names found in it, in text order.
pub type ComponentMap = BTreeMap<PathBuf, Vec<String>>;

/// Text-to-names seam shared by the export and import extractors.
pub trait ComponentExtractor {
    /// Extract component names from source text, in the order they appear.
    fn extract(&self, source: &str) -> Vec<String>;

    /// Read a file and extract component names from its contents.
    fn extract_file(&self, path: &Path) -> AnalysisResult<Vec<String>> {
        let bytes = fs::read(path).map_err(|source| AnalysisError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.extract(&String::from_utf8_lossy(&bytes)))
    }
}

/// Result of running an extractor over a set of files.
#[derive(Debug, Default)]
pub struct Aggregation {
    /// Files with at least one match.
    pub components: ComponentMap,
    /// Files that could not be read.
    pub failures: Vec<AnalysisError>,
}

impl Aggregation {
    /// Number of files that contributed components.
    pub fn file_count(&self) -> usize {
        self.components.len()
    }

    /// Total number of component names across all files, duplicates included.
    pub fn component_count(&self) -> usize {
        self.components.values().map(Vec::len).sum()
    }

    /// Returns true if no file contributed any component.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Run `extractor` over every file and collect the non-empty results.
pub fn aggregate<E>(extractor: &E, files: &[PathBuf]) -> Aggregation
where
    E: ComponentExtractor + ?Sized,
{
    let mut aggregation = Aggregation::default();

    for file in files {
        match extractor.extract_file(file) {
            Ok(names) if names.is_empty() => {
                debug!(file = %file.display(), "no components matched");
            }
            Ok(names) => {
                aggregation.components.insert(file.clone(), names);
            }
            Err(e) => {
                warn!(file = %file.display(), error = %e, "skipping unreadable file");
                aggregation.failures.push(e);
            }
        }
    }

    info!(
        scanned = files.len(),
        matched = aggregation.file_count(),
        failed = aggregation.failures.len(),
        "aggregation complete"
    );

    aggregation
}
