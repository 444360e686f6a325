//! Source file discovery.
//!
//! Walks a directory tree and collects the script files the extractors
//! understand. Only the extension is inspected; file contents are never
//! opened here.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::error::{AnalysisError, AnalysisResult};

/// Extensions of the files worth scanning: JSX-capable TypeScript and plain JavaScript.
pub const SOURCE_EXTENSIONS: [&str; 2] = ["tsx", "js"];

/// Returns true if the path has one of the [`SOURCE_EXTENSIONS`].
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Recursively finds source files under a root directory.
#[derive(Debug, Clone, Default)]
pub struct FileLocator {
    skip_dirs: Vec<String>,
}

impl FileLocator {
    /// Create a locator that visits every directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a locator that does not descend into directories with these names.
    pub fn with_skipped_dirs<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skip_dirs: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Directory names this locator skips.
    pub fn skipped_dirs(&self) -> &[String] {
        &self.skip_dirs
    }

    /// Walk `root` and return every source file below it, sorted by path.
    ///
    /// Any walk failure (missing root, unreadable directory) aborts the
    /// whole walk with [`AnalysisError::Traversal`].
    pub fn locate(&self, root: &Path) -> AnalysisResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_skipped_dir(e))
        {
            let entry = entry.map_err(|source| AnalysisError::Traversal {
                path: source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf()),
                source,
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            if is_source_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        debug!(root = %root.display(), count = files.len(), "located source files");
        Ok(files)
    }

    fn is_skipped_dir(&self, entry: &DirEntry) -> bool {
        // Never skip the root itself, whatever its name.
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        self.skip_dirs.iter().any(|skip| skip == name.as_ref())
    }
}

/// Find every source file under `root`.
pub fn find_source_files(root: &Path) -> AnalysisResult<Vec<PathBuf>> {
    FileLocator::new().locate(root)
}
