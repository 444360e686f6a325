//! Errors surfaced by the component mapping engine.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating or reading source files.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The directory tree could not be walked. Fatal for the whole run.
    #[error("Failed to walk {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A single source file could not be read. Recoverable.
    #[error("Failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    /// The path the error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            AnalysisError::Traversal { path, .. } | AnalysisError::FileRead { path, .. } => path,
        }
    }

    /// Returns true if this error should abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AnalysisError::Traversal { .. })
    }
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
