//! One-call entry point: locate, extract and aggregate.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use super::aggregate::{aggregate, Aggregation, ComponentExtractor};
use super::error::AnalysisResult;
use super::exports::ExportExtractor;
use super::imports::{ImportCapture, ImportExtractor};
use super::locator::FileLocator;

/// Which side of the component relationship to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Components each file exposes.
    Export,
    /// Components each file consumes from local modules.
    Import,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "export" => Ok(Mode::Export),
            "import" => Ok(Mode::Import),
            _ => Err(format!(
                "Unknown mode: '{}'. Valid modes: export, import",
                s
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Export => write!(f, "export"),
            Mode::Import => write!(f, "import"),
        }
    }
}

/// Everything a scan needs besides the root path.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub mode: Mode,
    /// Export mode only: match `export default ...` statements exclusively.
    pub require_default: bool,
    /// Import mode only: names reported per import statement.
    pub import_capture: ImportCapture,
    /// Directory names the locator does not descend into.
    pub skip_dirs: Vec<String>,
}

impl ScanOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            require_default: false,
            import_capture: ImportCapture::default(),
            skip_dirs: Vec::new(),
        }
    }

    /// Build the extractor selected by the mode.
    pub fn extractor(&self) -> Box<dyn ComponentExtractor> {
        match self.mode {
            Mode::Export => Box::new(ExportExtractor::new(self.require_default)),
            Mode::Import => Box::new(ImportExtractor::new(self.import_capture)),
        }
    }

    fn locator(&self) -> FileLocator {
        FileLocator::with_skipped_dirs(self.skip_dirs.iter().cloned())
    }
}

/// Map every source file under `root` to the components it exports or imports.
///
/// Fails only if the tree cannot be walked; unreadable files are collected in
/// [`Aggregation::failures`].
pub fn map_components(root: &Path, options: &ScanOptions) -> AnalysisResult<Aggregation> {
    let files = options.locator().locate(root)?;
    info!(
        root = %root.display(),
        mode = %options.mode,
        files = files.len(),
        "scanning source files"
    );

    let extractor = options.extractor();
    Ok(aggregate(extractor.as_ref(), &files))
}
