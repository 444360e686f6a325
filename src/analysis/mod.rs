//! Component mapping engine for compmap.
//!
//! This module scans a tree of front-end script files and builds a
//! heuristic map of which files export named components and which files
//! import named components from project-local modules.
//!
//! # Pipeline
//!
//! - [`locator`] finds `.tsx` and `.js` files under a root directory
//! - [`exports`] / [`imports`] turn one file's text into component names
//! - [`aggregate`] runs an extractor over every file and builds the map
//! - [`scan`] ties the three together behind [`map_components`]
//!
//! Matching is done with regular expressions over raw text, not with a
//! syntax tree, so results are best-effort.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use compmap::analysis::{map_components, Mode, ScanOptions};
//!
//! let result = map_components(Path::new("./src"), &ScanOptions::new(Mode::Export))?;
//! for (file, components) in &result.components {
//!     println!("{}: {:?}", file.display(), components);
//! }
//! ```

pub mod aggregate;
pub mod error;
pub mod exports;
pub mod imports;
pub mod locator;
pub mod scan;

// Re-export main types for convenience
pub use aggregate::{aggregate, Aggregation, ComponentExtractor, ComponentMap};
pub use error::{AnalysisError, AnalysisResult};
pub use exports::ExportExtractor;
pub use imports::{is_local_specifier, ImportCapture, ImportExtractor};
pub use locator::{find_source_files, is_source_file, FileLocator, SOURCE_EXTENSIONS};
pub use scan::{map_components, Mode, ScanOptions};
