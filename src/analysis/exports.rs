//! Exported component detection.
//!
//! A textual heuristic, not a parser: it looks for `export` statements whose
//! exported name starts with an uppercase letter. Two grammars are supported
//! through a single policy flag:
//!
//! - **broad** (default): `export [default] Name`, `export [default] function Name`
//!   and `export [default] const Name`
//! - **default-only**: the same shapes, but `default` is required
//!
//! `export class ...`, `export let ...` and lowercase names are never matched.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::aggregate::ComponentExtractor;

static BROAD_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bexport\s+(?:default\s+)?([A-Z]\w+|(function|const)\s+([A-Z]\w+))")
        .expect("BROAD_EXPORT regex is invalid")
});

static DEFAULT_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bexport\s+default\s+([A-Z]\w+|(function|const)\s+([A-Z]\w+))")
        .expect("DEFAULT_EXPORT regex is invalid")
});

/// Extracts exported component names from source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportExtractor {
    require_default: bool,
}

impl ExportExtractor {
    /// Create an extractor; `require_default` selects the default-only grammar.
    pub fn new(require_default: bool) -> Self {
        Self { require_default }
    }

    /// Matches default and named `function`/`const` exports.
    pub fn broad() -> Self {
        Self::new(false)
    }

    /// Matches `export default ...` only.
    pub fn default_only() -> Self {
        Self::new(true)
    }

    /// Whether the `default` keyword is required.
    pub fn requires_default(&self) -> bool {
        self.require_default
    }

    fn pattern(&self) -> &'static Regex {
        if self.require_default {
            &*DEFAULT_EXPORT
        } else {
            &*BROAD_EXPORT
        }
    }
}

impl ComponentExtractor for ExportExtractor {
    fn extract(&self, source: &str) -> Vec<String> {
        self.pattern()
            .captures_iter(source)
            .filter_map(|caps| last_populated_group(&caps))
            .map(str::to_string)
            .collect()
    }
}

/// The text of the last non-empty capture group, scanning in definition order.
///
/// The bare-name alternative populates only the outer group, while the
/// `function`/`const` alternative populates the keyword and name groups after
/// it, so the last populated group is always the component name.
fn last_populated_group<'h>(caps: &Captures<'h>) -> Option<&'h str> {
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .last()
}
