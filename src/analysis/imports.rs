//! Imported component detection.
//!
//! Finds `import ... from "<specifier>"` statements whose specifier points
//! inside the project: either through the `@/` root alias or through one or
//! more leading `./` / `../` segments. Package imports such as `"react"` or
//! `"@mui/material"` are never matched.
//!
//! Only names that start with an uppercase letter are reported. By default a
//! statement contributes a single name (the first one in its import clause);
//! [`ImportCapture::All`] reports every name in the clause instead.

use std::sync::LazyLock;

use regex::Regex;

use super::aggregate::ComponentExtractor;

/// Root alias or relative dot segments, followed by a path of letters, slashes and underscores.
const LOCAL_PATH: &str = r"(?:@/|(?:\.{1,2}/)+)[A-Za-z/_]+";

/// Import clause: optional `type`, optional default name, then an optional
/// braced list or `* as Name`. Cannot run on into a following statement.
const IMPORT_CLAUSE: &str =
    r"(?:type\s+)?(?:[\w$]+\s*,?\s*)?(?:\{[\w$\s,]*\}|\*\s*as\s+[\w$]+)?";

static LOCAL_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"\bimport\s+({IMPORT_CLAUSE})\s*\bfrom\s*["']{LOCAL_PATH}["']"#
    ))
    .expect("LOCAL_IMPORT regex is invalid")
});

static LOCAL_SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{LOCAL_PATH}$")).expect("LOCAL_SPECIFIER regex is invalid")
});

/// Returns true if a module specifier refers to a project-local module.
pub fn is_local_specifier(specifier: &str) -> bool {
    LOCAL_SPECIFIER.is_match(specifier)
}

/// How many names a single import statement contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportCapture {
    /// The first component name in the import clause.
    #[default]
    First,
    /// Every component name in the import clause, in order.
    All,
}

/// Extracts imported component names from source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportExtractor {
    capture: ImportCapture,
}

impl ImportExtractor {
    pub fn new(capture: ImportCapture) -> Self {
        Self { capture }
    }

    pub fn capture(&self) -> ImportCapture {
        self.capture
    }
}

impl ComponentExtractor for ImportExtractor {
    fn extract(&self, source: &str) -> Vec<String> {
        let mut names = Vec::new();

        for caps in LOCAL_IMPORT.captures_iter(source) {
            let clause = caps.get(1).map_or("", |m| m.as_str());
            let mut found = clause_names(clause);

            match self.capture {
                ImportCapture::First => names.extend(found.next()),
                ImportCapture::All => names.extend(found),
            }
        }

        names.into_iter().map(str::to_string).collect()
    }
}

/// Component names in an import clause such as `Foo, { Bar as Baz, type Props }`.
///
/// Aliased specifiers report the imported name, `type` modifiers are dropped
/// and namespace imports (`* as Icons`) are skipped.
fn clause_names(clause: &str) -> impl Iterator<Item = &str> {
    clause
        .split([',', '{', '}'])
        .map(str::trim)
        .filter(|spec| !spec.starts_with('*'))
        .filter_map(|spec| {
            let spec = spec
                .strip_prefix("type ")
                .map(str::trim_start)
                .unwrap_or(spec);
            spec.split_whitespace().next()
        })
        .filter(|name| is_component_name(name))
}

/// Uppercase first letter, at least two characters, word characters only.
fn is_component_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
        && name.len() > 1
        && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}
