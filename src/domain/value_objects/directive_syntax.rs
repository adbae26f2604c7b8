//! Directive syntax - which comment marker introduces directives per extension

use std::collections::BTreeMap;

/// Marker for the C-style comment family
pub const SLASH_MARKER: &str = "//=";
/// Marker for the hash comment family
pub const HASH_MARKER: &str = "#=";

const DEFAULT_MARKERS: &[(&str, &str)] = &[
    ("js", SLASH_MARKER),
    ("jsx", SLASH_MARKER),
    ("mjs", SLASH_MARKER),
    ("cjs", SLASH_MARKER),
    ("ts", SLASH_MARKER),
    ("tsx", SLASH_MARKER),
    ("coffee", HASH_MARKER),
    ("litcoffee", HASH_MARKER),
    ("rb", HASH_MARKER),
];

/// Extension → marker table plus the switches that change how directives expand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSyntax {
    markers: BTreeMap<String, String>,
    expand_bulk: bool,
}

impl Default for DirectiveSyntax {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS
                .iter()
                .map(|(ext, marker)| (ext.to_string(), marker.to_string()))
                .collect(),
            expand_bulk: false,
        }
    }
}

impl DirectiveSyntax {
    /// Add or replace markers. An empty marker removes the extension.
    pub fn with_markers<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (ext, marker) in overrides {
            let ext = ext.into().trim_start_matches('.').to_string();
            let marker = marker.into();
            if marker.trim().is_empty() {
                self.markers.remove(&ext);
            } else {
                self.markers.insert(ext, marker);
            }
        }
        self
    }

    /// Expand `require_tree` / `require_directory` instead of ignoring them
    pub fn with_bulk_expansion(mut self, expand_bulk: bool) -> Self {
        self.expand_bulk = expand_bulk;
        self
    }

    /// Marker for a file extension, if the extension carries directives
    pub fn marker_for(&self, extension: &str) -> Option<&str> {
        self.markers.get(extension).map(String::as_str)
    }

    pub fn expands_bulk(&self) -> bool {
        self.expand_bulk
    }

    pub fn markers(&self) -> &BTreeMap<String, String> {
        &self.markers
    }
}
