//! Template registry for storing and retrieving ignore templates

use std::collections::BTreeMap;

use serde::Serialize;

/// Normalize a template identifier: lowercase, trimmed.
///
/// Registry keys are stored normalized and lookups normalize the query the
/// same way, so resolution is case-insensitive.
pub fn normalize(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

/// A named block of ignore-pattern text
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Normalized identifier (e.g. "macos", "node")
    pub identifier: String,
    /// Raw text block, concatenated verbatim into composite documents
    pub contents: String,
}

/// The full set of known templates keyed by normalized identifier.
///
/// Built once at startup and read-only afterwards; concurrent reads need no
/// locking. The backing map is ordered so serialized output and `names()`
/// are deterministic.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct Registry {
    templates: BTreeMap<String, TemplateEntry>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a template, normalizing the identifier.
    ///
    /// Returns the previous entry if the identifier was already registered.
    pub fn insert(&mut self, identifier: &str, contents: impl Into<String>) -> Option<TemplateEntry> {
        let identifier = normalize(identifier);
        let entry = TemplateEntry {
            identifier: identifier.clone(),
            contents: contents.into(),
        };
        self.templates.insert(identifier, entry)
    }

    /// Look up a template by identifier (case-insensitive)
    pub fn lookup(&self, identifier: &str) -> Option<&TemplateEntry> {
        self.templates.get(&normalize(identifier))
    }

    /// Check if a template exists
    pub fn contains(&self, identifier: &str) -> bool {
        self.templates.contains_key(&normalize(identifier))
    }

    /// All identifiers, lexicographically ascending
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(|k| k.as_str()).collect()
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry holds no templates
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
