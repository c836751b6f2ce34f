//! Priority table controlling template concatenation order
//!
//! Most templates have no entry here and default to priority 0, which keeps
//! them in lexicographic position. A handful of templates must come before
//! or after their companions (e.g. a base template before tool-specific
//! additions), and those carry explicit priorities in a TOML file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::normalize;

/// Errors that can occur when loading or parsing an order file
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Failed to read order file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse order TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// TOML structure for deserializing order files
#[derive(Deserialize)]
struct TomlOrder {
    order: BTreeMap<String, i64>,
}

/// Priority overrides keyed by normalized identifier.
///
/// Read-only after load, same lifetime as the [`Registry`](crate::Registry).
/// Identifiers absent from the table have priority 0.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct OrderTable {
    priorities: BTreeMap<String, i64>,
}

impl OrderTable {
    /// Create an empty table (every identifier gets priority 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an order table from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OrderError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load an order table from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, OrderError> {
        let parsed: TomlOrder = toml::from_str(content)?;

        let mut table = Self::new();
        for (identifier, priority) in parsed.order {
            table.set(&identifier, priority);
        }
        Ok(table)
    }

    /// Set the priority for an identifier, normalizing the key
    pub fn set(&mut self, identifier: &str, priority: i64) {
        self.priorities.insert(normalize(identifier), priority);
    }

    /// Priority for an identifier; absent identifiers default to 0
    pub fn priority(&self, identifier: &str) -> i64 {
        self.priorities.get(identifier).copied().unwrap_or(0)
    }

    /// Number of explicit priority entries
    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    /// Whether the table has no explicit entries
    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }
}
