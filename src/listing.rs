//! Listing output for the known templates and the order table

use crate::order::OrderTable;
use crate::registry::Registry;

/// Identifiers per line in the default grouped listing
const GROUP_SIZE: usize = 5;

/// Output format for the template listing.
///
/// Resolved once from the raw query option; anything unrecognized becomes
/// [`ListFormat::Unknown`] and is reported as plain text rather than
/// guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// Identifiers grouped five per line, comma-separated (the default)
    Grouped,
    /// One identifier per line
    Lines,
    /// Full registry serialized as a JSON map
    Json,
    /// Unrecognized format option
    Unknown,
}

impl ListFormat {
    /// Resolve the raw `format` query option; `None` selects the default
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => ListFormat::Grouped,
            Some("lines") => ListFormat::Lines,
            Some("json") => ListFormat::Json,
            Some(_) => ListFormat::Unknown,
        }
    }
}

/// Render the template listing in the requested format
pub fn format_listing(registry: &Registry, format: ListFormat) -> String {
    let names = registry.names();
    match format {
        ListFormat::Grouped => names
            .chunks(GROUP_SIZE)
            .map(|chunk| chunk.join(","))
            .collect::<Vec<_>>()
            .join("\n"),
        ListFormat::Lines => names.join("\n"),
        ListFormat::Json => serde_json::to_string(registry)
            .unwrap_or_else(|e| format!("Serialization failure: {e}")),
        ListFormat::Unknown => {
            "Unknown Format: `lines` or `json` are acceptable formats".to_string()
        }
    }
}

/// Render the order table as JSON
pub fn format_order(order: &OrderTable) -> String {
    serde_json::to_string(order).unwrap_or_else(|e| format!("Serialization failure: {e}"))
}
