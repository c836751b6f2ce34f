//! Composition of requested templates into a single ignore document
//!
//! This is the heart of the service: a pure function over the raw request
//! string, the [`Registry`] and the [`OrderTable`]. It never fails — every
//! error condition (malformed percent-encoding, unknown identifier) is
//! rendered as an inline marker line in the returned document, so callers
//! always get usable text back. Scripted consumers redirect the output
//! straight into a file; an HTTP error page would break them.

use std::collections::HashSet;

use crate::order::OrderTable;
use crate::registry::Registry;

/// Compose a composite ignore document for a comma-separated request.
///
/// `raw_query` is the still percent-encoded identifier string as it appears
/// in the request path. The pipeline is: percent-decode, lowercase, split on
/// `,`, deduplicate, sort lexicographically, stable re-sort by order-table
/// priority, resolve each identifier, wrap in header/footer, and drop
/// repeated lines across the whole document.
///
/// # Example
///
/// ```rust
/// use gitignore_api::{compose, OrderTable, Registry};
///
/// let mut registry = Registry::new();
/// registry.insert("node", "node_modules/\n");
///
/// let document = compose("node", &registry, &OrderTable::new());
/// assert!(document.contains("node_modules/"));
/// assert!(document.starts_with("\n# Created by https://www.gitignore.io/api/node\n"));
/// ```
pub fn compose(raw_query: &str, registry: &Registry, order: &OrderTable) -> String {
    // Decode failure short-circuits: nothing else is rendered.
    let Some(decoded) = percent_decode(raw_query) else {
        return format!("\n#!! ERROR: url decoding {raw_query} !#\n");
    };

    let mut identifiers: Vec<String> = decoded
        .to_lowercase()
        .split(',')
        .map(str::to_string)
        .collect();
    identifiers.sort();
    identifiers.dedup();
    // The priority comparison alone is a partial order; the sort must be
    // stable so tied identifiers keep their lexicographic position.
    identifiers.sort_by_key(|identifier| order.priority(identifier));

    // Header and footer carry the decoded query with its original casing.
    let mut document = format!("\n# Created by https://www.gitignore.io/api/{decoded}\n");
    for identifier in &identifiers {
        match registry.lookup(identifier) {
            Some(entry) => document.push_str(&entry.contents),
            None => document.push_str(&format!(
                "\n#!! ERROR: {identifier} is undefined. Use list command to see defined gitignore types !!#\n"
            )),
        }
    }
    document.push_str(&format!(
        "\n\n# End of https://www.gitignore.io/api/{decoded}\n"
    ));

    remove_duplicate_lines(&document)
}

/// Decode percent-escapes, failing like Swift's `removingPercentEncoding`.
///
/// Returns `None` when a `%` is not followed by two hex digits or when the
/// decoded bytes are not valid UTF-8. The `percent-encoding` crate is not
/// usable here: it passes malformed escapes through instead of failing, and
/// the decode-failure marker depends on detecting them.
fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = hex_digit(*bytes.get(i + 1)?)?;
            let lo = hex_digit(*bytes.get(i + 2)?)?;
            decoded.push(hi << 4 | lo);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(decoded).ok()
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Drop every non-empty line that already appeared earlier in the document.
///
/// First occurrence wins and order is preserved. Empty lines always survive
/// so the blank separators between template blocks stay intact. This runs
/// over the whole assembled document, header and footer included.
fn remove_duplicate_lines(document: &str) -> String {
    let mut seen = HashSet::new();
    document
        .split('\n')
        .filter(|line| line.is_empty() || seen.insert(line.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}
