//! gitignore-api - Composition engine for merged `.gitignore` templates
//!
//! This library resolves a comma-separated list of template identifiers
//! against an immutable registry and assembles one composite ignore
//! document: deduplicated, deterministically ordered, wrapped in
//! header/footer lines, with repeated lines filtered out. Malformed input
//! never fails a request; problems surface as inline marker lines in the
//! returned document.
//!
//! # Example
//!
//! ```rust
//! use gitignore_api::{compose, OrderTable, Registry};
//!
//! let mut registry = Registry::new();
//! registry.insert("macos", ".DS_Store\n");
//! registry.insert("node", "node_modules/\n");
//!
//! let document = compose("node,macos", &registry, &OrderTable::new());
//! assert!(document.contains(".DS_Store"));
//! assert!(document.contains("node_modules/"));
//! ```

pub mod composer;
pub mod listing;
pub mod loader;
pub mod order;
pub mod registry;
pub mod server;

pub use composer::compose;
pub use listing::{format_listing, format_order, ListFormat};
pub use loader::{load_registry, LoadError};
pub use order::{OrderError, OrderTable};
pub use registry::{Registry, TemplateEntry};
pub use server::{router, serve, HELP_TEXT};
