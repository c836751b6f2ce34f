//! Loading the template registry from a directory of template files
//!
//! Templates are plain files with a `.gitignore` extension, searched
//! recursively so upstream data layouts with subdirectories (e.g. a
//! `Global/` folder for editors and operating systems) work unchanged. The
//! identifier is the lowercased file stem: `Node.gitignore` registers as
//! `node`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::registry::Registry;

/// Extension a file must carry to be picked up as a template
const TEMPLATE_EXTENSION: &str = "gitignore";

/// Errors that can occur while building the registry from disk
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("template directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("error walking template directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("error reading template file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Build a [`Registry`] from every `*.gitignore` file under `dir`.
///
/// When two files share a stem the one visited last wins and a warning is
/// logged; the data set is expected to keep stems unique.
pub fn load_registry(dir: &Path) -> Result<Registry, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut registry = Registry::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION)
        {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "skipping template with non-UTF-8 name");
            continue;
        };

        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(previous) = registry.insert(stem, contents) {
            warn!(
                identifier = %previous.identifier,
                path = %path.display(),
                "template replaces an earlier file with the same stem"
            );
        }
    }

    debug!(count = registry.len(), dir = %dir.display(), "loaded template registry");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).expect("Should write fixture");
    }

    #[test]
    fn test_load_from_flat_directory() {
        let dir = tempfile::tempdir().expect("Should create tempdir");
        write(dir.path(), "Node.gitignore", "node_modules/\n");
        write(dir.path(), "macOS.gitignore", ".DS_Store\n");

        let registry = load_registry(dir.path()).expect("Should load");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["macos", "node"]);
        assert_eq!(registry.lookup("node").unwrap().contents, "node_modules/\n");
    }

    #[test]
    fn test_load_recurses_into_subdirectories() {
        let dir = tempfile::tempdir().expect("Should create tempdir");
        fs::create_dir(dir.path().join("Global")).expect("Should create subdir");
        write(&dir.path().join("Global"), "Vim.gitignore", "*.swp\n");

        let registry = load_registry(dir.path()).expect("Should load");
        assert!(registry.contains("vim"));
    }

    #[test]
    fn test_non_template_files_ignored() {
        let dir = tempfile::tempdir().expect("Should create tempdir");
        write(dir.path(), "README.md", "not a template\n");
        write(dir.path(), "order.toml", "[order]\n");
        write(dir.path(), "Rust.gitignore", "target/\n");

        let registry = load_registry(dir.path()).expect("Should load");
        assert_eq!(registry.names(), vec!["rust"]);
    }

    #[test]
    fn test_missing_directory_error() {
        let result = load_registry(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(LoadError::DirectoryNotFound { .. })));
    }
}
