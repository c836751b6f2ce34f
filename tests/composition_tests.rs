//! End-to-end tests: registry loaded from disk, order table from TOML,
//! composite documents assembled through the public API

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use gitignore_api::{compose, load_registry, OrderTable};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("Should write fixture");
}

#[test]
fn composes_loaded_templates_in_priority_order() {
    let dir = tempfile::tempdir().expect("Should create tempdir");
    write(dir.path(), "Umbraco.gitignore", "umbraco/Logs/\n");
    write(dir.path(), "VisualStudio.gitignore", "bin/\nobj/\n");

    let registry = load_registry(dir.path()).expect("Should load");
    // Umbraco must come after the VisualStudio base it extends.
    let order = OrderTable::from_toml("[order]\numbraco = 1\n").expect("Should parse");

    let document = compose("umbraco,visualstudio", &registry, &order);
    let visualstudio_at = document.find("bin/").unwrap();
    let umbraco_at = document.find("umbraco/Logs/").unwrap();
    assert!(visualstudio_at < umbraco_at);
}

#[test]
fn composite_document_has_exact_shape() {
    let dir = tempfile::tempdir().expect("Should create tempdir");
    write(dir.path(), "a.gitignore", "A-CONTENT\n");
    write(dir.path(), "b.gitignore", "B-CONTENT\n");

    let registry = load_registry(dir.path()).expect("Should load");
    let order = OrderTable::from_toml("[order]\nb = 1\n").expect("Should parse");

    assert_eq!(
        compose("b,a", &registry, &order),
        "\n# Created by https://www.gitignore.io/api/b,a\n\
         A-CONTENT\nB-CONTENT\n\n\n\
         # End of https://www.gitignore.io/api/b,a\n"
    );
}

#[test]
fn shared_patterns_appear_once() {
    let dir = tempfile::tempdir().expect("Should create tempdir");
    write(dir.path(), "one.gitignore", "*.log\none/\n");
    write(dir.path(), "two.gitignore", "*.log\ntwo/\n");

    let registry = load_registry(dir.path()).expect("Should load");
    let document = compose("one,two", &registry, &OrderTable::new());
    assert_eq!(document.matches("*.log").count(), 1);
}

#[test]
fn unknown_identifier_is_reported_inline() {
    let dir = tempfile::tempdir().expect("Should create tempdir");
    write(dir.path(), "node.gitignore", "node_modules/\n");

    let registry = load_registry(dir.path()).expect("Should load");
    let document = compose("node,doesnotexist", &registry, &OrderTable::new());
    assert!(document.contains("doesnotexist is undefined"));
    assert!(document.contains("node_modules/"));
}

#[test]
fn request_casing_only_affects_header_and_footer() {
    let dir = tempfile::tempdir().expect("Should create tempdir");
    write(dir.path(), "macOS.gitignore", ".DS_Store\n");

    let registry = load_registry(dir.path()).expect("Should load");
    let document = compose("MacOS", &registry, &OrderTable::new());
    assert!(document.contains("# Created by https://www.gitignore.io/api/MacOS\n"));
    assert!(document.contains("# End of https://www.gitignore.io/api/MacOS\n"));
    assert!(document.contains(".DS_Store"));
}
