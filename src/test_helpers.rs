//! Shared test utilities for the folio test suite.
//!
//! Provides record builders, a small in-memory catalog, and extractors that
//! turn pipeline output into plain id lists for compact assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let items = sample_items();
//! let out = filter(&items, &set(&["Drawing"]), &set(&[]));
//! assert_eq!(ids(&out), vec!["1", "4"]);
//! ```

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::path::Path;
use tempfile::TempDir;

use crate::types::ArtworkItem;

// =========================================================================
// Builders
// =========================================================================

/// Build a record with the fields the pipeline looks at.
pub fn artwork(id: &str, title: &str, category: &str, tags: &[&str]) -> ArtworkItem {
    ArtworkItem {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        image_path: format!("/images/{id}.jpg"),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: "2024-01-01".to_string(),
        width: None,
        height: None,
    }
}

/// Same as [`artwork`] with a description.
pub fn described(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    tags: &[&str],
) -> ArtworkItem {
    ArtworkItem {
        description: description.to_string(),
        ..artwork(id, title, category, tags)
    }
}

/// `n` plain items with ids `"1"..="n"`.
pub fn numbered_items(n: usize) -> Vec<ArtworkItem> {
    (1..=n)
        .map(|i| artwork(&i.to_string(), &format!("Piece {i}"), "Drawing", &[]))
        .collect()
}

/// Six records covering every facet combination the tests need.
pub fn sample_items() -> Vec<ArtworkItem> {
    vec![
        described(
            "1",
            "Grandmother",
            "Charcoal study of my grandmother",
            "Drawing",
            &["portrait", "charcoal"],
        ),
        described(
            "2",
            "Harbour at Dusk",
            "Boats resting in the old harbour",
            "Painting",
            &["landscape", "oil"],
        ),
        described(
            "3",
            "Self Portrait",
            "Looking into a cracked mirror",
            "Painting",
            &["portrait", "oil"],
        ),
        described(
            "4",
            "Sleeping Cat",
            "Quick ink sketch of the cat on the sofa",
            "Drawing",
            &["animals", "ink"],
        ),
        described(
            "5",
            "Neon Alley",
            "Rainy street with neon signs",
            "Digital Art",
            &["city", "night"],
        ),
        described(
            "6",
            "Mountain Lake",
            "Still water under snowy peaks",
            "Photography",
            &["landscape"],
        ),
    ]
}

/// Build a set of owned strings.
pub fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// =========================================================================
// Extractors
// =========================================================================

/// Ids of `items` in order.
pub fn ids<T: Borrow<ArtworkItem>>(items: &[T]) -> Vec<&str> {
    items.iter().map(|i| i.borrow().id.as_str()).collect()
}

/// Titles of `items` in order.
pub fn titles<T: Borrow<ArtworkItem>>(items: &[T]) -> Vec<&str> {
    items.iter().map(|i| i.borrow().title.as_str()).collect()
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `contents` as `name` inside a fresh temp directory.
pub fn temp_file(name: &str, contents: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(name), contents).unwrap();
    tmp
}

/// Path of the sample dataset shipped in `fixtures/`.
pub fn fixture_dataset() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/portfolio.json")
}
