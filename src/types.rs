//! Shared types used by every stage of the view pipeline.
//!
//! [`ArtworkItem`] mirrors the on-disk dataset record (camelCase keys, so
//! `imagePath` in JSON) and is never mutated after loading.
//! [`FilterSelection`] is the user-controlled input to the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single portfolio entry (drawing, painting, photo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkItem {
    /// Stable, unique identity across the catalog
    pub id: String,
    pub title: String,
    /// Free text story behind the piece
    pub description: String,
    /// Opaque image reference, never resolved by the core
    pub image_path: String,
    /// Exactly one per item (e.g. "Drawing", "Painting")
    pub category: String,
    /// Zero or more tags, kept in dataset order; duplicates are not folded
    pub tags: Vec<String>,
    /// Creation date, `YYYY-MM-DD`
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Filter and search inputs chosen by the user.
///
/// Categories and tags are sets: only membership matters, never the order
/// in which they were toggled on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub search_query: String,
}

impl FilterSelection {
    /// Whether any facet filter is active. The search query does not count.
    pub fn has_active_filters(&self) -> bool {
        !self.categories.is_empty() || !self.tags.is_empty()
    }

    /// Whether the selection is completely empty, search included.
    pub fn is_empty(&self) -> bool {
        !self.has_active_filters() && self.search_query.is_empty()
    }

    /// Add `category` if absent, remove it if present.
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category);
    }

    /// Add `tag` if absent, remove it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.tags, tag);
    }

    /// Reset categories, tags and the query in one step.
    pub fn clear(&mut self) {
        self.categories.clear();
        self.tags.clear();
        self.search_query.clear();
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{
            "id": "1",
            "title": "Dawn",
            "description": "Early light",
            "imagePath": "/images/dawn.jpg",
            "category": "Painting",
            "tags": ["landscape", "oil"],
            "date": "2024-03-01",
            "width": 1200
        }"#;
        let item: ArtworkItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.image_path, "/images/dawn.jpg");
        assert_eq!(item.tags, vec!["landscape", "oil"]);
        assert_eq!(item.width, Some(1200));
        assert_eq!(item.height, None);
    }

    #[test]
    fn serializes_without_absent_dimensions() {
        let item = ArtworkItem {
            id: "1".into(),
            title: "Dawn".into(),
            description: String::new(),
            image_path: "dawn.jpg".into(),
            category: "Painting".into(),
            tags: vec![],
            date: "2024-03-01".into(),
            width: None,
            height: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"imagePath\""));
        assert!(!json.contains("width"));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = FilterSelection::default();
        sel.toggle_category("Drawing");
        assert!(sel.categories.contains("Drawing"));
        sel.toggle_category("Drawing");
        assert!(sel.categories.is_empty());

        sel.toggle_tag("portrait");
        sel.toggle_tag("ink");
        assert_eq!(sel.tags.len(), 2);
        sel.toggle_tag("portrait");
        assert_eq!(sel.tags.iter().collect::<Vec<_>>(), vec!["ink"]);
    }

    #[test]
    fn search_query_is_not_an_active_filter() {
        let sel = FilterSelection {
            search_query: "sunset".into(),
            ..Default::default()
        };
        assert!(!sel.has_active_filters());
        assert!(!sel.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut sel = FilterSelection::default();
        sel.toggle_category("Drawing");
        sel.toggle_tag("ink");
        sel.search_query = "cat".into();
        sel.clear();
        assert!(sel.is_empty());
    }
}
