//! Facet extraction for the filter panel.
//!
//! Facets are the distinct category and tag values found in a collection,
//! sorted lexicographically (byte order, so `"Zebra"` sorts before `"apple"`).
//! The tag list can be long, so the panel shows a short preview and folds
//! the rest behind a "Show All (n)" control.

use crate::types::ArtworkItem;
use std::borrow::Borrow;
use std::collections::BTreeSet;

/// Distinct categories, sorted ascending.
pub fn unique_categories<T: Borrow<ArtworkItem>>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .map(|i| i.borrow().category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Distinct tags across every item, sorted ascending.
pub fn unique_tags<T: Borrow<ArtworkItem>>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .flat_map(|i| i.borrow().tags.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Tags to show in the panel: the first `limit` unless `show_all`.
pub fn visible_tags(tags: &[String], show_all: bool, limit: usize) -> &[String] {
    if show_all || tags.len() <= limit {
        tags
    } else {
        &tags[..limit]
    }
}

/// Number of tags folded behind the "Show All" control (0 when expanded).
pub fn hidden_tag_count(tags: &[String], show_all: bool, limit: usize) -> usize {
    tags.len() - visible_tags(tags, show_all, limit).len()
}

/// Both facet lists for a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl Facets {
    pub fn from_items<T: Borrow<ArtworkItem>>(items: &[T]) -> Self {
        Self {
            categories: unique_categories(items),
            tags: unique_tags(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn categories_sorted_and_deduplicated() {
        let items = sample_items();
        assert_eq!(
            unique_categories(&items),
            vec!["Digital Art", "Drawing", "Painting", "Photography"]
        );
    }

    #[test]
    fn tags_flattened_sorted_and_deduplicated() {
        let items = sample_items();
        assert_eq!(
            unique_tags(&items),
            vec![
                "animals",
                "charcoal",
                "city",
                "ink",
                "landscape",
                "night",
                "oil",
                "portrait"
            ]
        );
    }

    #[test]
    fn duplicate_tags_inside_one_item_collapse() {
        let items = vec![artwork("1", "A", "Drawing", &["ink", "ink", "cat"])];
        assert_eq!(unique_tags(&items), vec!["cat", "ink"]);
    }

    #[test]
    fn empty_collection_has_no_facets() {
        let items: Vec<ArtworkItem> = vec![];
        assert_eq!(Facets::from_items(&items), Facets::default());
    }

    #[test]
    fn sort_is_byte_order() {
        let items = vec![
            artwork("1", "A", "apple", &[]),
            artwork("2", "B", "Zebra", &[]),
        ];
        assert_eq!(unique_categories(&items), vec!["Zebra", "apple"]);
    }

    #[test]
    fn repeated_extraction_is_stable() {
        let items = sample_items();
        assert_eq!(Facets::from_items(&items), Facets::from_items(&items));
    }

    // =========================================================================
    // Tag preview
    // =========================================================================

    fn tags(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tag{i:02}")).collect()
    }

    #[test]
    fn preview_truncates_to_limit() {
        let t = tags(12);
        assert_eq!(visible_tags(&t, false, 8).len(), 8);
        assert_eq!(hidden_tag_count(&t, false, 8), 4);
    }

    #[test]
    fn preview_expanded_shows_everything() {
        let t = tags(12);
        assert_eq!(visible_tags(&t, true, 8).len(), 12);
        assert_eq!(hidden_tag_count(&t, true, 8), 0);
    }

    #[test]
    fn preview_shorter_than_limit_is_untouched() {
        let t = tags(3);
        assert_eq!(visible_tags(&t, false, 8), t.as_slice());
        assert_eq!(hidden_tag_count(&t, false, 8), 0);
    }
}
