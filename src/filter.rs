//! Category and tag filtering.
//!
//! The two facets combine with AND; values inside one facet combine with OR.
//! An item passes the category facet when its single category is selected,
//! and passes the tag facet when *any* of its tags is selected. An empty
//! facet selection lets everything through.
//!
//! ```text
//! categories = {Drawing}, tags = {portrait, landscape}
//!   Drawing  [portrait]   → kept
//!   Drawing  [ink]        → dropped (no selected tag)
//!   Painting [landscape]  → dropped (category not selected)
//! ```
//!
//! The functions are generic over `Borrow<ArtworkItem>` so the same code
//! filters an owned catalog slice or a list of references produced by an
//! earlier stage. Output is always a subsequence of the input, in input order.

use crate::types::{ArtworkItem, FilterSelection};
use std::borrow::{Borrow, Cow};
use std::collections::BTreeSet;

/// Keep the items that pass both facet tests.
///
/// With both selections empty the input is returned borrowed, untouched.
pub fn filter<'a, T>(
    items: &'a [T],
    categories: &BTreeSet<String>,
    tags: &BTreeSet<String>,
) -> Cow<'a, [T]>
where
    T: Borrow<ArtworkItem> + Clone,
{
    if categories.is_empty() && tags.is_empty() {
        return Cow::Borrowed(items);
    }

    Cow::Owned(
        items
            .iter()
            .filter(|item| matches(T::borrow(item), categories, tags))
            .cloned()
            .collect(),
    )
}

/// [`filter`] driven by the facet half of a [`FilterSelection`].
pub fn filter_selection<'a, T>(items: &'a [T], selection: &FilterSelection) -> Cow<'a, [T]>
where
    T: Borrow<ArtworkItem> + Clone,
{
    filter(items, &selection.categories, &selection.tags)
}

/// Membership test for a single item.
pub fn matches(item: &ArtworkItem, categories: &BTreeSet<String>, tags: &BTreeSet<String>) -> bool {
    let category_match = categories.is_empty() || categories.contains(&item.category);
    let tags_match = tags.is_empty() || item.tags.iter().any(|t| tags.contains(t));
    category_match && tags_match
}
