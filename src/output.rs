//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every artwork is shown by its positional index and title, with the
//! category and tags as secondary context on the same line and the
//! description as an indented line below. Indices are 1-based positions in
//! the current result order, which is what `open <n>` in `browse` takes.
//!
//! # Output Format
//!
//! ## View
//!
//! ```text
//! Search: "portrait"  Categories: Drawing  Tags: -
//! Showing 2 of 10 artworks
//! 001 Grandmother (Drawing) [portrait, charcoal]
//!     Charcoal study of my grandmother reading by the window
//! 002 Self Portrait (Painting) [portrait, oil]
//!     Looking into a cracked mirror
//! ```
//!
//! When the prefix is shorter than the result set a trailing line reports
//! how many remain behind "load more".
//!
//! ## Facets
//!
//! ```text
//! Categories
//!   * Drawing
//!     Painting
//! Tags
//!     animals
//!   * ink
//!     Show All (4)
//! Clear All Filters
//! ```
//!
//! Selected entries carry a `*`. The clear line only appears when a category
//! or tag is selected.
//!
//! ## Check
//!
//! ```text
//! Loaded 9 of 10 records
//! Skipped
//!     #004 missing field 'tags'
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::catalog::LoadReport;
use crate::facets::{self, Facets};
use crate::lightbox::Viewer;
use crate::types::{ArtworkItem, FilterSelection};
use crate::view::{self, View};
use std::collections::BTreeSet;

/// Longest description shown under a listing entry.
const DESCRIPTION_WIDTH: usize = 72;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Comma-joined set, or `-` when empty.
fn join_or_dash(values: &BTreeSet<String>) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Format an artwork entry line.
///
/// ```text
/// 001 Grandmother (Drawing) [portrait, charcoal]
/// 002 Untagged (Painting)
/// ```
fn artwork_line(index: usize, item: &ArtworkItem) -> String {
    let mut line = format!("{} {} ({})", format_index(index), item.title, item.category);
    if !item.tags.is_empty() {
        line.push_str(&format!(" [{}]", item.tags.join(", ")));
    }
    line
}

/// Marker column for facet entries.
fn facet_line(value: &str, selected: bool) -> String {
    let marker = if selected { "  * " } else { "    " };
    format!("{marker}{value}")
}

// ============================================================================
// View
// ============================================================================

/// The active selection on one line.
pub fn format_selection(selection: &FilterSelection) -> String {
    let query = selection.search_query.trim();
    let query = if query.is_empty() {
        "-".to_string()
    } else {
        format!("\"{query}\"")
    };
    format!(
        "Search: {}  Categories: {}  Tags: {}",
        query,
        join_or_dash(&selection.categories),
        join_or_dash(&selection.tags)
    )
}

/// Format the revealed prefix of a view with its result count.
pub fn format_view(view: &View<'_>, catalog_total: usize) -> Vec<String> {
    let mut lines = vec![view::result_summary(view.total(), catalog_total)];

    if view.is_empty() {
        lines.push(view::EMPTY_MESSAGE.to_string());
        return lines;
    }

    for (i, item) in view.displayed().iter().enumerate() {
        lines.push(artwork_line(i + 1, item));
        if !item.description.is_empty() {
            lines.push(format!(
                "{}{}",
                indent(1),
                truncate_desc(&item.description, DESCRIPTION_WIDTH)
            ));
        }
    }

    if view.has_more() {
        let remaining = view.total() - view.displayed().len();
        lines.push(format!("... {remaining} more (load more)"));
    }

    lines
}

pub fn print_view(view: &View<'_>, selection: &FilterSelection, catalog_total: usize) {
    println!("{}", format_selection(selection));
    for line in format_view(view, catalog_total) {
        println!("{}", line);
    }
}

// ============================================================================
// Facets
// ============================================================================

/// Format the filter panel: categories, (folded) tags and the clear control.
pub fn format_facets(
    facets: &Facets,
    selection: &FilterSelection,
    tag_preview: usize,
    show_all: bool,
) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    for category in &facets.categories {
        lines.push(facet_line(
            category,
            selection.categories.contains(category),
        ));
    }

    lines.push("Tags".to_string());
    for tag in facets::visible_tags(&facets.tags, show_all, tag_preview) {
        lines.push(facet_line(tag, selection.tags.contains(tag)));
    }
    let hidden = facets::hidden_tag_count(&facets.tags, show_all, tag_preview);
    if hidden > 0 {
        lines.push(format!("{}Show All ({})", indent(1), facets.tags.len()));
    }

    if selection.has_active_filters() {
        lines.push("Clear All Filters".to_string());
    }

    lines
}

pub fn print_facets(facets: &Facets, selection: &FilterSelection, tag_preview: usize, show_all: bool) {
    for line in format_facets(facets, selection, tag_preview, show_all) {
        println!("{}", line);
    }
}

// ============================================================================
// Lightbox
// ============================================================================

/// Format the slide a viewer is on.
///
/// ```text
/// [2/5] Self Portrait
///     Looking into a cracked mirror
///     Source: /images/self-portrait.jpg
/// ```
pub fn format_slide(viewer: &Viewer) -> Vec<String> {
    let slide = viewer.current();
    let mut lines = vec![format!(
        "[{}/{}] {}",
        viewer.index() + 1,
        viewer.len(),
        slide.title
    )];
    if !slide.description.is_empty() {
        lines.push(format!("{}{}", indent(1), slide.description));
    }
    lines.push(format!("{}Source: {}", indent(1), slide.src));
    lines
}

pub fn print_slide(viewer: &Viewer) {
    for line in format_slide(viewer) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format a dataset validation report.
pub fn format_check(report: &LoadReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Loaded {} of {} records",
        report.loaded(),
        report.records
    )];
    if !report.is_clean() {
        lines.push("Skipped".to_string());
        for skipped in &report.skipped {
            lines.push(format!(
                "{}#{} {}",
                indent(1),
                format_index(skipped.position + 1),
                skipped.reason
            ));
        }
    }
    lines
}

pub fn print_check(report: &LoadReport) {
    for line in format_check(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
