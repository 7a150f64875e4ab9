//! View pipeline and pagination.
//!
//! # Pipeline
//!
//! ```text
//! catalog ──filter──▶ facet matches ──search──▶ ranked ──prefix──▶ displayed
//!          (categories,              (query)          (items_to_show)
//!           tags)
//! ```
//!
//! Filtering runs first so the fuzzy scorer only sees the narrowed set; the
//! search ranking is the order the user sees. [`compute_view`] is a pure
//! function of its inputs and is cheap enough to rerun on every interaction.
//!
//! # Session state
//!
//! [`SessionState`] is the single owner of everything the user can change:
//! the [`FilterSelection`], the [`Pagination`] cursor and the open lightbox
//! index. It changes only through [`SessionState::apply`], a reducer over
//! [`Action`]s. Any action that changes the selection resets the cursor to
//! one page in the same step, so a cursor left high by earlier "load more"
//! clicks can never leak into a narrower result set.

use crate::filter::filter_selection;
use crate::search::SearchEngine;
use crate::types::{ArtworkItem, FilterSelection};

/// Items revealed initially and per "load more".
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Shown in place of the grid when nothing matches.
pub const EMPTY_MESSAGE: &str = "No artwork found. Try adjusting your search or filters.";

/// Result count line: matches out of the whole catalog.
///
/// ```text
/// Showing 1 of 12 artwork
/// Showing 3 of 12 artworks
/// ```
pub fn result_summary(matched: usize, catalog_total: usize) -> String {
    let noun = if matched == 1 { "artwork" } else { "artworks" };
    format!("Showing {matched} of {catalog_total} {noun}")
}

/// How many items of the result set are revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    items_to_show: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Start at one page. A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            items_to_show: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn items_to_show(&self) -> usize {
        self.items_to_show
    }

    /// Reveal one more page.
    pub fn load_more(&mut self) {
        self.items_to_show = self.items_to_show.saturating_add(self.page_size);
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.items_to_show = self.page_size;
    }

    /// Number of items displayed out of `total`.
    pub fn displayed_len(&self, total: usize) -> usize {
        total.min(self.items_to_show)
    }

    /// Whether a "load more" would reveal anything.
    pub fn has_more(&self, total: usize) -> bool {
        total > self.items_to_show
    }
}

/// Result of running the pipeline once.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    items: Vec<&'a ArtworkItem>,
    shown: usize,
}

impl<'a> View<'a> {
    /// The revealed prefix, in display order.
    pub fn displayed(&self) -> &[&'a ArtworkItem] {
        &self.items[..self.shown]
    }

    /// The full filtered and ranked sequence (what the lightbox pages through).
    pub fn filtered(&self) -> &[&'a ArtworkItem] {
        &self.items
    }

    pub fn has_more(&self) -> bool {
        self.items.len() > self.shown
    }

    /// Size of the full result set.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filter, then search, then reveal the first `items_to_show` results.
pub fn compute_view<'a>(
    items: &'a [ArtworkItem],
    selection: &FilterSelection,
    items_to_show: usize,
    engine: &SearchEngine,
) -> View<'a> {
    let all: Vec<&'a ArtworkItem> = items.iter().collect();
    let narrowed = filter_selection(&all, selection);
    let ranked = engine.search(&narrowed, &selection.search_query).into_owned();
    let shown = ranked.len().min(items_to_show);
    View {
        items: ranked,
        shown,
    }
}

/// Everything a user interaction can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the search text.
    SetQuery(String),
    ToggleCategory(String),
    ToggleTag(String),
    /// Drop categories, tags and the query together.
    ClearFilters,
    LoadMore,
    /// An item was clicked: open the lightbox at its position.
    ///
    /// Applied as is; [`SessionState::open`] checks the index first.
    OpenItem(usize),
    CloseLightbox,
}

/// Per-session mutable state. Created at session start, dropped at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    selection: FilterSelection,
    pagination: Pagination,
    lightbox: Option<usize>,
}

impl SessionState {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Index into [`View::filtered`] the lightbox is showing, if open.
    pub fn lightbox(&self) -> Option<usize> {
        self.lightbox
    }

    /// Apply one action.
    ///
    /// Selection changes reset pagination and close the lightbox in the same
    /// transition. Actions that leave the selection as it was (setting the
    /// same query again) do not.
    pub fn apply(&mut self, action: Action) {
        let before = self.selection.clone();
        match action {
            Action::SetQuery(query) => self.selection.search_query = query,
            Action::ToggleCategory(category) => self.selection.toggle_category(&category),
            Action::ToggleTag(tag) => self.selection.toggle_tag(&tag),
            Action::ClearFilters => self.selection.clear(),
            Action::LoadMore => self.pagination.load_more(),
            Action::OpenItem(index) => self.lightbox = Some(index),
            Action::CloseLightbox => self.lightbox = None,
        }

        if self.selection != before {
            tracing::debug!(
                from = self.pagination.items_to_show(),
                to = self.pagination.page_size(),
                "selection changed, resetting pagination"
            );
            self.pagination.reset();
            self.lightbox = None;
        }
    }

    /// Open the lightbox at `index` of `view`'s result sequence.
    ///
    /// Returns `false` and leaves the state alone when the index is past the
    /// end of the results.
    pub fn open(&mut self, view: &View<'_>, index: usize) -> bool {
        if index >= view.total() {
            tracing::debug!(index, total = view.total(), "lightbox index out of range");
            return false;
        }
        self.apply(Action::OpenItem(index));
        true
    }

    /// Consume the state and return it with `action` applied.
    pub fn reduce(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }

    /// Run the pipeline over `items` for the current state.
    pub fn view<'a>(&self, items: &'a [ArtworkItem], engine: &SearchEngine) -> View<'a> {
        compute_view(
            items,
            &self.selection,
            self.pagination.items_to_show(),
            engine,
        )
    }
}
