//! # Folio
//!
//! The browsing core of an artist's portfolio gallery: a fixed catalog of
//! artworks narrowed by category and tag filters, ranked by a typo-tolerant
//! search, and revealed a page at a time.
//!
//! # Architecture: One Pure Pipeline
//!
//! Every interaction recomputes the visible list from scratch:
//!
//! ```text
//! Catalog ──▶ Filter ──▶ Search ──▶ Paginate ──▶ displayed items
//!  (JSON)   (categories  (fuzzy     (items_to_show
//!            OR, tags    ranking)    prefix)
//!            OR, AND
//!            between)
//! ```
//!
//! The stages are pure functions over borrowed slices. The only mutable state
//! is the per-session [`view::SessionState`], which changes through a single
//! reducer so that narrowing the selection and resetting the page cursor
//! happen in the same step.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `ArtworkItem` records and the user's `FilterSelection` |
//! | [`catalog`] | Loads and validates the JSON dataset |
//! | [`filter`] | Category/tag filtering (OR within a facet, AND across facets) |
//! | [`facets`] | Sorted, deduplicated category and tag lists for the filter panel |
//! | [`search`] | Weighted fuzzy search over title, description, category and tags |
//! | [`view`] | The pipeline, incremental reveal and the session reducer |
//! | [`lightbox`] | Slides and finite prev/next navigation over the results |
//! | [`theme`] | Light/dark preference with pluggable persistence |
//! | [`config`] | `config.toml` loading, validation, merging and color CSS |
//! | [`render`] | Static HTML snapshot of a view using Maud |
//! | [`output`] | CLI text formatting for views, facets, slides and checks |
//!
//! # Design Decisions
//!
//! ## Filter Before Search
//!
//! Facet filtering is cheap set membership; fuzzy scoring is not. Running the
//! filter first means the scorer only sees records that can actually be
//! shown, and the search ranking becomes the display order.
//!
//! ## Borrow When Nothing Changes
//!
//! An empty selection and a blank query are the common case. [`filter::filter`]
//! and [`search::SearchEngine::search`] return `Cow<[T]>`, borrowing the input
//! untouched on those paths instead of copying it.
//!
//! ## Search Never Fails the Page
//!
//! The scorer sits behind the [`search::Scorer`] trait. If it errors, the
//! engine logs a warning and returns its input in original order: an
//! unranked gallery is better than an empty one.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error and every
//! interpolated dataset value is escaped.

pub mod catalog;
pub mod config;
pub mod facets;
pub mod filter;
pub mod lightbox;
pub mod output;
pub mod render;
pub mod search;
pub mod theme;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
