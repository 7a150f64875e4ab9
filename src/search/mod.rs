//! Fuzzy search over artwork records.
//!
//! A query is scored against four fields, each with its own weight:
//!
//! | Field | Default weight |
//! |---|---|
//! | `title` | 0.4 |
//! | `description` | 0.3 |
//! | `category` | 0.2 |
//! | `tags` (best tag) | 0.1 |
//!
//! Every field match yields a distance in `0.0..=1.0` from the [`Scorer`].
//! An item matches when at least one field clears the threshold. Its final
//! score multiplies the matched fields together, each raised to
//! `weight * norm`, where `norm = 1 / sqrt(words in field)` makes a hit in a
//! short field count for more than the same hit buried in a long one. Lower
//! scores rank first; equal scores keep input order.
//!
//! An empty (or whitespace-only) query is not a filter: the input comes back
//! untouched. If the scorer fails the engine logs it and also returns the
//! input untouched, since search only refines the listing.
//!
//! The module is split into:
//! - **Text**: normalization and tokenization helpers
//! - **Scorer**: the [`Scorer`] trait + [`SearchError`]
//! - **Fuzzy**: [`FuzzyScorer`], the Damerau-Levenshtein implementation

pub mod fuzzy;
pub mod scorer;
pub(crate) mod text;

pub use fuzzy::FuzzyScorer;
pub use scorer::{Scorer, SearchError};

use crate::config::{FieldWeights, SearchConfig};
use crate::types::ArtworkItem;
use std::borrow::{Borrow, Cow};

/// One ranked match: position in the searched slice and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub index: usize,
    /// 0.0 is a perfect match; lower ranks first.
    pub score: f64,
}

/// Weighted multi-field search.
pub struct SearchEngine {
    weights: FieldWeights,
    scorer: Box<dyn Scorer>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("weights", &self.weights)
            .field("threshold", &self.scorer.threshold())
            .finish()
    }
}

impl SearchEngine {
    /// Engine backed by [`FuzzyScorer`] with the configured threshold.
    pub fn new(config: &SearchConfig) -> Self {
        Self::with_scorer(
            config.weights,
            Box::new(FuzzyScorer::new(config.threshold, config.case_sensitive)),
        )
    }

    /// Engine backed by any scorer. Weights are normalized to sum to 1.
    pub fn with_scorer(weights: FieldWeights, scorer: Box<dyn Scorer>) -> Self {
        Self {
            weights: weights.normalized(),
            scorer,
        }
    }

    /// Rank `items` against `query`, best first.
    ///
    /// Unlike [`search`](Self::search) this does not special-case blank
    /// queries and it surfaces scorer errors.
    pub fn rank<T: Borrow<ArtworkItem>>(
        &self,
        items: &[T],
        query: &str,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let mut hits = Vec::new();
        for (index, item) in items.iter().enumerate() {
            if let Some(score) = self.score_item(item.borrow(), query)? {
                hits.push(SearchHit { index, score });
            }
        }
        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        Ok(hits)
    }

    /// Items matching `query`, ordered by relevance.
    ///
    /// Blank queries and scorer failures return the input borrowed, in its
    /// original order.
    pub fn search<'a, T>(&self, items: &'a [T], query: &str) -> Cow<'a, [T]>
    where
        T: Borrow<ArtworkItem> + Clone,
    {
        if query.trim().is_empty() {
            return Cow::Borrowed(items);
        }

        match self.rank(items, query) {
            Ok(hits) => {
                tracing::debug!(query, hits = hits.len(), of = items.len(), "search");
                Cow::Owned(hits.iter().map(|h| items[h.index].clone()).collect())
            }
            Err(e) => {
                tracing::warn!(query, "search unavailable, showing unfiltered results: {e}");
                Cow::Borrowed(items)
            }
        }
    }

    fn score_item(&self, item: &ArtworkItem, query: &str) -> Result<Option<f64>, SearchError> {
        let fields = [
            (item.title.as_str(), self.weights.title),
            (item.description.as_str(), self.weights.description),
            (item.category.as_str(), self.weights.category),
        ];

        let mut total = 1.0;
        let mut matched = false;
        for (text, weight) in fields {
            if let Some(score) = self.scorer.score(query, text)? {
                total *= weighted(score, weight, text);
                matched = true;
            }
        }

        let mut best_tag: Option<(f64, &str)> = None;
        for tag in &item.tags {
            if let Some(score) = self.scorer.score(query, tag)? {
                if best_tag.is_none_or(|(best, _)| score < best) {
                    best_tag = Some((score, tag));
                }
            }
        }
        if let Some((score, tag)) = best_tag {
            total *= weighted(score, self.weights.tags, tag);
            matched = true;
        }

        Ok(matched.then_some(total))
    }
}

/// One field's factor in the item score.
fn weighted(score: f64, weight: f64, text: &str) -> f64 {
    let norm = 1.0 / (text::token_count(text) as f64).sqrt();
    let base = if score == 0.0 && weight > 0.0 {
        f64::EPSILON
    } else {
        score
    };
    base.powf(weight * norm)
}

/// Search with the default engine (threshold 0.4, default weights).
pub fn search<'a, T>(items: &'a [T], query: &str) -> Cow<'a, [T]>
where
    T: Borrow<ArtworkItem> + Clone,
{
    SearchEngine::default().search(items, query)
}
