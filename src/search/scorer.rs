//! Field scorer trait and shared types.
//!
//! A [`Scorer`] compares a query against one text field and reports how far
//! apart they are on a `0.0..=1.0` scale: 0.0 is an exact match, 1.0 is
//! unrelated. Anything above the scorer's own threshold is reported as no
//! match at all. The production implementation is
//! [`FuzzyScorer`](super::fuzzy::FuzzyScorer).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Scorer failed: {0}")]
    Scorer(String),
}

/// Approximate string matching behind a narrow interface.
///
/// `Sync` so a single engine can be shared by reference.
pub trait Scorer: Sync {
    /// Distance of `query` from `text`, or `None` when it does not clear the
    /// threshold.
    fn score(&self, query: &str, text: &str) -> Result<Option<f64>, SearchError>;

    /// The acceptance threshold this scorer applies.
    fn threshold(&self) -> f64;
}
