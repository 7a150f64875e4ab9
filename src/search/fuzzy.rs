//! Typo-tolerant word matching on top of Damerau-Levenshtein similarity.
//!
//! The query and the field are both split into words. Every query word is
//! paired with its closest field word, and the field's score is the mean of
//! those per-word distances. A query word is close to a field word when:
//!
//! | Case | Distance |
//! |---|---|
//! | identical | `0.0` |
//! | field word contains it (`"trait"` in `"portrait"`) | up to `0.1`, shrinking as the lengths converge |
//! | edit distance over the whole word | `1 - normalized_damerau_levenshtein` |
//! | edit distance over the field word's prefix | same, plus the containment penalty |
//!
//! Transpositions count as one edit, so `"protrait"` sits at `0.125` from
//! `"portrait"`. At the default threshold of `0.4` that leaves room for
//! about one typo per short word: `"cat"`/`"car"` (0.33) match, while
//! `"cat"`/`"dog"` (1.0) do not.

use super::scorer::{Scorer, SearchError};
use super::text::{head, normalize, tokens};
use strsim::normalized_damerau_levenshtein;

/// Upper bound on the distance given to partial (substring/prefix) matches.
const PARTIAL_PENALTY: f64 = 0.1;

/// Default acceptance threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Word-level fuzzy scorer.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyScorer {
    threshold: f64,
    case_sensitive: bool,
}

impl FuzzyScorer {
    pub fn new(threshold: f64, case_sensitive: bool) -> Self {
        Self {
            threshold,
            case_sensitive,
        }
    }
}

impl Default for FuzzyScorer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, false)
    }
}

impl Scorer for FuzzyScorer {
    fn score(&self, query: &str, text: &str) -> Result<Option<f64>, SearchError> {
        let query = normalize(query, self.case_sensitive);
        let text = normalize(text, self.case_sensitive);

        let words: Vec<&str> = tokens(&text).collect();
        if words.is_empty() {
            return Ok(None);
        }

        let mut terms = 0usize;
        let mut total = 0.0;
        for term in tokens(&query) {
            terms += 1;
            total += words
                .iter()
                .map(|w| word_distance(term, w))
                .fold(1.0, f64::min);
        }
        if terms == 0 {
            return Ok(None);
        }

        let score = total / terms as f64;
        Ok((score <= self.threshold).then_some(score))
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Distance between one query word and one field word, `0.0..=1.0`.
pub fn word_distance(term: &str, word: &str) -> f64 {
    if term == word {
        return 0.0;
    }

    let term_len = term.chars().count();
    let word_len = word.chars().count();
    let partial = PARTIAL_PENALTY * (1.0 - term_len as f64 / word_len.max(1) as f64);

    if word.contains(term) {
        return partial;
    }

    let whole = 1.0 - normalized_damerau_levenshtein(term, word);
    if word_len > term_len {
        let prefix = 1.0 - normalized_damerau_levenshtein(term, head(word, term_len)) + partial;
        whole.min(prefix)
    } else {
        whole
    }
}
