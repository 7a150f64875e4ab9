//! Text normalization and tokenization shared by the scorers.
//!
//! Pure functions, no allocation beyond the lowercase copy.

use std::borrow::Cow;

/// Fold `text` to lowercase unless matching is case sensitive.
pub fn normalize(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive || !text.chars().any(char::is_uppercase) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

/// Split on anything that is not a letter or digit.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

/// Number of tokens, never less than 1 so it can divide.
pub fn token_count(text: &str) -> usize {
    tokens(text).count().max(1)
}

/// First `n` characters of `s` (char boundary safe).
pub fn head(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_by_default() {
        assert_eq!(normalize("Self Portrait", false), "self portrait");
    }

    #[test]
    fn normalize_borrows_when_nothing_to_fold() {
        assert!(matches!(normalize("ink", false), Cow::Borrowed(_)));
        assert!(matches!(normalize("Ink", true), Cow::Borrowed(_)));
    }

    #[test]
    fn tokens_split_on_punctuation_and_space() {
        let t: Vec<_> = tokens("Harbour at Dusk, 2023 (oil-on-canvas)").collect();
        assert_eq!(t, vec!["Harbour", "at", "Dusk", "2023", "oil", "on", "canvas"]);
    }

    #[test]
    fn tokens_keep_accented_letters() {
        let t: Vec<_> = tokens("Café señal").collect();
        assert_eq!(t, vec!["Café", "señal"]);
    }

    #[test]
    fn token_count_is_at_least_one() {
        assert_eq!(token_count(""), 1);
        assert_eq!(token_count("--"), 1);
        assert_eq!(token_count("a b c"), 3);
    }

    #[test]
    fn head_respects_char_boundaries() {
        assert_eq!(head("señal", 3), "señ");
        assert_eq!(head("ink", 10), "ink");
        assert_eq!(head("ink", 0), "");
    }
}
