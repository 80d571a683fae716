//! Prefix completions for the word currently being typed
//!
//! Matching is case-insensitive against a static ranked dictionary;
//! dictionary position is the ranking. A word never suggests itself.

pub mod dictionary;

pub use dictionary::WORD_DICT;

/// Default number of completions returned
pub const DEFAULT_LIMIT: usize = 5;

/// Ranked prefix-completion engine over a fixed dictionary
#[derive(Debug, Clone)]
pub struct Recommender {
    words: Vec<String>,
}

impl Recommender {
    /// Create a recommender over a custom dictionary (order is rank)
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Completions for `partial`, at most `limit`, in dictionary order
    ///
    /// Case-insensitive prefix match; an entry equal to the query is
    /// excluded. An empty or whitespace-only partial word yields nothing.
    #[must_use]
    pub fn recommend(&self, partial: &str, limit: usize) -> Vec<String> {
        let query = partial.trim().to_uppercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.words
            .iter()
            .filter(|w| w.to_uppercase().starts_with(&query) && w.to_uppercase() != query)
            .take(limit)
            .cloned()
            .collect()
    }
}

impl Default for Recommender {
    /// Recommender over the built-in dictionary
    fn default() -> Self {
        Self::new(WORD_DICT.iter().map(ToString::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommender(words: &[&str]) -> Recommender {
        Recommender::new(words.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn matches_in_dictionary_order() {
        let rec = recommender(&["HELLO", "HELP", "HEY", "HELLOW"]);
        assert_eq!(
            rec.recommend("HE", 5),
            vec!["HELLO", "HELP", "HEY", "HELLOW"]
        );
    }

    #[test]
    fn limit_truncates() {
        let rec = recommender(&["HELLO", "HELP", "HEY", "HELLOW"]);
        assert_eq!(rec.recommend("HE", 2), vec!["HELLO", "HELP"]);
    }

    #[test]
    fn exact_match_excluded_from_own_suggestions() {
        let rec = recommender(&["HELLO", "HELLOW"]);
        assert_eq!(rec.recommend("HELLO", 5), vec!["HELLOW"]);
    }

    #[test]
    fn empty_partial_yields_nothing() {
        let rec = Recommender::default();
        assert!(rec.recommend("", 5).is_empty());
        assert!(rec.recommend("   ", 5).is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rec = recommender(&["HELLO"]);
        assert_eq!(rec.recommend("he", 5), vec!["HELLO"]);
    }

    #[test]
    fn builtin_dictionary_completes_phrases() {
        let rec = Recommender::default();
        let recs = rec.recommend("I NEED", 5);
        assert!(recs.contains(&"I NEED HELP".to_string()));
        assert!(recs.contains(&"I NEED WATER".to_string()));
    }
}
