//! Stop words filtering for metadata tokens.
//!
//! Stop words are common words (like "the", "and", "of") that carry little
//! semantic meaning; dropping them from the metadata soup keeps the
//! vocabulary focused on genre/tag terms that actually discriminate items.
//!
//! # Examples
//!
//! ```
//! use recomendar::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//! assert!(filter.is_stop_word("the"));
//! assert!(!filter.is_stop_word("roguelike"));
//! ```

use std::collections::HashSet;

/// Stop words filter with O(1) case-insensitive membership checks.
///
/// # Examples
///
/// ```
/// use recomendar::text::stopwords::StopWordsFilter;
///
/// let filter = StopWordsFilter::new(["early", "access"]);
/// let tokens = vec!["early", "access", "survival"];
/// let kept: Vec<&str> = tokens.iter().copied().filter(|t| !filter.is_stop_word(t)).collect();
/// assert_eq!(kept, vec!["survival"]);
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Stored lowercase for case-insensitive matching.
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter with custom stop words (converted to lowercase).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();
        Self { stop_words }
    }

    /// Create a filter with the default English stop word list.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Case-insensitive stop word check.
    #[must_use]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(&token.to_lowercase())
    }

    /// Filter stop words from a list of tokens, preserving order and case.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.as_ref().to_string())
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Returns true if the filter has no stop words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Default English stop words (common words from the NLTK/sklearn lists).
///
/// # Examples
///
/// ```
/// use recomendar::text::stopwords::ENGLISH_STOP_WORDS;
///
/// assert!(ENGLISH_STOP_WORDS.contains(&"the"));
/// assert!(!ENGLISH_STOP_WORDS.contains(&"multiplayer"));
/// ```
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    // question words
    "what", "which", "who", "whom", "whose", "why", "when", "where", "how",
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "down", "during", "for",
    "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out", "outside", "over",
    "through", "throughout", "to", "toward", "under", "underneath", "until", "up", "upon",
    "with", "within", "without",
    // conjunctions
    "and", "as", "because", "but", "if", "or", "since", "so", "than", "that", "though",
    "unless", "while",
    // auxiliary verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "would", "should", "could", "ought", "can", "may", "might",
    "must", "will", "shall",
    // determiners and common adverbs
    "all", "any", "both", "each", "every", "few", "more", "most", "much", "neither", "no",
    "none", "not", "one", "other", "same", "several", "some", "such", "very", "too", "only",
    "own", "then", "there", "these", "this", "those", "just", "now", "here",
    // frequent fillers
    "again", "also", "another", "back", "even", "ever", "get", "give", "go", "got", "made",
    "make", "say", "see", "take", "way",
];

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
