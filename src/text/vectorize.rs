//! TF-IDF term vectorization of catalog item metadata.
//!
//! Each item's token bag becomes one L2-normalized weight vector over a
//! shared, deterministically ordered vocabulary. The vectorizer is a pure
//! function of the catalog: same input, same vocabulary, same vectors.
//!
//! # Examples
//!
//! ```
//! use recomendar::catalog::{Catalog, Item};
//! use recomendar::text::TermVectorizer;
//!
//! let catalog = Catalog::new(vec![
//!     Item::new(1, "Dust Racer", ["racing", "arcade"]),
//!     Item::new(2, "Dust Racer 2", ["racing", "open-world"]),
//! ]).unwrap();
//!
//! let vectors = TermVectorizer::new().fit(&catalog);
//! assert_eq!(vectors.n_items(), 2);
//! assert_eq!(vectors.vocabulary(), &["arcade", "open-world", "racing"]);
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::catalog::Catalog;
use crate::primitives::Vector;
use crate::text::stopwords::StopWordsFilter;

/// Builds TF-IDF term vectors from catalog token bags.
///
/// Weighting per term `t` and item `d`:
///
/// ```text
/// tf(t, d) = raw count of t in d's tokens
/// idf(t)   = ln((1 + N) / (1 + df(t))) + 1      (smoothed, always > 0)
/// w(t, d)  = tf(t, d) * idf(t)
/// ```
///
/// Rows are L2-normalized; an item whose tokens are all filtered out (or
/// empty to begin with) gets an all-zero vector, silently.
#[derive(Debug, Clone)]
pub struct TermVectorizer {
    stop_words: Option<StopWordsFilter>,
}

impl TermVectorizer {
    /// Create a vectorizer with the default English stop word list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stop_words: Some(StopWordsFilter::english()),
        }
    }

    /// Use a custom stop word list.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(StopWordsFilter::new(words));
        self
    }

    /// Disable stop word filtering entirely.
    #[must_use]
    pub fn without_stop_words(mut self) -> Self {
        self.stop_words = None;
        self
    }

    fn keep(&self, token: &str) -> bool {
        self.stop_words
            .as_ref()
            .map_or(true, |sw| !sw.is_stop_word(token))
    }

    /// Vectorize every item in the catalog.
    ///
    /// Pure function of the catalog; never fails. The vocabulary is the set
    /// of distinct non-stop tokens, sorted, so vector indices are
    /// reproducible across runs.
    #[must_use]
    pub fn fit(&self, catalog: &Catalog) -> TermVectors {
        let n_docs = catalog.len();

        // Sorted vocabulary with document frequencies.
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for item in catalog.items() {
            let mut seen: Vec<&str> = item
                .tokens
                .iter()
                .map(String::as_str)
                .filter(|t| self.keep(t))
                .collect();
            seen.sort_unstable();
            seen.dedup();
            for token in seen {
                *doc_freq.entry(token).or_insert(0) += 1;
            }
        }

        let vocabulary: Vec<String> = doc_freq.keys().map(|&t| t.to_string()).collect();
        let term_index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(idx, t)| (t.as_str(), idx))
            .collect();

        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|t| {
                let df = doc_freq[t.as_str()];
                ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0
            })
            .collect();

        let vectors: Vec<Vector<f64>> = catalog
            .items()
            .iter()
            .map(|item| {
                let mut weights = vec![0.0; vocabulary.len()];
                for token in &item.tokens {
                    if let Some(&idx) = term_index.get(token.as_str()) {
                        weights[idx] += idf[idx];
                    }
                }
                let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for w in &mut weights {
                        *w /= norm;
                    }
                }
                Vector::from_vec(weights)
            })
            .collect();

        TermVectors {
            vocabulary,
            vectors,
        }
    }
}

impl Default for TermVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// The vectorizer's output: the shared vocabulary and one vector per item,
/// in catalog order.
#[derive(Debug, Clone)]
pub struct TermVectors {
    vocabulary: Vec<String>,
    vectors: Vec<Vector<f64>>,
}

impl TermVectors {
    /// The shared vocabulary, sorted.
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Number of vocabulary terms.
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of item vectors.
    #[must_use]
    pub fn n_items(&self) -> usize {
        self.vectors.len()
    }

    /// Vector for the item at catalog position `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn vector(&self, pos: usize) -> &Vector<f64> {
        &self.vectors[pos]
    }

    /// All vectors, in catalog order.
    #[must_use]
    pub fn vectors(&self) -> &[Vector<f64>] {
        &self.vectors
    }

    /// True if the item at `pos` produced an all-zero vector (empty or fully
    /// filtered token bag).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn is_zero(&self, pos: usize) -> bool {
        self.vectors[pos].is_zero()
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;
