//! Cosine similarity index over catalog term vectors.
//!
//! The index precomputes the full symmetric N×N similarity matrix once per
//! catalog snapshot and answers neighbor queries against it without locking;
//! every query is a pure read. The dense matrix is fine for catalogs in the
//! tens of thousands; an approximate nearest-neighbor structure could serve
//! the same [`SimilarityIndex::neighbors`] contract if the catalog outgrows
//! it, as long as it preserves the tie-break and self-exclusion rules.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use recomendar::catalog::{Catalog, Item};
//! use recomendar::index::SimilarityIndex;
//! use recomendar::text::TermVectorizer;
//!
//! let catalog = Arc::new(Catalog::new(vec![
//!     Item::new(1, "Dust Racer", ["racing", "arcade"]),
//!     Item::new(2, "Dust Racer 2", ["racing", "arcade", "drift"]),
//!     Item::new(3, "Castle Siege", ["strategy", "medieval"]),
//! ]).unwrap());
//!
//! let vectors = TermVectorizer::new().fit(&catalog);
//! let index = SimilarityIndex::build(Arc::clone(&catalog), &vectors).unwrap();
//!
//! let neighbors = index.neighbors(1, 2).unwrap();
//! assert_eq!(neighbors[0].0, 2); // the sequel, not the query item
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

use rayon::prelude::*;

use crate::catalog::Catalog;
use crate::error::{RecomendarError, Result};
use crate::primitives::Matrix;
use crate::text::TermVectors;

/// Precomputed pairwise cosine similarities with id/title resolution.
///
/// Immutable once built; see [`crate::engine::RecommendationEngine`] for the
/// snapshot-swap rebuild pattern.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    catalog: Arc<Catalog>,
    matrix: Matrix<f64>,
}

impl SimilarityIndex {
    /// Build the full similarity matrix for a catalog snapshot.
    ///
    /// Vectors are already L2-normalized, so each entry is a plain dot
    /// product, clamped into `[0, 1]` against floating-point drift. Items
    /// with bit-identical non-zero vectors (identical token bags) score
    /// exactly 1 without going through the dot product, whose rounding can
    /// land a hair below 1. The diagonal is 1 for items with a non-zero
    /// vector and 0 for zero-vector items, which also score 0 against
    /// everything else. Rows are computed in parallel; there is no ordering
    /// dependency between pairs.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the vector table and catalog disagree
    /// on item count.
    pub fn build(catalog: Arc<Catalog>, vectors: &TermVectors) -> Result<Self> {
        if vectors.n_items() != catalog.len() {
            return Err(RecomendarError::DimensionMismatch {
                expected: format!("catalog={}", catalog.len()),
                actual: format!("vectors={}", vectors.n_items()),
            });
        }

        let n = catalog.len();
        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                let vi = vectors.vector(i);
                let zero = vectors.is_zero(i);
                (0..n)
                    .map(|j| {
                        if zero {
                            0.0
                        } else if i == j {
                            1.0
                        } else {
                            let vj = vectors.vector(j);
                            // Equal vectors must score exactly 1; the dot
                            // product can round below it. The check is
                            // symmetric, so the matrix stays symmetric.
                            if vi == vj {
                                1.0
                            } else {
                                vi.dot(vj).clamp(0.0, 1.0)
                            }
                        }
                    })
                    .collect()
            })
            .collect();

        let matrix = Matrix::from_rows(rows).map_err(RecomendarError::from)?;
        Ok(Self { catalog, matrix })
    }

    fn require_position(&self, item_id: u64) -> Result<usize> {
        self.catalog
            .position(item_id)
            .ok_or_else(|| RecomendarError::not_found("item", item_id))
    }

    /// Cosine similarity between two items.
    ///
    /// Zero-vector items score 0 against everything, themselves included.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if either id is absent from the catalog.
    pub fn similarity(&self, i: u64, j: u64) -> Result<f64> {
        let pi = self.require_position(i)?;
        let pj = self.require_position(j)?;
        Ok(self.matrix.get(pi, pj))
    }

    /// Case-insensitive exact title resolution. Duplicate titles resolve to
    /// the lowest `item_id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no item carries the title.
    pub fn resolve_title(&self, title: &str) -> Result<u64> {
        self.catalog
            .title_to_id(title)
            .ok_or_else(|| RecomendarError::not_found("title", title))
    }

    /// The `k` most similar items to `item_id`, excluding the item itself.
    ///
    /// Ordered by similarity descending, ties broken by ascending `item_id`.
    /// Returns fewer than `k` entries only when the catalog minus the query
    /// item is smaller than `k`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `item_id` is absent from the catalog.
    pub fn neighbors(&self, item_id: u64, k: usize) -> Result<Vec<(u64, f64)>> {
        let pos = self.require_position(item_id)?;

        let mut scored: Vec<(u64, f64)> = self
            .catalog
            .items()
            .iter()
            .enumerate()
            .filter(|&(p, _)| p != pos)
            .map(|(p, item)| (item.item_id, self.matrix.get(pos, p)))
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(k);
        Ok(scored)
    }

    /// Number of indexed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Returns true if the index covers no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// The catalog snapshot this index was built from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "proptests.rs"]
mod proptests;
