//! Recommendation engine: build-phase orchestration and ranked retrieval.
//!
//! [`RecommendationEngine::build`] runs the whole build phase (catalog
//! validation, term vectorization, similarity matrix) and stores the result
//! as one immutable snapshot behind an [`Arc`]. Every query operation is a
//! pure read of that snapshot, so any number of queries may run concurrently
//! without locking; a rebuild produces a fresh engine whose handle replaces
//! the old one atomically, and in-flight queries finish against the snapshot
//! they started with.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::catalog::{Interaction, Item};
//! use recomendar::engine::{EngineConfig, RecommendationEngine};
//!
//! let items = vec![
//!     Item::new(1, "Dust Racer", ["racing", "arcade", "multiplayer"]),
//!     Item::new(2, "Dust Racer 2", ["racing", "arcade", "drift"]),
//!     Item::new(3, "Castle Siege", ["strategy", "medieval", "singleplayer"]),
//! ];
//! let plays = vec![Interaction::new("ana", 1, 600, 120)];
//!
//! let engine = RecommendationEngine::build(items, plays, EngineConfig::default()).unwrap();
//!
//! let recs = engine.content_recommender("dust racer", 2).unwrap();
//! assert_eq!(recs.entries[0].item_id, 2);
//!
//! let recs = engine.user_game_recommendation("ana", 2).unwrap();
//! assert_eq!(recs.entries[0].item_id, 2);
//! ```

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use crate::catalog::{Catalog, Interaction, InteractionTable, Item};
use crate::error::{RecomendarError, Result};
use crate::index::SimilarityIndex;
use crate::signal::{
    PersonalizationSignal, Seed, SeedSelector, DEFAULT_MAX_SEEDS, DEFAULT_RECENT_CAP_MINUTES,
};
use crate::text::TermVectorizer;

/// Default result count for operations whose caller gives no explicit `k`.
pub const DEFAULT_K: usize = 10;

/// Build-time configuration for the engine.
///
/// # Examples
///
/// ```
/// use recomendar::engine::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_max_seeds(5)
///     .with_recent_cap_minutes(1_000);
/// assert_eq!(config.max_seeds(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    recent_cap_minutes: i64,
    max_seeds: usize,
    default_k: usize,
    stop_words: Option<Vec<String>>,
}

impl EngineConfig {
    /// Cap on the recent playtime counter used by the personalization
    /// signal, in minutes.
    #[must_use]
    pub fn with_recent_cap_minutes(mut self, cap_minutes: i64) -> Self {
        self.recent_cap_minutes = cap_minutes;
        self
    }

    /// Maximum number of seed items per user.
    #[must_use]
    pub fn with_max_seeds(mut self, max_seeds: usize) -> Self {
        self.max_seeds = max_seeds;
        self
    }

    /// Default result count for convenience queries.
    #[must_use]
    pub fn with_default_k(mut self, default_k: usize) -> Self {
        self.default_k = default_k;
        self
    }

    /// Replace the English stop word list used during vectorization.
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// The configured recent cap, in minutes.
    #[must_use]
    pub fn recent_cap_minutes(&self) -> i64 {
        self.recent_cap_minutes
    }

    /// The configured seed count.
    #[must_use]
    pub fn max_seeds(&self) -> usize {
        self.max_seeds
    }

    /// The configured default result count.
    #[must_use]
    pub fn default_k(&self) -> usize {
        self.default_k
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recent_cap_minutes: DEFAULT_RECENT_CAP_MINUTES,
            max_seeds: DEFAULT_MAX_SEEDS,
            default_k: DEFAULT_K,
            stop_words: None,
        }
    }
}

/// How a recommendation list came about.
///
/// `ColdStart` and `NoCandidates` are expected outcomes, not errors; callers
/// branch on them to apply whatever fallback policy they want (for example a
/// popularity-based default list).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Candidates were found and ranked.
    Ranked,
    /// The user has no usable interaction history.
    ColdStart,
    /// Excluding played items removed every candidate.
    NoCandidates,
}

/// One ranked recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Recommended item.
    pub item_id: u64,
    /// Its display title.
    pub title: String,
    /// Ranking score: a cosine similarity, or a seed-weighted blend of them.
    pub score: f64,
}

/// A ranked, deduplicated recommendation list with its outcome tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    /// Entries in rank order (best first).
    pub entries: Vec<Recommendation>,
    /// How the list came about.
    pub outcome: Outcome,
}

impl Recommendations {
    fn ranked(entries: Vec<Recommendation>) -> Self {
        Self {
            entries,
            outcome: Outcome::Ranked,
        }
    }

    fn empty(outcome: Outcome) -> Self {
        Self {
            entries: Vec::new(),
            outcome,
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One immutable build-phase output; queries never mutate it.
#[derive(Debug)]
struct ModelSnapshot {
    catalog: Arc<Catalog>,
    index: SimilarityIndex,
    interactions: InteractionTable,
    selector: SeedSelector,
}

/// Content-based recommendation engine over one catalog snapshot.
///
/// Cloning is a cheap handle copy; clones share the snapshot.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    snapshot: Arc<ModelSnapshot>,
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Run the build phase over the two input tables.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the catalog has duplicate item ids, or the
    /// interaction table has negative playtimes or duplicate
    /// `(user_id, item_id)` pairs.
    pub fn build(
        items: Vec<Item>,
        interactions: Vec<Interaction>,
        config: EngineConfig,
    ) -> Result<Self> {
        let catalog = Arc::new(Catalog::new(items)?);
        let interactions = InteractionTable::new(interactions)?;

        let vectorizer = match &config.stop_words {
            Some(words) => {
                let refs: Vec<&str> = words.iter().map(String::as_str).collect();
                TermVectorizer::new().with_stop_words(&refs)
            }
            None => TermVectorizer::new(),
        };
        let vectors = vectorizer.fit(&catalog);
        let index = SimilarityIndex::build(Arc::clone(&catalog), &vectors)?;

        let selector = SeedSelector::new()
            .with_max_seeds(config.max_seeds)
            .with_signal(
                PersonalizationSignal::new().with_recent_cap(config.recent_cap_minutes),
            );

        Ok(Self {
            snapshot: Arc::new(ModelSnapshot {
                catalog,
                index,
                interactions,
                selector,
            }),
            config,
        })
    }

    /// Build a fresh engine from new tables with this engine's config.
    ///
    /// The returned engine holds a new snapshot; replacing the old handle
    /// with it is the atomic-swap rebuild from the concurrency model.
    ///
    /// # Errors
    ///
    /// Same as [`RecommendationEngine::build`].
    pub fn rebuild(&self, items: Vec<Item>, interactions: Vec<Interaction>) -> Result<Self> {
        Self::build(items, interactions, self.config.clone())
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The catalog snapshot queries run against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.snapshot.catalog
    }

    /// Top-`k` items most similar to the item carrying `title`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no catalog item carries the title.
    pub fn content_recommender(&self, title: &str, k: usize) -> Result<Recommendations> {
        let item_id = self.snapshot.index.resolve_title(title)?;
        self.k_neighbors(item_id, k)
    }

    /// Top-`k` items most similar to `item_id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `item_id` is absent from the catalog.
    pub fn k_neighbors(&self, item_id: u64, k: usize) -> Result<Recommendations> {
        let neighbors = self.snapshot.index.neighbors(item_id, k)?;
        Ok(Recommendations::ranked(self.with_titles(neighbors)?))
    }

    /// Personalized top-`n` recommendations for a user.
    ///
    /// Seeds come from the user's highest-scored interactions; each seed
    /// contributes `ceil(n / num_seeds)` neighbors to the candidate union,
    /// and every candidate is scored against all seeds with the seeds'
    /// normalized personalization scores as weights. Seed items themselves
    /// are never recommended. A user with no usable history gets an empty
    /// list tagged [`Outcome::ColdStart`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` only if stored interactions are malformed;
    /// table validation makes that unreachable in practice.
    pub fn user_game_recommendation(&self, user_id: &str, n: usize) -> Result<Recommendations> {
        self.recommend_for_user(user_id, n, false)
    }

    /// Personalized top-`k` recommendations, optionally excluding every item
    /// the user has already played.
    ///
    /// When exclusion removes every candidate the result is an empty list
    /// tagged [`Outcome::NoCandidates`], not an error. The tag is reported
    /// only when exclusion did the emptying: if the retrieval itself came
    /// back empty (say, a one-item catalog), the empty list stays
    /// [`Outcome::Ranked`].
    ///
    /// # Errors
    ///
    /// Same as [`RecommendationEngine::user_game_recommendation`].
    pub fn make_prediction(
        &self,
        user_id: &str,
        k: usize,
        exclude_played_games: bool,
    ) -> Result<Recommendations> {
        self.recommend_for_user(user_id, k, exclude_played_games)
    }

    /// [`RecommendationEngine::make_prediction`] with the configured default
    /// result count and played items excluded.
    ///
    /// # Errors
    ///
    /// Same as [`RecommendationEngine::make_prediction`].
    pub fn top_picks(&self, user_id: &str) -> Result<Recommendations> {
        self.make_prediction(user_id, self.config.default_k, true)
    }

    fn recommend_for_user(
        &self,
        user_id: &str,
        n: usize,
        exclude_played: bool,
    ) -> Result<Recommendations> {
        let snapshot = &self.snapshot;
        let rows = snapshot.interactions.for_user(user_id);

        // Only items present in the catalog can anchor similarity queries.
        let anchorable: Vec<Interaction> = rows
            .iter()
            .filter(|row| snapshot.catalog.contains(row.item_id))
            .cloned()
            .collect();
        let seeds = snapshot.selector.select(&anchorable)?;
        if seeds.is_empty() {
            return Ok(Recommendations::empty(Outcome::ColdStart));
        }

        let per_seed = n.div_ceil(seeds.len());
        let seed_ids: HashSet<u64> = seeds.iter().map(|s| s.item_id).collect();

        // BTreeSet keeps candidate iteration deterministic.
        let mut retrieved_any = false;
        let mut candidates: BTreeSet<u64> = BTreeSet::new();
        for seed in &seeds {
            for (id, _) in snapshot.index.neighbors(seed.item_id, per_seed)? {
                retrieved_any = true;
                if !seed_ids.contains(&id) {
                    candidates.insert(id);
                }
            }
        }

        if exclude_played {
            let played: HashSet<u64> = rows.iter().map(|row| row.item_id).collect();
            candidates.retain(|id| !played.contains(id));
        }
        if candidates.is_empty() {
            // Exclusion (seed items are played items too) emptied a non-empty
            // retrieval: an expected outcome, not a failure.
            let outcome = if exclude_played && retrieved_any {
                Outcome::NoCandidates
            } else {
                Outcome::Ranked
            };
            return Ok(Recommendations::empty(outcome));
        }

        let weights = seed_weights(&seeds);
        let mut scored: Vec<(u64, f64)> = candidates
            .into_iter()
            .map(|id| {
                let mut blended = 0.0;
                for (seed, weight) in seeds.iter().zip(&weights) {
                    blended += weight * snapshot.index.similarity(id, seed.item_id)?;
                }
                Ok((id, blended))
            })
            .collect::<Result<_>>()?;

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(n);

        Ok(Recommendations::ranked(self.with_titles(scored)?))
    }

    fn with_titles(&self, scored: Vec<(u64, f64)>) -> Result<Vec<Recommendation>> {
        scored
            .into_iter()
            .map(|(item_id, score)| {
                let item = self
                    .snapshot
                    .catalog
                    .get(item_id)
                    .ok_or_else(|| RecomendarError::not_found("item", item_id))?;
                Ok(Recommendation {
                    item_id,
                    title: item.title.clone(),
                    score,
                })
            })
            .collect()
    }
}

/// Normalize seed scores into blend weights summing to 1. Users whose seeds
/// all score zero (no recorded playtime) fall back to uniform weights.
fn seed_weights(seeds: &[Seed]) -> Vec<f64> {
    let total: f64 = seeds.iter().map(|s| s.score).sum();
    if total > 0.0 {
        seeds.iter().map(|s| s.score / total).collect()
    } else {
        vec![1.0 / seeds.len() as f64; seeds.len()]
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
