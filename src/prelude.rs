//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::catalog::{Catalog, Interaction, InteractionTable, Item};
pub use crate::engine::{
    EngineConfig, Outcome, Recommendation, RecommendationEngine, Recommendations,
};
pub use crate::error::{RecomendarError, Result};
pub use crate::index::SimilarityIndex;
pub use crate::primitives::{Matrix, Vector};
pub use crate::signal::{PersonalizationSignal, Seed, SeedSelector};
pub use crate::text::{StopWordsFilter, TermVectorizer, TermVectors};
