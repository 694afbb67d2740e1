//! Recomendar: content-based game recommendations in pure Rust.
//!
//! Recomendar turns an item catalog (normalized metadata token bags) into
//! TF-IDF term vectors, precomputes pairwise cosine similarities, derives an
//! implicit preference signal from playtime counters, and blends per-seed
//! neighbor retrieval into one ranked recommendation list.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
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
//! // Item-to-item retrieval by title...
//! let similar = engine.content_recommender("dust racer", 2).unwrap();
//! assert_eq!(similar.entries[0].item_id, 2);
//!
//! // ...and personalized retrieval from playtime history.
//! let personal = engine.user_game_recommendation("ana", 2).unwrap();
//! assert_eq!(personal.outcome, Outcome::Ranked);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`catalog`]: Typed item catalog and interaction tables
//! - [`text`]: Stop words and TF-IDF term vectorization
//! - [`index`]: Precomputed cosine similarity index and neighbor queries
//! - [`signal`]: Playtime-derived implicit preference scoring and seed selection
//! - [`engine`]: Ranked recommendation operations over one immutable snapshot
//!
//! The catalog and interaction tables are immutable inputs for one
//! computation pass; a changed catalog means a full rebuild, swapped in as a
//! new snapshot while in-flight queries finish against the old one.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod index;
pub mod prelude;
pub mod primitives;
pub mod signal;
pub mod text;

pub use engine::{EngineConfig, Outcome, Recommendation, RecommendationEngine, Recommendations};
pub use error::{RecomendarError, Result};
pub use primitives::{Matrix, Vector};
