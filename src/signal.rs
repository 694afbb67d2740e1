//! Implicit preference scoring from playtime, and seed selection.
//!
//! Playtime distributions are heavy-tailed, so raw minutes make poor
//! preference scores; a log transform stabilizes them, and the recent
//! two-week counter is capped first so a short-window binge cannot dominate
//! seed selection.
//!
//! # Examples
//!
//! ```
//! use recomendar::signal::{PersonalizationSignal, DEFAULT_RECENT_CAP_MINUTES};
//!
//! let signal = PersonalizationSignal::new();
//! let score = signal.score(500, 100).unwrap();
//! assert!((score - ((501.0f64).ln() + (101.0f64).ln())).abs() < 1e-12);
//!
//! // Anything past the cap scores the same as the cap itself.
//! assert_eq!(
//!     signal.score(0, DEFAULT_RECENT_CAP_MINUTES).unwrap(),
//!     signal.score(0, 100_000).unwrap(),
//! );
//! ```

use crate::catalog::Interaction;
use crate::error::{RecomendarError, Result};

/// Default cap on the recent playtime counter: 3 hours a day over the
/// two-week window.
pub const DEFAULT_RECENT_CAP_MINUTES: i64 = 14 * 3 * 60;

/// Default number of seed items representing a user's interests.
pub const DEFAULT_MAX_SEEDS: usize = 3;

/// Maps playtime counters to a scalar implicit-preference score.
///
/// `score = ln(1 + playtime_forever) + ln(1 + min(playtime_2weeks, cap))`,
/// monotonic non-decreasing in both inputs.
#[derive(Debug, Clone)]
pub struct PersonalizationSignal {
    recent_cap: i64,
}

impl PersonalizationSignal {
    /// Create a signal with the default recent cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            recent_cap: DEFAULT_RECENT_CAP_MINUTES,
        }
    }

    /// Override the recent playtime cap, in minutes.
    #[must_use]
    pub fn with_recent_cap(mut self, cap_minutes: i64) -> Self {
        self.recent_cap = cap_minutes;
        self
    }

    /// The configured recent cap, in minutes.
    #[must_use]
    pub fn recent_cap(&self) -> i64 {
        self.recent_cap
    }

    /// Score one user-item interaction.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either playtime is negative.
    pub fn score(&self, playtime_forever: i64, playtime_2weeks: i64) -> Result<f64> {
        if playtime_forever < 0 {
            return Err(RecomendarError::invalid_input(
                "playtime_forever",
                playtime_forever,
                ">= 0",
            ));
        }
        if playtime_2weeks < 0 {
            return Err(RecomendarError::invalid_input(
                "playtime_2weeks",
                playtime_2weeks,
                ">= 0",
            ));
        }
        let capped_recent = playtime_2weeks.min(self.recent_cap);
        Ok((1.0 + playtime_forever as f64).ln() + (1.0 + capped_recent as f64).ln())
    }
}

impl Default for PersonalizationSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// An item selected to represent a user's current interests.
#[derive(Debug, Clone, PartialEq)]
pub struct Seed {
    /// The seed item.
    pub item_id: u64,
    /// Its implicit-preference score.
    pub score: f64,
}

/// Picks a user's most representative items as query seeds.
#[derive(Debug, Clone)]
pub struct SeedSelector {
    max_seeds: usize,
    signal: PersonalizationSignal,
}

impl SeedSelector {
    /// Create a selector with the default seed count and signal.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_seeds: DEFAULT_MAX_SEEDS,
            signal: PersonalizationSignal::new(),
        }
    }

    /// Override the maximum number of seeds.
    #[must_use]
    pub fn with_max_seeds(mut self, max_seeds: usize) -> Self {
        self.max_seeds = max_seeds;
        self
    }

    /// Use a custom personalization signal.
    #[must_use]
    pub fn with_signal(mut self, signal: PersonalizationSignal) -> Self {
        self.signal = signal;
        self
    }

    /// Select up to `max_seeds` seeds from a user's interaction rows.
    ///
    /// Ordered by score descending, ties broken by ascending `item_id`. An
    /// empty input produces an empty output; that cold-start condition is
    /// the caller's to surface.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any row carries a negative playtime.
    pub fn select(&self, interactions: &[Interaction]) -> Result<Vec<Seed>> {
        let mut seeds = interactions
            .iter()
            .map(|row| {
                let score = self.signal.score(row.playtime_forever, row.playtime_2weeks)?;
                Ok(Seed {
                    item_id: row.item_id,
                    score,
                })
            })
            .collect::<Result<Vec<Seed>>>()?;

        seeds.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.item_id.cmp(&b.item_id))
        });
        seeds.truncate(self.max_seeds);
        Ok(seeds)
    }
}

impl Default for SeedSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
