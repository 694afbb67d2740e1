//! Typed input tables: the item catalog and the user interaction table.
//!
//! Both tables are validated once at construction and immutable afterwards.
//! A changed catalog requires a full rebuild of the downstream index; there
//! are no partial updates.
//!
//! # Examples
//!
//! ```
//! use recomendar::catalog::{Catalog, Item};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new(10, "Dust Racer", ["racing", "arcade"]),
//!     Item::new(20, "Castle Siege", ["strategy", "medieval"]),
//! ]).expect("unique item ids");
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.title_to_id("dust racer"), Some(10));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{RecomendarError, Result};

/// One catalog row: an item with its normalized metadata token bag.
///
/// Tokens are expected lowercase without internal whitespace (the "soup"
/// produced by the ingestion collaborator from genre, tag, publisher, and
/// developer fields). An item with an empty token bag is valid but yields an all-zero
/// term vector and can never anchor a similarity query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique integer key.
    pub item_id: u64,
    /// Display title; not guaranteed unique across the catalog.
    pub title: String,
    /// Normalized metadata tokens.
    pub tokens: Vec<String>,
}

impl Item {
    /// Creates an item from an id, title, and token bag.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::catalog::Item;
    ///
    /// let item = Item::new(1, "Dust Racer", ["racing", "arcade"]);
    /// assert_eq!(item.tokens.len(), 2);
    /// ```
    pub fn new<T, I, S>(item_id: u64, title: T, tokens: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            item_id,
            title: title.into(),
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }
}

/// One interaction row: a user-item pair with playtime counters in minutes.
///
/// Playtimes are signed so that out-of-range values arriving from ingestion
/// can be detected and rejected instead of silently wrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// User identifier.
    pub user_id: String,
    /// Item key; may reference items absent from the current catalog.
    pub item_id: u64,
    /// Lifetime playtime, minutes.
    pub playtime_forever: i64,
    /// Recent (two-week window) playtime, minutes.
    pub playtime_2weeks: i64,
}

impl Interaction {
    /// Creates an interaction row.
    pub fn new(
        user_id: impl Into<String>,
        item_id: u64,
        playtime_forever: i64,
        playtime_2weeks: i64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            item_id,
            playtime_forever,
            playtime_2weeks,
        }
    }
}

/// Immutable item catalog snapshot.
///
/// Validates `item_id` uniqueness at construction and precomputes the
/// id-to-position and lowercased-title-to-id maps used by the index.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    positions: HashMap<u64, usize>,
    titles: HashMap<String, u64>,
}

impl Catalog {
    /// Builds a catalog from item rows.
    ///
    /// Duplicate titles are allowed; title resolution picks the lowest
    /// `item_id` among them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if two rows share an `item_id`.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(items.len());
        let mut titles: HashMap<String, u64> = HashMap::new();

        for (pos, item) in items.iter().enumerate() {
            if positions.insert(item.item_id, pos).is_some() {
                return Err(RecomendarError::invalid_input(
                    "item_id",
                    item.item_id,
                    "unique across the catalog",
                ));
            }
            titles
                .entry(item.title.to_lowercase())
                .and_modify(|id| *id = (*id).min(item.item_id))
                .or_insert(item.item_id);
        }

        Ok(Self {
            items,
            positions,
            titles,
        })
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item by id.
    #[must_use]
    pub fn get(&self, item_id: u64) -> Option<&Item> {
        self.positions.get(&item_id).map(|&pos| &self.items[pos])
    }

    /// Dense position of an item in the catalog, if present.
    #[must_use]
    pub fn position(&self, item_id: u64) -> Option<usize> {
        self.positions.get(&item_id).copied()
    }

    /// Item at a dense position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn item_at(&self, pos: usize) -> &Item {
        &self.items[pos]
    }

    /// Returns true if the catalog contains `item_id`.
    #[must_use]
    pub fn contains(&self, item_id: u64) -> bool {
        self.positions.contains_key(&item_id)
    }

    /// Case-insensitive exact title lookup. Duplicate titles resolve to the
    /// lowest `item_id`.
    #[must_use]
    pub fn title_to_id(&self, title: &str) -> Option<u64> {
        self.titles.get(&title.to_lowercase()).copied()
    }
}

/// Immutable interaction table snapshot, grouped by user.
///
/// Validates at construction that playtimes are non-negative and that each
/// `(user_id, item_id)` pair appears at most once; deduplication is the
/// ingestion collaborator's job, so duplicates here are malformed input.
#[derive(Debug, Clone)]
pub struct InteractionTable {
    by_user: HashMap<String, Vec<Interaction>>,
    n_rows: usize,
}

impl InteractionTable {
    /// Builds the table from interaction rows.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` on a negative playtime or a repeated
    /// `(user_id, item_id)` pair.
    pub fn new(rows: Vec<Interaction>) -> Result<Self> {
        let n_rows = rows.len();
        let mut by_user: HashMap<String, Vec<Interaction>> = HashMap::new();

        for row in rows {
            if row.playtime_forever < 0 {
                return Err(RecomendarError::invalid_input(
                    "playtime_forever",
                    row.playtime_forever,
                    ">= 0",
                ));
            }
            if row.playtime_2weeks < 0 {
                return Err(RecomendarError::invalid_input(
                    "playtime_2weeks",
                    row.playtime_2weeks,
                    ">= 0",
                ));
            }
            by_user.entry(row.user_id.clone()).or_default().push(row);
        }

        for rows in by_user.values_mut() {
            rows.sort_by_key(|r| r.item_id);
            if rows.windows(2).any(|w| w[0].item_id == w[1].item_id) {
                return Err(RecomendarError::invalid_input(
                    "(user_id, item_id)",
                    format!("user {}", rows[0].user_id),
                    "at most one row per pair",
                ));
            }
        }

        Ok(Self { by_user, n_rows })
    }

    /// A user's interaction rows, ordered by `item_id`. Empty for unknown
    /// users (the cold-start case).
    #[must_use]
    pub fn for_user(&self, user_id: &str) -> &[Interaction] {
        self.by_user.get(user_id).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct users.
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.by_user.len()
    }

    /// Total number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
