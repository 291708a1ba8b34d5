//! Favorite-status persistence
//!
//! The id -> favorited map is mirrored server-side; this local copy exists so
//! hearts render correctly at app start, before any network round trip. The
//! feature is non-critical, so the read path never fails (a storage fault
//! shows up as "no favorites") and the write path logs instead of raising.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::LocalStore;
use crate::error::Result;

const FAVORITES_KEY: &str = "favorite_status";

/// Hall id -> favorited map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    entries: HashMap<i64, bool>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_favorite(&self, hall_id: i64) -> bool {
        self.entries.get(&hall_id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, hall_id: i64, favorited: bool) {
        self.entries.insert(hall_id, favorited);
    }

    /// Copy of this map with exactly the one key flipped.
    pub fn toggled(&self, hall_id: i64) -> Self {
        let mut next = self.clone();
        next.set(hall_id, !self.is_favorite(hall_id));
        next
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Persistence for the favorites map
pub struct FavoriteStore<'a> {
    store: &'a LocalStore,
}

impl<'a> FavoriteStore<'a> {
    pub fn new(store: &'a LocalStore) -> Self {
        Self { store }
    }

    /// Load the persisted map.
    ///
    /// Never fails: an absent key, a read error, or corrupt JSON all yield the
    /// empty map (logged at warn level).
    #[instrument(skip(self))]
    pub fn load(&self) -> Favorites {
        let raw = match self.store.get_raw(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Favorites::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read favorite status, starting empty");
                return Favorites::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!(error = %e, "Corrupt favorite status blob, starting empty");
                Favorites::new()
            }
        }
    }

    /// Serialize and persist the full map, overwriting prior contents.
    pub fn try_save(&self, favorites: &Favorites) -> Result<()> {
        let raw = serde_json::to_string(favorites)?;
        self.store.put_raw(FAVORITES_KEY, &raw)?;
        Ok(())
    }

    /// Persist the map, swallowing failures.
    ///
    /// Deliberate one-way boundary: a persistence fault must never block the
    /// favorite flow. The error is logged and the in-memory map stays the
    /// source of truth for the rest of the session.
    #[instrument(skip(self, favorites), fields(entries = favorites.len()))]
    pub fn save(&self, favorites: &Favorites) {
        if let Err(e) = self.try_save(favorites) {
            warn!(error = %e, "Failed to persist favorite status");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_empty_when_unset() {
        let store = LocalStore::open_in_memory().unwrap();
        assert!(store.favorites().load().is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let store = LocalStore::open_in_memory().unwrap();

        let mut favorites = Favorites::new();
        favorites.set(3, true);
        favorites.set(8, false);
        store.favorites().save(&favorites);

        assert_eq!(store.favorites().load(), favorites);
    }

    #[test]
    fn corrupt_blob_loads_as_empty() {
        let store = LocalStore::open_in_memory().unwrap();
        store.put_raw("favorite_status", "not json{").unwrap();

        assert!(store.favorites().load().is_empty());
    }

    #[test]
    fn toggled_flips_exactly_one_key() {
        let mut favorites = Favorites::new();
        favorites.set(1, true);
        favorites.set(2, true);

        let toggled = favorites.toggled(2);
        assert!(toggled.is_favorite(1));
        assert!(!toggled.is_favorite(2));
        // Original untouched
        assert!(favorites.is_favorite(2));

        // Toggling twice restores the original map
        assert_eq!(toggled.toggled(2), favorites);
    }

    #[test]
    fn unknown_id_counts_as_not_favorited() {
        let favorites = Favorites::new();
        assert!(!favorites.is_favorite(42));
        let toggled = favorites.toggled(42);
        assert!(toggled.is_favorite(42));
    }
}
