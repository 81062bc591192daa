//! Favorite storage
//!
//! Owns the named payment templates. Favorites are read-only after
//! creation and never deleted, so the store only needs insertion and
//! lookup. Duplicate IDs (seen when merging persisted dumps) keep the
//! first occurrence, same as the payment store.

use crate::types::Favorite;
use std::collections::HashMap;

/// Owns the set of favorites
pub struct FavoriteStore {
    /// Favorites in insertion order
    favorites: Vec<Favorite>,
    /// Favorite ID to position in `favorites`
    by_id: HashMap<String, usize>,
}

impl FavoriteStore {
    /// Create a new empty favorite store
    pub fn new() -> Self {
        FavoriteStore {
            favorites: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Insert a favorite, ignoring it if its ID is already present
    ///
    /// Returns whether the favorite was actually added.
    pub fn insert(&mut self, favorite: Favorite) -> bool {
        if self.by_id.contains_key(&favorite.id) {
            return false;
        }
        let pos = self.favorites.len();
        self.by_id.insert(favorite.id.clone(), pos);
        self.favorites.push(favorite);
        true
    }

    /// Get a favorite by ID
    pub fn get(&self, favorite_id: &str) -> Option<&Favorite> {
        self.by_id.get(favorite_id).map(|&pos| &self.favorites[pos])
    }

    /// All favorites in insertion order
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    /// Number of stored favorites
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    /// Whether the store holds no favorites
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}

impl Default for FavoriteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(id: &str) -> Favorite {
        Favorite {
            id: id.to_string(),
            account_id: 1,
            name: "lunch".to_string(),
            amount: 10,
            category: "Food".to_string(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = FavoriteStore::new();
        assert!(store.insert(favorite("f-1")));
        assert_eq!(store.get("f-1").unwrap().name, "lunch");
        assert!(store.get("f-2").is_none());
    }

    #[test]
    fn test_duplicate_id_first_wins() {
        let mut store = FavoriteStore::new();
        store.insert(favorite("f-1"));

        let mut other = favorite("f-1");
        other.name = "dinner".to_string();
        assert!(!store.insert(other));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("f-1").unwrap().name, "lunch");
    }
}
