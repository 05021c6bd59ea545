use serde::{Deserialize, Serialize};

use crate::catalog::{self, Recipe};

/// Liked recipe ids in the order they were first liked. Lives only as long
/// as the running session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `recipe_id` and returns whether it is now liked.
    pub fn toggle(&mut self, recipe_id: &str) -> bool {
        if let Some(position) = self.ids.iter().position(|id| id == recipe_id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.push(recipe_id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.ids.iter().any(|id| id == recipe_id)
    }

    /// Liked recipes joined against the catalog. Ids the catalog does not
    /// know are skipped.
    pub fn list(&self) -> Vec<&'static Recipe> {
        self.ids.iter().filter_map(|id| catalog::find(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_previous_set() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle("1");
        let before = favorites.clone();

        assert!(favorites.toggle("4"));
        assert!(!favorites.toggle("4"));
        assert_eq!(favorites, before);
    }

    #[test]
    fn list_keeps_first_liked_order() {
        let mut favorites = FavoriteSet::new();
        for id in ["5", "2", "3"] {
            favorites.toggle(id);
        }
        favorites.toggle("2");
        favorites.toggle("2");

        let ids: Vec<&str> = favorites.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["5", "3", "2"]);
    }

    #[test]
    fn membership_is_by_id() {
        let mut favorites = FavoriteSet::new();
        let recipe = catalog::find("3").expect("recipe 3");
        favorites.toggle(&recipe.id.to_string());

        assert!(favorites.is_favorite("3"));
        assert!(!favorites.is_favorite("1"));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn unknown_ids_are_not_listed() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle("404");
        assert!(favorites.list().is_empty());
        assert!(!favorites.is_empty());
    }
}
