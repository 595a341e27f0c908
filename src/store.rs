//! In-memory recipe collection keyed by city identifier.

use parking_lot::Mutex;
use std::collections::HashMap;

use crate::error::RecipeLookup;
use crate::models::{Recipe, RecipeId};

#[derive(Debug)]
struct Inner {
    recipes: HashMap<String, Vec<Recipe>>,
    next_id: RecipeId,
}

/// Recipe collection shared by all request handlers.
///
/// A single lock guards both the per-city sequences and the id counter, so
/// concurrent creates always see distinct ids and no update is lost.
#[derive(Debug)]
pub struct RecipeStore {
    inner: Mutex<Inner>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                recipes: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Recipes for a city in insertion order; empty when the city is unknown.
    pub fn list(&self, city_id: &str) -> Vec<Recipe> {
        self.inner
            .lock()
            .recipes
            .get(city_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Appends a recipe under a fresh id and returns the stored record.
    pub fn add(&self, city_id: &str, content: String) -> Recipe {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let recipe = Recipe { id, content };
        inner
            .recipes
            .entry(city_id.to_string())
            .or_default()
            .push(recipe.clone());

        tracing::debug!("Stored recipe {} for city {}", id, city_id);
        recipe
    }

    /// Removes one recipe, keeping the order of the others.
    pub fn remove(&self, city_id: &str, recipe_id: RecipeId) -> Result<Recipe, RecipeLookup> {
        let mut inner = self.inner.lock();
        let recipes = inner
            .recipes
            .get_mut(city_id)
            .ok_or(RecipeLookup::NoRecipesForCity)?;

        let index = recipes
            .iter()
            .position(|r| r.id == recipe_id)
            .ok_or(RecipeLookup::UnknownId)?;

        Ok(recipes.remove(index))
    }

    /// Whether a sequence exists for the city, even an emptied one.
    pub fn has_city(&self, city_id: &str) -> bool {
        self.inner.lock().recipes.contains_key(city_id)
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn ids(recipes: &[Recipe]) -> Vec<RecipeId> {
        recipes.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_list_unknown_city_is_empty() {
        let store = RecipeStore::new();
        assert!(store.list("paris").is_empty());
        assert!(!store.has_city("paris"));
    }

    #[test]
    fn test_add_then_list() {
        let store = RecipeStore::new();
        let first = store.add("paris", "Soupe a l'oignon".to_string());
        let second = store.add("paris", "Boeuf bourguignon".to_string());

        let listed = store.list("paris");
        assert_eq!(listed, vec![first.clone(), second.clone()]);
        assert_ne!(first.id, second.id);
        assert!(store.list("lyon").is_empty());
    }

    #[test]
    fn test_remove_preserves_order() {
        let store = RecipeStore::new();
        let a = store.add("paris", "recipe number a".to_string());
        let b = store.add("paris", "recipe number b".to_string());
        let c = store.add("paris", "recipe number c".to_string());

        let removed = store.remove("paris", b.id).unwrap();
        assert_eq!(removed, b);
        assert_eq!(ids(&store.list("paris")), vec![a.id, c.id]);
    }

    #[test]
    fn test_remove_unknown_city() {
        let store = RecipeStore::new();
        assert_eq!(
            store.remove("paris", 1),
            Err(RecipeLookup::NoRecipesForCity)
        );
    }

    #[test]
    fn test_remove_unknown_id_leaves_store_unchanged() {
        let store = RecipeStore::new();
        let a = store.add("paris", "recipe number a".to_string());

        assert_eq!(store.remove("paris", a.id + 100), Err(RecipeLookup::UnknownId));
        assert_eq!(store.list("paris"), vec![a]);
    }

    #[test]
    fn test_emptied_city_keeps_its_sequence() {
        let store = RecipeStore::new();
        let a = store.add("paris", "recipe number a".to_string());
        store.remove("paris", a.id).unwrap();

        assert!(store.has_city("paris"));
        assert_eq!(store.remove("paris", a.id), Err(RecipeLookup::UnknownId));
    }

    #[test]
    fn test_concurrent_adds_get_distinct_ids() {
        let store = Arc::new(RecipeStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store.add("paris", format!("thread {} recipe {}", t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let listed = store.list("paris");
        assert_eq!(listed.len(), 400);
        let unique: HashSet<_> = listed.iter().map(|r| r.id).collect();
        assert_eq!(unique.len(), 400);
    }
}
