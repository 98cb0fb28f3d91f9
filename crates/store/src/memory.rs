//! In-memory storage backend.
//!
//! [`MemoryStore`] keeps the whole collection in a `Vec` behind a
//! `parking_lot::RwLock`. Insertion order is list order. Nothing survives a
//! process restart.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::core::RecipeStore;
use crate::error::{StoreError, StoreResult};
use crate::types::{NewRecipe, Recipe};

/// In-memory recipe store.
///
/// The collection starts empty and lives for the lifetime of the process.
/// The lock is never held across an await point.
#[derive(Debug, Default)]
pub struct MemoryStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> StoreResult<Vec<Recipe>> {
        Ok(self.recipes.read().clone())
    }

    async fn read(&self, id: &str) -> StoreResult<Option<Recipe>> {
        Ok(self.recipes.read().iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, new: NewRecipe) -> StoreResult<Recipe> {
        let recipe = Recipe {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            ingredients: new.ingredients,
        };

        self.recipes.write().push(recipe.clone());

        debug!(id = %recipe.id, name = %recipe.name, "Recipe stored");

        Ok(recipe)
    }

    async fn update(&self, id: &str, new: NewRecipe) -> StoreResult<Recipe> {
        let mut recipes = self.recipes.write();

        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        recipe.name = new.name;
        recipe.ingredients = new.ingredients;
        let updated = recipe.clone();
        drop(recipes);

        debug!(id = %id, "Recipe replaced");

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut recipes = self.recipes.write();
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        let removed = recipes.len() < before;
        drop(recipes);

        debug!(id = %id, removed, "Delete processed");

        Ok(removed)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.recipes.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_recipe(name: &str) -> NewRecipe {
        NewRecipe {
            name: name.to_string(),
            ingredients: vec!["Water".to_string(), "Salt".to_string()],
        }
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let store = MemoryStore::new();

        let first = store.create(new_recipe("Broth")).await.unwrap();
        let second = store.create(new_recipe("Broth")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();

        store.create(new_recipe("First")).await.unwrap();
        store.create(new_recipe("Second")).await.unwrap();
        store.create(new_recipe("Third")).await.unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_read_finds_stored_recipe() {
        let store = MemoryStore::new();
        let stored = store.create(new_recipe("Broth")).await.unwrap();

        let found = store.read(&stored.id).await.unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn test_read_unknown_id_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.read("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_in_place() {
        let store = MemoryStore::new();
        let first = store.create(new_recipe("First")).await.unwrap();
        store.create(new_recipe("Second")).await.unwrap();

        let updated = store
            .update(
                &first.id,
                NewRecipe {
                    name: "Revised".to_string(),
                    ingredients: vec!["Stock".to_string()],
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.name, "Revised");

        // Same position, same id, new fields.
        let listed = store.list().await.unwrap();
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[0].name, "Revised");
        assert_eq!(listed[0].ingredients, ["Stock"]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_leaves_collection_unchanged() {
        let store = MemoryStore::new();
        let stored = store.create(new_recipe("Broth")).await.unwrap();

        let err = store
            .update("missing", new_recipe("Other"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id } if id == "missing"));

        assert_eq!(store.list().await.unwrap(), vec![stored]);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_the_matching_recipe() {
        let store = MemoryStore::new();
        let first = store.create(new_recipe("First")).await.unwrap();
        let second = store.create(new_recipe("Second")).await.unwrap();

        assert!(store.delete(&first.id).await.unwrap());

        let remaining = store.list().await.unwrap();
        assert_eq!(remaining, vec![second]);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_a_noop() {
        let store = MemoryStore::new();
        store.create(new_recipe("Broth")).await.unwrap();

        assert!(!store.delete("missing").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
