//! Core storage trait.
//!
//! This module defines the [`RecipeStore`] trait, the CRUD contract every
//! storage backend implements. The HTTP layer is generic over this trait so
//! the backend is injected rather than reached through global state.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{NewRecipe, Recipe};

/// Storage contract for the recipe collection.
///
/// The collection is ordered: [`list`](RecipeStore::list) returns records in
/// insertion order, and [`update`](RecipeStore::update) keeps a record's
/// position. Every operation is atomic over the collection; it either fully
/// succeeds or fails with no side effect.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns every stored recipe in insertion order.
    async fn list(&self) -> StoreResult<Vec<Recipe>>;

    /// Looks up a recipe by ID, returning `None` if nothing matches.
    async fn read(&self, id: &str) -> StoreResult<Option<Recipe>>;

    /// Stores a new recipe, assigning it a unique server-generated ID,
    /// and returns the stored record.
    async fn create(&self, new: NewRecipe) -> StoreResult<Recipe>;

    /// Replaces the `name` and `ingredients` of the recipe with the given
    /// ID, keeping the ID and the record's position in the collection.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`](crate::error::StoreError::NotFound) if no
    /// stored recipe has this ID; the collection is left unchanged.
    async fn update(&self, id: &str, new: NewRecipe) -> StoreResult<Recipe>;

    /// Removes the recipe with the given ID.
    ///
    /// Returns `true` if a recipe was removed and `false` if the ID matched
    /// nothing. Removing an absent recipe is not an error; the caller
    /// decides what to make of a no-op.
    async fn delete(&self, id: &str) -> StoreResult<bool>;

    /// Returns the number of stored recipes.
    async fn count(&self) -> StoreResult<usize>;
}
