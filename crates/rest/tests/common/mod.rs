//! Shared test infrastructure for the REST API tests.

use std::sync::Arc;

use axum_test::TestServer;
use pantry_rest::{AppState, ServerConfig};
use pantry_store::{MemoryStore, NewRecipe, Recipe, RecipeStore};
use serde_json::{Value, json};

/// Creates a test server backed by a fresh in-memory store.
///
/// The store is also returned so tests can seed and inspect it directly.
pub async fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let config = ServerConfig::for_testing();

    let state = AppState::new(Arc::clone(&store), config);
    let app = pantry_rest::routing::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, store)
}

/// Seeds a recipe directly through the store, returning the stored record.
pub async fn seed_recipe(store: &MemoryStore, name: &str, ingredients: &[&str]) -> Recipe {
    store
        .create(NewRecipe {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        })
        .await
        .expect("Failed to seed recipe")
}

/// A complete, valid creation payload.
pub fn fried_rice() -> Value {
    json!({
        "name": "Fried Rice",
        "ingredients": ["Rice", "Soy Sauce", "Egg", "Sausage"]
    })
}
