//! Route configuration.
//!
//! Defines all routes for the recipe REST API.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use pantry_store::RecipeStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all recipe API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
///
/// ## Collection-level
/// - `GET /recipes` - List
/// - `POST /recipes` - Create
///
/// ## Instance-level
/// - `GET /recipes/{id}` - Read
/// - `PUT /recipes/{id}` - Update
/// - `DELETE /recipes/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: RecipeStore + Send + Sync + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S>))
        // Collection-level routes
        .route("/recipes", get(handlers::list_handler::<S>))
        .route("/recipes", post(handlers::create_handler::<S>))
        // Instance-level routes
        .route("/recipes/{id}", get(handlers::read_handler::<S>))
        .route("/recipes/{id}", put(handlers::update_handler::<S>))
        .route("/recipes/{id}", delete(handlers::delete_handler::<S>))
        // State
        .with_state(state)
}
