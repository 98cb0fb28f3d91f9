//! List handler.
//!
//! Implements the list operation: `GET /recipes`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantry_store::RecipeStore;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the list operation.
///
/// Returns every stored recipe in insertion order. No side effects.
///
/// # HTTP Request
///
/// `GET /recipes`
///
/// # Response
///
/// - `200 OK` - JSON array of recipes (possibly empty)
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: RecipeStore + Send + Sync,
{
    debug!("Processing list request");

    let recipes = state.store().list().await?;

    debug!(count = recipes.len(), "Returning recipe list");

    Ok((StatusCode::OK, Json(recipes)).into_response())
}
