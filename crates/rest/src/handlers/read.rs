//! Read handler.
//!
//! Implements the read operation: `GET /recipes/{id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantry_store::RecipeStore;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the read operation.
///
/// Reads a single recipe by ID.
///
/// # HTTP Request
///
/// `GET /recipes/{id}`
///
/// # Response
///
/// - `200 OK` - Recipe found, returns the record
/// - `404 Not Found` - No recipe has this ID
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: RecipeStore + Send + Sync,
{
    debug!(id = %id, "Processing read request");

    let recipe = state.store().read(&id).await?;

    match recipe {
        Some(recipe) => {
            debug!(id = %recipe.id, "Returning recipe");
            Ok((StatusCode::OK, Json(recipe)).into_response())
        }
        None => {
            debug!(id = %id, "Recipe not found");
            Err(RestError::NotFound { id })
        }
    }
}
