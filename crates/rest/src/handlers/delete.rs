//! Delete handler.
//!
//! Implements the delete operation: `DELETE /recipes/{id}`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantry_store::RecipeStore;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the delete operation.
///
/// Removes the recipe with the given ID. Deleting an ID that matches
/// nothing is a no-op that still answers 204, so the operation is
/// idempotent from the client's point of view.
///
/// # HTTP Request
///
/// `DELETE /recipes/{id}`
///
/// # Response
///
/// - `204 No Content` - Recipe removed, or no recipe had this ID
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: RecipeStore + Send + Sync,
{
    debug!(id = %id, "Processing delete request");

    let removed = state.store().delete(&id).await?;

    if removed {
        debug!(id = %id, "Recipe deleted");
    } else {
        debug!(id = %id, "Delete matched no recipe");
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
