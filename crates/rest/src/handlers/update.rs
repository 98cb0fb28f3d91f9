//! Update handler.
//!
//! Implements the update operation: `PUT /recipes/{id}`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantry_store::RecipeStore;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::RecipeBody;
use crate::state::AppState;

/// Handler for the update operation.
///
/// Replaces the `name` and `ingredients` of an existing recipe. The ID and
/// the record's position in the collection are preserved. Every failure
/// leaves the collection unchanged.
///
/// # HTTP Request
///
/// `PUT /recipes/{id}`
///
/// # Response
///
/// - `204 No Content` - Recipe replaced
/// - `400 Bad Request` - No recipe has this ID, the body ID does not match
///   the URL, or the replacement fields fail validation
///
/// # Example
///
/// ```http
/// PUT /recipes/7f9c HTTP/1.1
/// Host: pantry.example.com
/// Content-Type: application/json
///
/// {"id": "7f9c", "name": "Fried Rice", "ingredients": ["Rice", "Egg"]}
/// ```
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    RecipeBody(draft): RecipeBody,
) -> RestResult<Response>
where
    S: RecipeStore + Send + Sync,
{
    debug!(id = %id, "Processing update request");

    // Validate ID in body matches URL (if present)
    if let Some(body_id) = draft.id.as_deref() {
        if body_id != id {
            return Err(RestError::BadRequest {
                message: format!(
                    "Recipe ID in body ({}) does not match URL ({})",
                    body_id, id
                ),
            });
        }
    }

    let new = draft.validate()?;

    state.store().update(&id, new).await?;

    debug!(id = %id, "Recipe replaced");

    Ok(StatusCode::NO_CONTENT.into_response())
}
