//! Create handler.
//!
//! Implements the create operation: `POST /recipes`

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use pantry_store::RecipeStore;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::RecipeBody;
use crate::state::AppState;

/// Handler for the create operation.
///
/// Validates the payload, assigns a server-generated ID, and appends the
/// recipe to the collection. A validation failure performs no mutation.
///
/// # HTTP Request
///
/// `POST /recipes`
///
/// # Response
///
/// - `201 Created` - Recipe stored; body is the stored record, `Location`
///   header points at it
/// - `400 Bad Request` - Missing or empty `name`/`ingredients`
///
/// # Example
///
/// ```http
/// POST /recipes HTTP/1.1
/// Host: pantry.example.com
/// Content-Type: application/json
///
/// {"name": "Fried Rice", "ingredients": ["Rice", "Soy Sauce", "Egg"]}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    RecipeBody(draft): RecipeBody,
) -> RestResult<Response>
where
    S: RecipeStore + Send + Sync,
{
    debug!(name = ?draft.name, "Processing create request");

    // Validate before any mutation
    let new = draft.validate()?;

    let recipe = state.store().create(new).await?;

    let location = format!("{}/recipes/{}", state.base_url(), recipe.id);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::LOCATION,
        location.parse().map_err(|_| RestError::InternalError {
            message: format!("Invalid Location header: {}", location),
        })?,
    );

    debug!(id = %recipe.id, "Recipe created");

    Ok((StatusCode::CREATED, headers, Json(recipe)).into_response())
}
