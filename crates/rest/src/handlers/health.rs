//! Health check endpoint handler.
//!
//! Provides a simple health check endpoint for monitoring and load
//! balancers.

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

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET /health`
///
/// # Response
///
/// - `200 OK` - Server is healthy
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: RecipeStore + Send + Sync,
{
    debug!("Processing health check request");

    let backend_name = state.store().backend_name();

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": backend_name
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}
