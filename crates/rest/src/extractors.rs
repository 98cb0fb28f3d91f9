//! Recipe payload extractor.
//!
//! Extracts recipe drafts from request bodies.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
};
use pantry_store::RecipeDraft;

use crate::error::RestError;

/// Axum extractor for recipe payloads.
///
/// Reads the request body into a [`RecipeDraft`]. Field validation is left
/// to [`RecipeDraft::validate`] so that a missing field surfaces as a
/// validation error, not a deserialization failure.
///
/// # Example
///
/// ```rust,ignore
/// use pantry_rest::extractors::RecipeBody;
///
/// async fn create_handler(RecipeBody(draft): RecipeBody) {
///     println!("Draft name: {:?}", draft.name);
/// }
/// ```
#[derive(Debug)]
pub struct RecipeBody(pub RecipeDraft);

impl RecipeBody {
    /// Consumes the extractor and returns the inner draft.
    pub fn into_inner(self) -> RecipeDraft {
        self.0
    }
}

/// Error type for recipe body extraction failures.
#[derive(Debug)]
pub enum RecipeBodyRejection {
    /// JSON parsing failed.
    InvalidJson(String),
    /// Unsupported content type.
    UnsupportedMediaType(String),
}

impl IntoResponse for RecipeBodyRejection {
    fn into_response(self) -> Response {
        let error = match self {
            RecipeBodyRejection::InvalidJson(msg) => RestError::BadRequest {
                message: format!("Invalid JSON: {}", msg),
            },
            RecipeBodyRejection::UnsupportedMediaType(ct) => RestError::BadRequest {
                message: format!("Unsupported content type: {}", ct),
            },
        };
        error.into_response()
    }
}

impl<S> FromRequest<S> for RecipeBody
where
    S: Send + Sync,
{
    type Rejection = RecipeBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Check content type (must own the string before moving req)
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !content_type.contains("json") {
            return Err(RecipeBodyRejection::UnsupportedMediaType(content_type));
        }

        // Extract body bytes
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| RecipeBodyRejection::InvalidJson(e.to_string()))?;

        let draft: RecipeDraft = serde_json::from_slice(&bytes)
            .map_err(|e| RecipeBodyRejection::InvalidJson(e.to_string()))?;

        Ok(RecipeBody(draft))
    }
}
