//! Error types for the recipe REST API.
//!
//! This module defines all error types used throughout the REST layer,
//! with automatic conversion to JSON error responses.
//!
//! # Error Mapping
//!
//! Store errors are mapped to HTTP status codes and error codes:
//!
//! | Store Error | HTTP Status | Code |
//! |-------------|-------------|------|
//! | Validation | 400 | invalid |
//! | NotFound (update target) | 400 | unknown-recipe |
//! | — (read target) | 404 | not-found |
//! | — (internal) | 500 | exception |
//!
//! An unmatched ID on update is deliberately a 400, not a 404: the client
//! asserted an ID in the payload it sent, and no mutation was performed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantry_store::{StoreError, ValidationError};
use std::fmt;

/// The primary error type for REST API operations.
///
/// This enum provides semantic error types that map cleanly to HTTP status
/// codes and error response codes.
#[derive(Debug)]
pub enum RestError {
    /// Recipe not found on a read (HTTP 404).
    NotFound {
        /// The recipe ID.
        id: String,
    },

    /// Update target matched no stored recipe (HTTP 400).
    UnknownRecipe {
        /// The recipe ID from the request path.
        id: String,
    },

    /// Bad request - validation error or malformed payload (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { id } => {
                write!(f, "Recipe not found: {}", id)
            }
            RestError::UnknownRecipe { id } => {
                write!(f, "No stored recipe has ID: {}", id)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            RestError::NotFound { id } => (
                StatusCode::NOT_FOUND,
                "not-found",
                format!("Recipe {} not found", id),
            ),
            RestError::UnknownRecipe { id } => (
                StatusCode::BAD_REQUEST,
                "unknown-recipe",
                format!("No stored recipe has ID {}", id),
            ),
            RestError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "invalid", message.clone())
            }
            RestError::InternalError { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "exception",
                message.clone(),
            ),
        };

        let body = error_body(code, &details);
        (status, Json(body)).into_response()
    }
}

/// Creates the JSON error envelope.
///
/// # Arguments
///
/// * `code` - The machine-readable error code
/// * `message` - Human-readable details
fn error_body(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

// Implement conversions from store errors

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => RestError::UnknownRecipe { id },
            StoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RestError::NotFound {
            id: "123".to_string(),
        };
        assert_eq!(err.to_string(), "Recipe not found: 123");
    }

    #[test]
    fn test_unknown_recipe_display() {
        let err = RestError::UnknownRecipe {
            id: "x".to_string(),
        };
        assert!(err.to_string().contains("x"));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = RestError::NotFound {
            id: "123".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unknown_recipe_maps_to_400() {
        let err = RestError::UnknownRecipe {
            id: "x".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_not_found_converts_to_unknown_recipe() {
        let err: RestError = StoreError::NotFound {
            id: "x".to_string(),
        }
        .into();
        assert!(matches!(err, RestError::UnknownRecipe { ref id } if id == "x"));
    }

    #[test]
    fn test_validation_error_converts_to_bad_request() {
        let err: RestError = ValidationError::MissingRequiredField {
            field: "ingredients",
        }
        .into();
        match err {
            RestError::BadRequest { message } => {
                assert!(message.contains("ingredients"));
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_error_body_shape() {
        let body = error_body("invalid", "missing required field: name");
        assert_eq!(body["error"]["code"], "invalid");
        assert_eq!(body["error"]["message"], "missing required field: name");
    }
}
