//! Error types for the storage layer.
//!
//! Two categories exist: [`ValidationError`] for payloads rejected before
//! any mutation, and [`StoreError::NotFound`] for operations that target an
//! ID the collection does not hold. The HTTP layer maps both onto client
//! error responses.

use thiserror::Error;

/// The primary error type for store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No stored recipe has the requested ID.
    #[error("recipe not found: {id}")]
    NotFound {
        /// The ID that matched nothing.
        id: String,
    },

    /// The payload failed validation; nothing was mutated.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised while validating a client payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent.
    #[error("missing required field: {field}")]
    MissingRequiredField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A required field was present but empty.
    #[error("field must not be empty: {field}")]
    EmptyField {
        /// Name of the empty field.
        field: &'static str,
    },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
