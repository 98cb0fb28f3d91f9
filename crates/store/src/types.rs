//! Recipe domain types.
//!
//! Defines the stored [`Recipe`] record together with the draft/validated
//! pair used to check client payloads before any mutation: [`RecipeDraft`]
//! is what the wire gives us, [`NewRecipe`] is what validation produces.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A stored recipe.
///
/// Serializes to exactly the keys `id`, `name`, and `ingredients`.
///
/// # Examples
///
/// ```
/// use pantry_store::Recipe;
///
/// let recipe = Recipe {
///     id: "7f9c".to_string(),
///     name: "Fried Rice".to_string(),
///     ingredients: vec!["Rice".to_string(), "Egg".to_string()],
/// };
///
/// let json = serde_json::to_value(&recipe).unwrap();
/// assert_eq!(json["name"], "Fried Rice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// The recipe's logical ID (server-generated, unique).
    pub id: String,

    /// Display name. Never empty once stored.
    pub name: String,

    /// Ordered ingredient list. Never empty once stored.
    pub ingredients: Vec<String>,
}

/// An unvalidated recipe payload as received from a client.
///
/// Every field is optional so that a missing field surfaces as a
/// [`ValidationError`] instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeDraft {
    /// Client-supplied ID. Only meaningful on update, where it must match
    /// the ID in the request path.
    pub id: Option<String>,

    /// Recipe name.
    pub name: Option<String>,

    /// Ordered ingredient list.
    pub ingredients: Option<Vec<String>>,
}

/// A validated creation or replacement payload.
///
/// Holding one proves `name` and `ingredients` are present and non-empty;
/// the only way to obtain it is [`RecipeDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    /// Recipe name.
    pub name: String,

    /// Ordered ingredient list.
    pub ingredients: Vec<String>,
}

impl RecipeDraft {
    /// Validates the draft, producing a [`NewRecipe`] or the first
    /// [`ValidationError`] encountered.
    ///
    /// The `id` field is ignored here; update handlers compare it against
    /// the request path separately.
    pub fn validate(self) -> Result<NewRecipe, ValidationError> {
        let name = self
            .name
            .ok_or(ValidationError::MissingRequiredField { field: "name" })?;
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "name" });
        }

        let ingredients = self.ingredients.ok_or(ValidationError::MissingRequiredField {
            field: "ingredients",
        })?;
        if ingredients.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "ingredients",
            });
        }

        Ok(NewRecipe { name, ingredients })
    }
}
