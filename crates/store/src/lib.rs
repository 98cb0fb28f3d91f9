//! # pantry-store - Recipe Storage Layer
//!
//! This crate provides the storage layer for the Pantry recipe server: the
//! [`Recipe`] domain model, payload validation, the [`RecipeStore`] trait,
//! and the in-memory [`MemoryStore`] backend.
//!
//! ## Design
//!
//! The store is an ordered collection of [`Recipe`] records. Clients submit
//! an unvalidated [`RecipeDraft`]; [`RecipeDraft::validate`] turns it into a
//! [`NewRecipe`] or a [`ValidationError`] before any mutation happens, so
//! invalid payloads can never reach the collection.
//!
//! Handlers are generic over [`RecipeStore`], which keeps the collection an
//! explicitly owned object injected into the HTTP layer rather than a
//! module-level singleton. Swapping the in-memory backend for a persistent
//! one means implementing the trait, nothing more.
//!
//! ## Example
//!
//! ```rust
//! use pantry_store::{MemoryStore, RecipeDraft, RecipeStore};
//!
//! # async fn example() -> pantry_store::StoreResult<()> {
//! let store = MemoryStore::new();
//!
//! let draft = RecipeDraft {
//!     name: Some("Fried Rice".to_string()),
//!     ingredients: Some(vec!["Rice".to_string(), "Egg".to_string()]),
//!     ..Default::default()
//! };
//! let stored = store.create(draft.validate()?).await?;
//!
//! assert_eq!(store.list().await?, vec![stored]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Recipe domain types and validation
//! - [`error`] - Error taxonomy
//! - [`core`](crate::core) - The [`RecipeStore`] trait
//! - [`memory`] - In-memory backend

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod core;
pub mod error;
pub mod memory;
pub mod types;

pub use crate::core::RecipeStore;
pub use crate::error::{StoreError, StoreResult, ValidationError};
pub use crate::memory::MemoryStore;
pub use crate::types::{NewRecipe, Recipe, RecipeDraft};
