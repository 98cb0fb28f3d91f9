//! Application state for the recipe REST API.
//!
//! This module defines the shared application state that is available to
//! all request handlers: the storage backend and the server configuration.
//! The store is an explicitly owned object injected here, never a
//! module-level singleton.

use std::sync::Arc;

use pantry_store::RecipeStore;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`RecipeStore`])
///
/// # Example
///
/// ```rust
/// use pantry_rest::{AppState, ServerConfig};
/// use pantry_store::MemoryStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
/// let state = AppState::new(store, ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The storage backend.
    store: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: RecipeStore> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    ///
    /// # Arguments
    ///
    /// * `store` - The storage backend (wrapped in Arc)
    /// * `config` - Server configuration
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a clone of the store Arc.
    pub fn store_arc(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
