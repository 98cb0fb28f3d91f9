//! # pantry-rest - Recipe REST API
//!
//! This crate provides the HTTP API for the Pantry recipe server: a small
//! CRUD surface over an in-memory ordered collection of recipes.
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | list | GET | `/recipes` |
//! | create | POST | `/recipes` |
//! | read | GET | `/recipes/{id}` |
//! | update | PUT | `/recipes/{id}` |
//! | delete | DELETE | `/recipes/{id}` |
//! | health | GET | `/health` |
//!
//! ## Error Handling
//!
//! Errors are returned as a JSON envelope `{"error": {"code", "message"}}`
//! with appropriate HTTP status codes:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Validation error / malformed payload |
//! | 400 | unknown-recipe | Update target ID matched nothing |
//! | 404 | not-found | Read target ID matched nothing |
//! | 500 | exception | Internal server error |
//!
//! Note that an unmatched ID on update is a client error (400), not a 404:
//! the ID is part of the payload the client asserted, and nothing was
//! mutated.
//!
//! ## Configuration
//!
//! The server is configured via environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PANTRY_SERVER_PORT` | 8080 | Server port |
//! | `PANTRY_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `PANTRY_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `PANTRY_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `PANTRY_ENABLE_CORS` | true | Enable CORS |
//! | `PANTRY_CORS_ORIGINS` | * | Allowed CORS origins |
//! | `PANTRY_BASE_URL` | http://localhost:8080 | Base URL used in Location headers |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pantry_rest::{ServerConfig, create_app_with_config};
//! use pantry_store::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = MemoryStore::new();
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(store, config);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error responses
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration)
//! - [`extractors`] - Request body extraction
//! - [`handlers`] - HTTP request handlers for each operation
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use pantry_store::RecipeStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default
/// settings. For more control, use [`create_app_with_config`].
///
/// # Arguments
///
/// * `store` - The storage backend to use
pub fn create_app<S>(store: S) -> Router
where
    S: RecipeStore + Send + Sync + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up the complete recipe API with all handlers,
/// middleware, and configuration.
///
/// # Arguments
///
/// * `store` - The storage backend to use
/// * `config` - Server configuration
///
/// # Example
///
/// ```rust
/// use pantry_rest::{ServerConfig, create_app_with_config};
/// use pantry_store::MemoryStore;
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryStore::new(), config);
/// ```
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: RecipeStore + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        store.backend_name()
    );

    // Create application state
    let state = AppState::new(Arc::new(store), config.clone());

    // Build the router with all recipe routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pantry_rest={},tower_http=debug", level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
