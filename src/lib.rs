// Library entry point - exposes the blog post API so the binary and the tests share one router

pub mod config;
pub mod database;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod schema;


// Re-export commonly used types for convenience
pub use config::{ Config, ConfigError, DatabaseConfig, StoreBackend };
pub use database::{ InMemoryPostStore, PgPostStore, PostStore, StoreError };
pub use errors::{ HttpError, ErrorMessage };
pub use models::{ Post, NewPost, UpdatePost };

use std::sync::Arc;
use axum::Router;
use tracing::info;

/// Shared handler state. The store is injected so tests can swap in
/// [`InMemoryPostStore`].
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Opens the store selected by `config`, running migrations for Postgres.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let store: Arc<dyn PostStore> = match config.database.backend {
            StoreBackend::Postgres => {
                let pool = database::connection::establish_pool(&config.database)?;
                info!("Connected to Postgres");
                Arc::new(PgPostStore::new(pool))
            }
            StoreBackend::Memory => {
                info!("Using the in-memory post store");
                Arc::new(InMemoryPostStore::new())
            }
        };

        Ok(Self::new(store))
    }
}

/// Create the complete application router
pub fn create_app(state: Arc<AppState>) -> Router {
    routes::create_router().with_state(state)
}

/// Initialize the application with all dependencies
pub fn initialize_app(config: &Config) -> Result<Router, ConfigError> {
    let state = Arc::new(AppState::from_config(config)?);

    Ok(create_app(state))
}
