use std::sync::Arc;

use axum::Router;

use crate::AppState;

pub mod api;
pub mod general_router;

use api::api_routes;
use general_router::general_routes;

/// Main application router assembly function
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        // /api/v1/posts
        .merge(api_routes())
        // health check and JSON 404 fallback
        .merge(general_routes())
}
