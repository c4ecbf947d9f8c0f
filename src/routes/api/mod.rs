use std::sync::Arc;
use axum::Router;

use crate::AppState;

pub mod posts;

pub const API_PREFIX: &str = "/api/v1";

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new().nest(API_PREFIX, posts::post_routes())
}
