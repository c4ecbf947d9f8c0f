use std::sync::Arc;
use axum::{ routing::get, Router };

use crate::{
    handlers::post_handlers::{
        create_post_handler,
        get_posts_handler,
        get_post_handler,
        update_post_handler,
        delete_post_handler,
    },
    AppState,
};

// POST ROUTER
pub fn post_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", get(get_posts_handler).post(create_post_handler))
        .route(
            "/posts/{id}",
            get(get_post_handler).put(update_post_handler).delete(delete_post_handler)
        )
}
