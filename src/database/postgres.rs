use async_trait::async_trait;
use chrono::Utc;
use diesel::PgConnection;
use tracing::debug;

use crate::{
    config::PgPool,
    database::{ operations::posts, store::{ PostStore, StoreError } },
    models::{ Post, NewPost, UpdatePost },
};

/// `PostStore` backed by Postgres through an r2d2 pool.
///
/// Diesel is synchronous, so every call checks out a connection and runs on
/// tokio's blocking pool.
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
        where
            T: Send + 'static,
            F: FnOnce(&mut PgConnection) -> diesel::QueryResult<T> + Send + 'static
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || -> Result<T, StoreError> {
            let mut conn = pool.get()?;
            Ok(f(&mut *conn)?)
        }).await?
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError> {
        self.with_conn(move |conn| posts::create_post(conn, &new_post)).await
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        self.with_conn(posts::list_posts).await
    }

    async fn find_by_id(&self, post_id: i32) -> Result<Option<Post>, StoreError> {
        self.with_conn(move |conn| posts::find_post(conn, post_id)).await
    }

    async fn update(
        &self,
        post_id: i32,
        mut changes: UpdatePost
    ) -> Result<Option<Post>, StoreError> {
        // updated_at keeps the changeset non-empty even when the payload carried no fields
        changes.updated_at.get_or_insert_with(|| Utc::now().naive_utc());
        debug!("Updating post {} with {:?}", post_id, changes);

        self.with_conn(move |conn| posts::update_post(conn, post_id, &changes)).await
    }

    async fn delete(&self, post_id: i32) -> Result<bool, StoreError> {
        self.with_conn(move |conn| posts::delete_post(conn, post_id)).await
    }
}
