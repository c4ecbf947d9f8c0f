use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ Post, NewPost, UpdatePost };

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")] Diesel(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")] Pool(#[from] diesel::r2d2::PoolError),

    #[error("Store task failed: {0}")] Task(#[from] tokio::task::JoinError),
}

/// The interface the handlers use to persist posts.
///
/// Lookups return `Option` and deletes report whether a row went away, so a
/// single call is enough to tell "missing" apart from "present".
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Inserts a post and returns it with its assigned id and timestamps.
    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError>;

    /// All posts, ascending by id.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    async fn find_by_id(&self, post_id: i32) -> Result<Option<Post>, StoreError>;

    /// Applies the present fields of `changes` and returns the stored row, or
    /// `None` when no post has `post_id`.
    async fn update(&self, post_id: i32, changes: UpdatePost) -> Result<Option<Post>, StoreError>;

    /// Returns `true` if a row was removed.
    async fn delete(&self, post_id: i32) -> Result<bool, StoreError>;

    async fn exists(&self, post_id: i32) -> Result<bool, StoreError> {
        Ok(self.find_by_id(post_id).await?.is_some())
    }
}
