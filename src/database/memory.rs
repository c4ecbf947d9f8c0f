use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    database::store::{ PostStore, StoreError },
    models::{ Post, NewPost, UpdatePost },
};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Post>,
    last_id: i32,
}

/// `PostStore` held in process memory. Ids start at 1 and are never reused,
/// matching a `SERIAL` column.
#[derive(Default)]
pub struct InMemoryPostStore {
    table: RwLock<Table>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let now = Utc::now().naive_utc();
        let post = Post {
            id: table.last_id,
            title: new_post.title,
            body: new_post.body,
            author: new_post.author,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(post.id, post.clone());

        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, post_id: i32) -> Result<Option<Post>, StoreError> {
        Ok(self.table.read().await.rows.get(&post_id).cloned())
    }

    async fn update(
        &self,
        post_id: i32,
        mut changes: UpdatePost
    ) -> Result<Option<Post>, StoreError> {
        changes.updated_at.get_or_insert_with(|| Utc::now().naive_utc());

        let mut table = self.table.write().await;
        Ok(
            table.rows.get_mut(&post_id).map(|post| {
                changes.apply_to(post);
                post.clone()
            })
        )
    }

    async fn delete(&self, post_id: i32) -> Result<bool, StoreError> {
        Ok(self.table.write().await.rows.remove(&post_id).is_some())
    }
}
