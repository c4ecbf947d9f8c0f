use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{ Deserialize, Serialize };
use crate::schema::posts;

#[derive(Debug, Clone, PartialEq, Queryable, Serialize, Deserialize, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub author: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = posts)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub author: String,
}

/// Partial update; `None` fields are left untouched by diesel's changeset.
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = posts)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
}

impl UpdatePost {
    /// Copies the present fields onto `post`.
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(body) = &self.body {
            post.body = body.clone();
        }
        if let Some(author) = &self.author {
            post.author = author.clone();
        }
        if let Some(updated_at) = self.updated_at {
            post.updated_at = updated_at;
        }
    }
}
