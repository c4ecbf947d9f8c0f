use serde::Serialize;

use super::Post;

// Every body the API returns carries a `success` flag next to its payload.

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub success: bool,
    pub post: Post,
}

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub success: bool,
    pub posts: Vec<Post>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl PostResponse {
    pub fn new(post: Post) -> Self {
        Self { success: true, post }
    }
}

impl PostListResponse {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { success: true, posts }
    }
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }
}
