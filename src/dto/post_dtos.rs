use serde::{ Deserialize, Serialize };
use validator::Validate;

use crate::models::{ NewPost, UpdatePost };

/// Missing fields deserialize to empty strings and are caught by `validate`.
#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,

    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
}

impl From<CreatePostRequest> for NewPost {
    fn from(request: CreatePostRequest) -> Self {
        NewPost {
            title: request.title,
            body: request.body,
            author: request.author,
        }
    }
}

/// Only the fields present in the JSON body are applied.
#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)] // This makes the field optional in JSON
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "Body cannot be empty"))]
    pub body: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: Option<String>,
}

impl From<UpdatePostRequest> for UpdatePost {
    fn from(request: UpdatePostRequest) -> Self {
        UpdatePost {
            title: request.title,
            body: request.body,
            author: request.author,
            updated_at: None,
        }
    }
}
