use std::sync::Arc;

use axum::{
    extract::{ rejection::{ JsonRejection, PathRejection }, Path, State },
    http::{ StatusCode, Uri },
    Json,
};
use tracing::{ error, info, warn };
use validator::Validate;

use crate::{
    dto::{ CreatePostRequest, UpdatePostRequest },
    errors::{ ErrorMessage, HttpError },
    models::{ MessageResponse, PostListResponse, PostResponse },
    database::StoreError,
    AppState,
};

fn store_failure(err: StoreError) -> HttpError {
    error!("Post store error: {}", err);
    HttpError::server_error(ErrorMessage::DatabaseError.to_string())
}

// Ids that are not integers can never match a row.
fn parse_post_id(raw_id: &str) -> Result<i32, HttpError> {
    raw_id.parse::<i32>().map_err(|_| HttpError::post_not_found(raw_id))
}

// A segment axum cannot decode (e.g. `%FF`) is reported with its raw text.
fn path_post_id(
    path: Result<Path<String>, PathRejection>,
    uri: &Uri
) -> Result<(i32, String), HttpError> {
    match path {
        Ok(Path(raw_id)) => Ok((parse_post_id(&raw_id)?, raw_id)),
        Err(rejection) => {
            warn!("Could not decode post id: {}", rejection.body_text());
            let segment = uri.path().rsplit('/').next().unwrap_or_default();
            Err(HttpError::post_not_found(segment))
        }
    }
}

// A body that fails to parse is logged and replaced by the empty payload.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Could not parse request body: {}", rejection.body_text());
            T::default()
        }
    }
}

// CREATE NEW POST
pub async fn create_post_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>
) -> Result<(StatusCode, Json<PostResponse>), HttpError> {
    let request = body_or_default(payload);

    if let Err(validation_errors) = request.validate() {
        warn!("Rejected new post: {}", validation_errors);
        return Err(HttpError::bad_request(ErrorMessage::PostCreationError.to_string()));
    }

    let post = state.store.create(request.into()).await.map_err(|e| {
        error!("Failed to create post: {}", e);
        HttpError::bad_request(ErrorMessage::PostCreationError.to_string())
    })?;

    info!("Created post {}", post.id);
    Ok((StatusCode::CREATED, Json(PostResponse::new(post))))
}

// GET ALL POSTS
pub async fn get_posts_handler(State(state): State<Arc<AppState>>) -> Result<
    Json<PostListResponse>,
    HttpError
> {
    let posts = state.store.list().await.map_err(store_failure)?;

    Ok(Json(PostListResponse::new(posts)))
}

// GET POST BY ID
pub async fn get_post_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>
) -> Result<Json<PostResponse>, HttpError> {
    let (post_id, raw_id) = path_post_id(path, &uri)?;

    match state.store.find_by_id(post_id).await.map_err(store_failure)? {
        Some(post) => Ok(Json(PostResponse::new(post))),
        None => Err(HttpError::post_not_found(raw_id)),
    }
}

// UPDATE POST BY ID
pub async fn update_post_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>
) -> Result<Json<PostResponse>, HttpError> {
    let (post_id, raw_id) = path_post_id(path, &uri)?;
    let request = body_or_default(payload);

    if let Err(validation_errors) = request.validate() {
        warn!("Rejected update for post {}: {}", post_id, validation_errors);
        return Err(HttpError::bad_request(ErrorMessage::PostUpdateError.to_string()));
    }

    match state.store.update(post_id, request.into()).await.map_err(store_failure)? {
        Some(post) => {
            info!("Updated post {}", post.id);
            Ok(Json(PostResponse::new(post)))
        }
        None => Err(HttpError::post_not_found(raw_id)),
    }
}

// DELETE POST BY ID
pub async fn delete_post_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>
) -> Result<Json<MessageResponse>, HttpError> {
    let (post_id, raw_id) = path_post_id(path, &uri)?;

    if !state.store.delete(post_id).await.map_err(store_failure)? {
        return Err(HttpError::post_not_found(raw_id));
    }

    info!("Deleted post {}", post_id);
    Ok(Json(MessageResponse::new("post deleted successfully")))
}
