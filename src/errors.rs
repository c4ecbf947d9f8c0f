use axum::{ http::StatusCode, response::{ IntoResponse, Response }, Json };
use std::fmt;
use serde::{ Serialize, Deserialize };

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "{}", self.error),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ErrorMessage {
    DatabaseError,
    NotFound,
    PostCreationError,
    PostUpdateError,
    PostNotFound(String),
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str())
    }
}

impl ErrorMessage {
    fn to_str(&self) -> String {
        match self {
            ErrorMessage::DatabaseError => "Error connecting to the database".to_string(),
            ErrorMessage::NotFound => "The requested resource could not be found".to_string(),
            ErrorMessage::PostCreationError =>
                "Bad request: could not create new blog post".to_string(),
            ErrorMessage::PostUpdateError => "Bad request: could not update blog post".to_string(),
            ErrorMessage::PostNotFound(post_id) =>
                format!("blog post with id {{{}}} does not exist", post_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn server_error(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn post_not_found(post_id: impl Into<String>) -> Self {
        HttpError::not_found(ErrorMessage::PostNotFound(post_id.into()).to_string())
    }

    pub fn into_http_response(self) -> Response {
        let response = Json(ErrorResponse {
            success: false,
            error: self.message.clone(),
        });

        (self.status, response).into_response()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HttpError: message: {}, status: {}", self.message, self.status)
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
