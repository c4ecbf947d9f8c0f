use crate::errors::{ HttpError, ErrorMessage };

pub async fn handler_404() -> HttpError {
    HttpError::not_found(ErrorMessage::NotFound.to_string())
}

pub async fn health_check() -> &'static str {
    "OK"
}
