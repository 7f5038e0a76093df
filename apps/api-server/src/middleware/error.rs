//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<blog_core::DomainError> for AppError {
    fn from(err: blog_core::DomainError) -> Self {
        match err {
            blog_core::DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            blog_core::DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<blog_core::RepoError> for AppError {
    fn from(err: blog_core::RepoError) -> Self {
        match err {
            blog_core::RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            blog_core::RepoError::Constraint(msg) => AppError::Conflict(msg),
        }
    }
}

/// Renders malformed or incomplete JSON bodies as 400 problem details.
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = %req.path(), error = %err, "Rejected JSON body");
    AppError::BadRequest(err.to_string()).into()
}

/// Renders unparseable path segments as 404, since no resource can match them.
pub fn path_error_handler(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = %req.path(), error = %err, "Rejected path");
    AppError::NotFound(format!("No resource at {}", req.path())).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
