//! # Error Handling
//!
//! Application error type and its conversion into HTTP responses.
//! Every handler and middleware returns `AppResult<T>`; the `IntoResponse`
//! impl below turns failures into `{ "error": "..." }` JSON bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-wide error type
///
/// Variants wrapping library errors (`Database`, `Session`)
/// are logged in full and reported to the client with a generic message.
/// The remaining variants carry a message that is safe to show to users.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database errors (SQLx library errors)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session store or session (de)serialization errors
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Resource not found errors (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request errors (400)
    ///
    /// Used when client sends invalid data (malformed bodies, failed validation)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authentication errors (401)
    ///
    /// Used when the request carries no session or the session has no user
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Request body over the configured size limit (413)
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Request body with a content type no extractor understands (415)
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

impl AppError {
    /// HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Map each error to the message the client sees
        let error_message = match &self {
            AppError::Database(e) => {
                // Log detailed error for debugging (not shown to user)
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Session(e) => {
                tracing::error!("Session error: {:?}", e);
                "Session error".to_string()
            }
            AppError::NotFound(_)
            | AppError::BadRequest(_)
            | AppError::Unauthorized(_)
            | AppError::PayloadTooLarge(_)
            | AppError::UnsupportedMediaType(_) => self.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
