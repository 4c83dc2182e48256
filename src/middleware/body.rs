//! Request body parsing.
//!
//! Handlers that take a body accept both JSON and URL-encoded forms, the
//! two encodings browsers and API clients send.

use crate::error::AppError;
use axum::{
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use serde::de::DeserializeOwned;

/// Largest accepted request body, in bytes
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Oversized bodies keep their 413; every other rejection is a 400
fn rejected(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::BadRequest(message)
    }
}

/// Extracts `T` from a JSON or `application/x-www-form-urlencoded` body
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + 'static,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;
            return Ok(JsonOrForm(value));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))?;
            return Ok(JsonOrForm(value));
        }

        Err(AppError::UnsupportedMediaType(format!(
            "expected application/json or application/x-www-form-urlencoded, got '{}'",
            content_type
        )))
    }
}
