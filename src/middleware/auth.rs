//! Session-backed authentication.
//!
//! Strategies that log a user in write the user's id into the session under
//! [`USER_ID_KEY`]. On every request `load_current_user` turns that id back
//! into a [`CurrentUser`] request extension, which handlers extract directly.

use crate::db::{models::User, users};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;
use tower_sessions::Session;

/// Session key holding the authenticated user's id
pub const USER_ID_KEY: &str = "user_id";

/// The authenticated user for the current request
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

pub async fn load_current_user(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    if let Some(user_id) = session.get::<String>(USER_ID_KEY).await? {
        match users::find_optional(&state.db, &user_id).await? {
            Some(user) => {
                request.extensions_mut().insert(CurrentUser(user));
            }
            None => {
                // Stale session, the account is gone
                tracing::warn!(%user_id, "session references a missing user, dropping it");
                session.flush().await?;
            }
        }
    }

    Ok(next.run(request).await)
}

pub async fn require_auth(request: Request, next: Next) -> AppResult<Response> {
    if request.extensions().get::<CurrentUser>().is_none() {
        return Err(AppError::Unauthorized("Not authenticated".to_string()));
    }

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))
    }
}

impl<S> OptionalFromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<CurrentUser>().cloned())
    }
}
