//! # User Handlers
//!
//! Profile endpoints for the logged-in user. Both routes sit behind
//! `require_auth`, so `CurrentUser` is always present here.

use crate::db::{models::User, users};
use crate::error::{AppError, AppResult};
use crate::middleware::{auth::CurrentUser, body::JsonOrForm};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

/// Longest accepted display name, in characters
const MAX_DISPLAY_NAME_CHARS: usize = 100;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: String,
}

fn profile(user: &User) -> Value {
    json!({
        "id": user.id,
        "email": user.email,
        "display_name": user.display_name,
        "role": user.role(),
        "created_at": user.created_at,
        "updated_at": user.updated_at
    })
}

/// Get current authenticated user's profile
///
/// ## Route
/// GET /api/users/me
pub async fn get_current_user(CurrentUser(user): CurrentUser) -> Json<Value> {
    Json(profile(&user))
}

/// Update the current user's display name
///
/// ## Route
/// PUT /api/users/me
///
/// ## Request
/// JSON `{ "display_name": "Ana" }` or form `display_name=Ana`.
/// The name is trimmed and must be 1 to 100 characters long.
pub async fn update_current_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    JsonOrForm(req): JsonOrForm<UpdateProfileRequest>,
) -> AppResult<Json<Value>> {
    let display_name = req.display_name.trim();
    if display_name.is_empty() {
        return Err(AppError::BadRequest(
            "display_name must not be empty".to_string(),
        ));
    }
    if display_name.chars().count() > MAX_DISPLAY_NAME_CHARS {
        return Err(AppError::BadRequest(format!(
            "display_name must be at most {} characters",
            MAX_DISPLAY_NAME_CHARS
        )));
    }

    let updated = users::update_display_name(&state.db, &user.id, display_name).await?;
    tracing::info!(user_id = %updated.id, "display name updated");

    Ok(Json(profile(&updated)))
}
