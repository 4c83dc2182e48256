use crate::error::AppResult;
use crate::middleware::auth::CurrentUser;
use axum::Json;
use serde_json::{json, Value};
use tower_sessions::Session;

pub async fn session_info(current_user: Option<CurrentUser>) -> Json<Value> {
    match current_user {
        Some(CurrentUser(user)) => Json(json!({
            "authenticated": true,
            "user": {
                "id": user.id,
                "email": user.email,
                "display_name": user.display_name,
                "role": user.role(),
            }
        })),
        None => Json(json!({
            "authenticated": false
        })),
    }
}

/// Drop the session data and its stored record; the cookie is cleared on
/// the way out
pub async fn logout(session: Session) -> AppResult<Json<Value>> {
    session.flush().await?;

    Ok(Json(json!({
        "success": true,
        "message": "Logged out successfully"
    })))
}
