//! Route table of the API.

use crate::handlers::{health, sessions, users};
use crate::middleware::auth::require_auth;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

/// All API routes, without the cross-cutting layers applied in `startup`
pub fn api_router() -> Router<AppState> {
    // Routes that need a logged-in user; anything else gets a 401
    let protected_routes = Router::new()
        .route(
            "/api/users/me",
            get(users::get_current_user).put(users::update_current_user),
        )
        .route_layer(middleware::from_fn(require_auth));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/db", get(health::database_check))
        .route("/api/sessions/current", get(sessions::session_info))
        .route("/api/sessions/logout", post(sessions::logout))
        .merge(protected_routes)
}
