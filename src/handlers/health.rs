//! # Health Check Handlers
//!
//! Endpoints for load balancers and monitoring systems.

use crate::db;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

/// Liveness check
///
/// ## Route
/// GET /health
///
/// ## Response
/// ```json
/// { "status": "healthy", "service": "ecommerce-api" }
/// ```
///
/// Never touches the database, so it stays 200 as long as the process serves.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "ecommerce-api"
    }))
}

/// Database readiness check
///
/// ## Route
/// GET /health/db
///
/// 200 `{ "database": "up" }` when a query round-trips, 503
/// `{ "database": "down" }` otherwise.
pub async fn database_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match db::ping(&state.db).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "database": "up" }))),
        Err(e) => {
            tracing::warn!("Database health check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "database": "down" })),
            )
        }
    }
}
