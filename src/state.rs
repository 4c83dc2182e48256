//! # Application State
//!
//! Shared state accessible to all request handlers.
//!
//! ## The State Pattern
//! Instead of opening a database connection per request, we:
//! 1. Create a connection pool once at startup
//! 2. Store it in AppState
//! 3. Share it across all request handlers
//! 4. Axum clones the state for each request (cheap, the pool is reference counted)

use crate::config::Config;
use anyhow::{Context, Result};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;

/// How long a request waits for a pooled connection before failing
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared application state
///
/// `SqlitePool` is already a cloneable handle, so `AppState` derives `Clone`
/// and every handler gets its own copy of the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// Also backs the session store, so sessions and users live in the same
    /// database.
    pub db: SqlitePool,
}

impl AppState {
    /// Initialize application state
    ///
    /// The pool is created lazily: no connection is opened here, only the
    /// URL is validated. This lets the server bind its socket before the
    /// database is reached; `startup::connect_database` opens the first
    /// connection and runs migrations.
    ///
    /// # Errors
    /// Returns an error if `DATABASE_URL` cannot be parsed.
    pub fn new(config: &Config) -> Result<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy(&config.database_url)
            .with_context(|| format!("Invalid DATABASE_URL '{}'", config.database_url))?;

        Ok(AppState { db })
    }
}
