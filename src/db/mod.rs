//! # Database Module
//!
//! - `models`: Data structures (User, Role)
//! - `users`: Queries against the `users` table
//!
//! Connecting and migrating lives in `startup::connect_database`, since the
//! pool is created lazily and only touched once the server is bound.

pub mod models;
pub mod users;

use sqlx::SqlitePool;

/// Round-trip a trivial query to check the database is reachable
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
