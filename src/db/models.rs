//! # Database Models
//!
//! Data structures that map to database tables.
//!
//! ## Why Strings for dates?
//! SQLite stores timestamps as text (RFC3339 format), so the models keep them
//! as `String` and serialize them to JSON unchanged.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Account role, stored as lowercase text in the `role` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Premium,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Premium => "premium",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "premium" => Ok(Role::Premium),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// User account
///
/// The session only stores the user's id; the auth middleware loads this
/// row on every request that carries one.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Unique email address
    pub email: String,

    /// Human-readable display name
    pub display_name: String,

    /// One of "user", "premium", "admin"
    pub role: String,

    /// When the account was created (RFC3339 timestamp)
    pub created_at: String,

    /// When the account was last updated (RFC3339 timestamp)
    pub updated_at: String,
}

impl User {
    /// Create a new user with generated ID and timestamps
    pub fn new(email: String, display_name: String, role: Role) -> Self {
        let now = Utc::now().to_rfc3339();

        Self {
            id: Uuid::new_v4().to_string(),
            email,
            display_name,
            role: role.to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Parsed role; unknown values in the table fall back to `Role::User`
    pub fn role(&self) -> Role {
        self.role.parse().unwrap_or_default()
    }
}
