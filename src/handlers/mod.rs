//! # HTTP Request Handlers
//!
//! - `health`: Liveness and database readiness
//! - `sessions`: Inspect and end the current session
//! - `users`: Profile of the logged-in user
//!
//! Handlers extract what they need (state, session, `CurrentUser`, body),
//! do their work, and return JSON or an `AppError`.

pub mod health;
pub mod sessions;
pub mod users;
