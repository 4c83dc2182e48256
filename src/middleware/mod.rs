//! # Middleware Module
//!
//! Middleware intercepts HTTP requests and responses for cross-cutting
//! concerns. Applied in `startup::build_router`, outermost first:
//!
//! - `cors`: Cross-origin policy, answers preflights
//! - `body`: Body size limit and the JSON/form extractor
//! - `auth`: Loads the session's user, guards protected routes
//! - `logging`: Request ids and request/response tracing

pub mod auth;
pub mod body;
pub mod cors;
pub mod logging;
