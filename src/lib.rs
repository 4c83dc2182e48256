//! # E-commerce API Server
//!
//! Bootstrap layer of the e-commerce HTTP API: middleware (CORS, body
//! parsing, sessions, authentication, API docs, request logging) around the
//! router, a SQLite connection pool, and the listening socket.

pub mod config; // Configuration management (environment variables, settings)
pub mod db; // Database operations (users)
pub mod docs; // OpenAPI document and Swagger UI
pub mod error; // Error handling and custom error types
pub mod handlers; // HTTP request handlers
pub mod middleware; // Request/response interceptors
pub mod routes; // Route table
pub mod session; // Session layer and store maintenance
pub mod startup; // Server assembly and lifecycle
pub mod state; // Shared application state
pub mod telemetry; // Logging setup
