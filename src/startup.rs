//! # Application Startup
//!
//! Assembles the middleware stack around the router, binds the listener,
//! connects to the database and serves.
//!
//! ## Startup order
//! 1. `Application::build`: state with a lazy pool, API docs, session layer,
//!    router, TCP listener (logs the port)
//! 2. `Application::connect_database`: first real connection plus
//!    migrations; `main` exits the process with code 1 if this fails
//! 3. `Application::run_until_stopped`: background cleanup task, then serve
//!    until Ctrl-C

use crate::config::Config;
use crate::middleware::{auth::load_current_user, body::BODY_LIMIT_BYTES, cors, logging};
use crate::state::AppState;
use crate::{db, docs, routes, session};
use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, middleware as axum_middleware, Router};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_sessions::{service::SignedCookie, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    state: AppState,
    session_store: SqliteStore,
}

impl Application {
    pub async fn build(config: Config) -> Result<Self> {
        let state = AppState::new(&config)?;

        let openapi =
            docs::build_openapi(&config.docs_dir).context("Failed to build API documentation")?;

        let session_store = SqliteStore::new(state.db.clone());
        let session_layer = session::session_layer(&config, session_store.clone());

        let router = build_router(state.clone(), openapi, session_layer);

        let bind_addr = config.bind_address();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("Failed to bind to {}", bind_addr))?;
        let port = listener.local_addr()?.port();
        tracing::info!(mode = %config.mode, "Server started on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
            state,
            session_store,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn db(&self) -> &SqlitePool {
        &self.state.db
    }

    pub fn session_store(&self) -> &SqliteStore {
        &self.session_store
    }

    pub async fn connect_database(&self) -> Result<()> {
        connect_database(&self.state.db, &self.session_store).await
    }

    pub async fn run_until_stopped(self) -> Result<()> {
        tokio::spawn(session::cleanup_expired_sessions(self.session_store));

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        Ok(())
    }
}

/// Open the first database connection and bring the schema up to date
///
/// No retry or backoff: a failure here is fatal for the process.
pub async fn connect_database(pool: &SqlitePool, session_store: &SqliteStore) -> Result<()> {
    tracing::info!("Starting database service");

    db::ping(pool)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    session_store
        .migrate()
        .await
        .context("Failed to migrate session store")?;

    tracing::info!("Database connected");
    Ok(())
}

/// Wrap the API routes in the middleware stack
///
/// Axum runs the last added layer first, so reading the `.layer` calls
/// bottom-up gives request order: CORS, body limit, session cookie, current
/// user, then either the docs or the logged API routes.
pub fn build_router(
    state: AppState,
    openapi: utoipa::openapi::OpenApi,
    session_layer: SessionManagerLayer<SqliteStore, SignedCookie>,
) -> Router {
    let api = logging::with_request_logging(routes::api_router());

    Router::new()
        .merge(docs::swagger_ui(openapi))
        .merge(api)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            load_current_user,
        ))
        .layer(session_layer)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors::permissive_with_credentials())
        .with_state(state)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, stopping server"),
        Err(e) => {
            // Without a signal handler the server just runs until killed
            tracing::error!("Failed to listen for shutdown signal: {:?}", e);
            std::future::pending::<()>().await;
        }
    }
}
