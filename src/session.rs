//! # Sessions
//!
//! Sessions keep users logged in by storing a session ID in a signed cookie.
//! The session data (the user id) is stored server-side in the same SQLite
//! database as the rest of the application.

use crate::config::Config;
use sha2::{Digest, Sha512};
use time::Duration;
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    session_store::ExpiredDeletion,
    Expiry, SessionManagerLayer,
};
use tower_sessions_sqlx_store::SqliteStore;

/// Name of the session cookie
pub const SESSION_COOKIE_NAME: &str = "ecommerce.sid";

/// Sessions expire after this long without activity
pub const SESSION_INACTIVITY: Duration = Duration::days(14);

/// How often expired sessions are purged from the store
pub const EXPIRED_SESSION_CLEANUP_INTERVAL: std::time::Duration =
    std::time::Duration::from_secs(600);

/// Derive the cookie signing key from the configured secret
///
/// `Key` needs 64 bytes of material; SHA-512 turns a secret of any length
/// into exactly that.
pub fn signing_key(secret: &[u8]) -> Key {
    let digest = Sha512::digest(secret);
    Key::from(digest.as_slice())
}

/// Build the session layer on top of the SQL store
///
/// Sessions are only persisted once a handler writes to them. After that
/// every response re-saves the record and re-issues the cookie, so the
/// inactivity window restarts on each request. Empty sessions are never
/// saved.
pub fn session_layer(
    config: &Config,
    store: SqliteStore,
) -> SessionManagerLayer<SqliteStore, SignedCookie> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(config.mode.is_production())
        .with_expiry(Expiry::OnInactivity(SESSION_INACTIVITY))
        .with_always_save(true)
        .with_signed(signing_key(config.session_secret_bytes()))
}

/// Periodically delete expired sessions
///
/// Runs forever; spawn it as a background task once the session table exists.
pub async fn cleanup_expired_sessions(store: SqliteStore) {
    let mut interval = tokio::time::interval(EXPIRED_SESSION_CLEANUP_INTERVAL);
    loop {
        interval.tick().await;
        delete_expired_sessions(&store).await;
    }
}

/// One cleanup pass; failures are logged and retried on the next tick
pub async fn delete_expired_sessions(store: &SqliteStore) {
    tracing::debug!("Running expired session cleanup");
    if let Err(e) = store.delete_expired().await {
        tracing::error!("Expired session cleanup failed: {:?}", e);
    }
}
