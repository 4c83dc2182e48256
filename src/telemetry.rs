//! Structured logging setup.

use crate::config::Mode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(mode: Mode) -> &'static str {
    match mode {
        Mode::Development => "info,ecommerce_api=debug,tower_http=debug",
        Mode::Production => "info,sqlx=warn",
    }
}

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` overrides the mode's default filter. Production output has
/// ANSI colors disabled so log collectors get plain text.
pub fn init_tracing(mode: Mode) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(mode).into()))
        .with(tracing_subscriber::fmt::layer().with_ansi(!mode.is_production()))
        .init();
}
