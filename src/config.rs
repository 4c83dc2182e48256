//! # Configuration Management
//!
//! This module loads configuration from environment variables.
//! It uses the "12-factor app" methodology where configuration comes from the environment.
//!
//! ## Environment Variables
//! - `MODE`: Run mode, `development` (default) or `production`
//! - `HOST`: Server bind address (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATABASE_URL`: SQLite database connection string
//! - `DATABASE_MAX_CONNECTIONS`: Connection pool size (default: 5)
//! - `SECRET`: Session cookie signing secret (required)
//! - `DOCS_DIR`: Directory holding the OpenAPI YAML annotation files (default: docs)

use anyhow::{anyhow, bail, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Run mode of the server
///
/// The mode picks which `.env.<mode>` file is loaded, the default log filter,
/// and whether the session cookie is marked `Secure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// Name of the dotenv file holding the mode-specific variables
    pub fn env_file(&self) -> &'static str {
        match self {
            Mode::Development => ".env.development",
            Mode::Production => ".env.production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Mode::Production)
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(anyhow!(
                "MODE must be 'development' or 'production', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => f.write_str("development"),
            Mode::Production => f.write_str("production"),
        }
    }
}

/// Application configuration
///
/// This struct holds all configuration values needed to run the server.
/// All fields are public for easy access from other modules.
///
/// The session secret is a `SecretString`, so printing the config with `{:?}`
/// (which `main` does at startup) shows `[REDACTED]` instead of the value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Run mode (development or production)
    pub mode: Mode,

    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number
    /// Default: 8080. Port 0 asks the OS for a free port.
    pub port: u16,

    /// SQLite database connection URL
    /// Format: "sqlite:filename.db?mode=rwc"
    /// The "mode=rwc" means: read, write, create if not exists
    pub database_url: String,

    /// Maximum number of pooled database connections
    pub database_max_connections: u32,

    /// Secret used to sign the session cookie
    pub session_secret: SecretString,

    /// Root directory scanned for `*.yaml` API documentation fragments
    pub docs_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Reads `MODE` from the process environment
    /// 2. Loads `.env.<mode>` and then `.env` if they exist (dotenvy never
    ///    overrides variables that are already set)
    /// 3. Reads each configuration value, falling back to defaults
    /// 4. Returns an error if a value fails to parse or `SECRET` is missing
    ///
    /// ## Example .env.development file
    /// ```text
    /// PORT=8080
    /// DATABASE_URL=sqlite:ecommerce.db?mode=rwc
    /// SECRET=change-me
    /// ```
    pub fn from_env() -> Result<Self> {
        let mode = match env::var("MODE") {
            Ok(value) => value.parse()?,
            Err(_) => Mode::default(),
        };

        // Missing files are fine, the process environment may be enough
        dotenvy::from_filename(mode.env_file()).ok();
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup("MODE") {
            Some(value) => value.parse()?,
            None => Mode::default(),
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", value))?,
            None => 8080,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value.trim().parse().with_context(|| {
                format!("DATABASE_MAX_CONNECTIONS must be a number, got '{}'", value)
            })?,
            None => 5,
        };
        if database_max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let session_secret = lookup("SECRET").context("SECRET must be set")?;
        if session_secret.trim().is_empty() {
            bail!("SECRET must not be empty");
        }

        Ok(Config {
            mode,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:ecommerce.db?mode=rwc".to_string()),
            database_max_connections,
            session_secret: SecretString::from(session_secret),
            docs_dir: lookup("DOCS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("docs")),
        })
    }

    /// Get the socket address to bind the server to
    ///
    /// Combines host and port into a format suitable for TCP binding.
    /// Example: "0.0.0.0:8080"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Raw bytes of the session secret, for deriving the cookie signing key
    pub fn session_secret_bytes(&self) -> &[u8] {
        self.session_secret.expose_secret().as_bytes()
    }
}
