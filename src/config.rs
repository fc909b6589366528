//! Service configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Both services read the same variable names; only the defaults of
//! `DATABASE_URL` and `LISTEN` differ per [`Service`]. Command-line flags
//! override the environment (see [`Config::with_overrides`]).
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite URL (default: `sqlite:///data/urls.db` or `sqlite:///data/todo.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000` or `0.0.0.0:8001`)
//! - `BASE_URL` - Origin used to build short URLs (default: `http://localhost:80`)
//! - `CODE_MAX_ATTEMPTS` - Short code candidates per allocation (default: 10, max: 1000)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_BUSY_TIMEOUT` - Seconds a writer waits for the SQLite lock (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::application::services::link_service::DEFAULT_MAX_CODE_ATTEMPTS;
use crate::infrastructure::database::PoolSettings;

/// Which of the two HTTP services a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Shortener,
    Todo,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Service::Shortener => "shortener",
            Service::Todo => "todo",
        }
    }

    fn default_database_url(self) -> &'static str {
        match self {
            Service::Shortener => "sqlite:///data/urls.db",
            Service::Todo => "sqlite:///data/todo.db",
        }
    }

    fn default_listen_addr(self) -> &'static str {
        match self {
            Service::Shortener => "0.0.0.0:8000",
            Service::Todo => "0.0.0.0:8001",
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub service: Service,
    pub database_url: String,
    pub listen_addr: String,
    /// Origin prepended to short codes in responses. Shortener only.
    pub base_url: String,
    /// Upper bound on short code candidates drawn per allocation.
    pub code_max_attempts: usize,
    pub log_level: String,
    pub log_format: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Seconds a connection waits on a locked database before failing
    /// (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
}

impl Config {
    /// Loads configuration for `service` from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env(service: Service) -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| service.default_database_url().to_string());
        let listen_addr =
            env::var("LISTEN").unwrap_or_else(|_| service.default_listen_addr().to_string());
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:80".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_max_attempts = parse_var("CODE_MAX_ATTEMPTS", DEFAULT_MAX_CODE_ATTEMPTS)?;
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;
        let db_busy_timeout = parse_var("DB_BUSY_TIMEOUT", 5)?;

        Ok(Self {
            service,
            database_url,
            listen_addr,
            base_url,
            code_max_attempts,
            log_level,
            log_format,
            db_max_connections,
            db_busy_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a `sqlite:` URL
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an `http://` or `https://` origin (shortener only)
    /// - `code_max_attempts` is outside `1..=1000`
    /// - `log_format` is not `text` or `json`
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.service == Service::Shortener
            && !self.base_url.starts_with("http://")
            && !self.base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > 1000 {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 1000, got {}",
                self.code_max_attempts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_busy_timeout == 0 {
            anyhow::bail!("DB_BUSY_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Replaces the listen address and database URL when given.
    pub fn with_overrides(mut self, listen: Option<String>, database_url: Option<String>) -> Self {
        if let Some(listen) = listen {
            self.listen_addr = listen;
        }
        if let Some(database_url) = database_url {
            self.database_url = database_url;
        }
        self
    }

    /// Pool settings derived from this configuration.
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            database_url: self.database_url.clone(),
            max_connections: self.db_max_connections,
            busy_timeout: Duration::from_secs(self.db_busy_timeout),
            create_if_missing: true,
        }
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded ({} service):", self.service.name());
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        if self.service == Service::Shortener {
            tracing::info!("  Base URL: {}", self.base_url);
            tracing::info!("  Code max attempts: {}", self.code_max_attempts);
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{v}'")),
        Err(_) => Ok(default),
    }
}
