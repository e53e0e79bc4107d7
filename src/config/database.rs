//! Database configuration module.
//!
//! Resolves the connection URL and pool size from the environment and opens a
//! `SeaORM` connection. Works against `SQLite` (the default, a local file) and
//! `PostgreSQL`, chosen purely by the URL scheme.

use crate::errors::{Error, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{debug, info};

/// Default database when `DATABASE_URL` is not set. `mode=rwc` creates the file.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/cabinet_shop.sqlite?mode=rwc";

/// Default pool size when `DATABASE_MAX_CONNECTIONS` is not set.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Gets the database URL from environment variable or returns default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Reads `DATABASE_MAX_CONNECTIONS`, falling back to [`DEFAULT_MAX_CONNECTIONS`].
///
/// # Errors
/// Returns `Error::Config` if the variable is set but is not a positive integer.
pub fn get_max_connections() -> Result<u32> {
    match std::env::var("DATABASE_MAX_CONNECTIONS") {
        Ok(raw) => parse_max_connections(&raw),
        Err(_) => Ok(DEFAULT_MAX_CONNECTIONS),
    }
}

fn parse_max_connections(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(Error::Config {
            message: format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"),
        }),
        Ok(n) => Ok(n),
    }
}

/// Builds connection options for `url` with the given pool size.
#[must_use]
pub fn connect_options(url: &str, max_connections: u32) -> ConnectOptions {
    let mut options = ConnectOptions::new(url.to_string());
    options
        .max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);
    options
}

/// Establishes a connection using `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`.
///
/// `SQLite` files live under `data/` by default; the directory is created if
/// it does not exist yet.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    let max_connections = get_max_connections()?;

    if database_url == DEFAULT_DATABASE_URL {
        std::fs::create_dir_all("data")?;
    }

    debug!("Connecting to database: {}", redact_url(&database_url));
    let db = Database::connect(connect_options(&database_url, max_connections)).await?;
    info!("Connected to database ({:?})", db.get_database_backend());
    Ok(db)
}

/// Hides the password portion of a connection URL for logging.
#[must_use]
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.split_once('@') else {
        return url.to_string();
    };
    match credentials.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_string(),
    }
}
