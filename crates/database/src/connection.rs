use crate::error::DbError;
use dotenvy::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Where the opinion base lives when `DATABASE_URL` is not set.
///
/// The file is created on first use, so a plain `cargo run -p web-server`
/// works with zero setup.
const DEFAULT_DATABASE_URL: &str = "sqlite://opiniao.db";

/// Establishes a connection pool to the opinion database.
///
/// This function reads `DATABASE_URL` from the environment (honoring a
/// `.env` file when present), creates a connection pool with bounded
/// settings, and returns it. The pool can be shared across the entire
/// application.
pub async fn connect() -> Result<SqlitePool, DbError> {
    // Load environment variables from the .env file, if there is one.
    dotenv().ok();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    connect_with(&database_url).await
}

/// Establishes a connection pool for an explicit database URL.
///
/// An in-memory URL is clamped to a single pooled connection: every
/// connection to `:memory:` opens its own database, so a wider pool would
/// hand out empty ones.
pub async fn connect_with(database_url: &str) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| DbError::ConnectionConfigError(e.to_string()))?
        .create_if_missing(true);

    let max_connections = if database_url.contains(":memory:") { 1 } else { 10 };

    tracing::debug!(%database_url, "opening the opinion database");

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// A utility function to run database migrations automatically.
///
/// This is useful for ensuring the database schema is up-to-date when the
/// application starts; the migration files are embedded in the binary at
/// compile time.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
