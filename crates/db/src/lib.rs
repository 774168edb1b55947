//! Persistence layer for the overlay store.
//!
//! SQLite via sqlx: connection-pool construction, embedded migrations,
//! a health probe, and the overlay repository.

pub mod models;
pub mod repositories;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL (e.g. `sqlite://overlays.db`).
///
/// Creates the database file if it does not exist yet and enables WAL
/// journaling so concurrent readers do not block the writer.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Apply all embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
