//! Database connection pool and migration management.
//!
//! This module provides utilities for:
//! - Creating and managing a SQLite connection pool
//! - Running database migrations automatically

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

/// Type alias for the SQLite connection pool.
///
/// The pool is the only handle to storage. It is created once in `main`
/// and passed to every handler through axum `State`.
pub type DbPool = Pool<Sqlite>;

/// Create a new SQLite connection pool.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (e.g. `sqlite://auto_service.db`)
/// * `max_connections` - upper bound on pooled connections
///
/// The database file is created if it does not exist yet, and foreign key
/// enforcement is switched on for every connection.
///
/// # Errors
///
/// Returns an error if:
/// - The connection string is invalid
/// - The database file cannot be opened or created
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Migrations are tracked in the `_sqlx_migrations` table, so each one runs only once.
/// This creates the `vehicles` and `service_records` tables on first start.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro embeds ./migrations at compile time
    sqlx::migrate!("./migrations").run(pool).await
}
