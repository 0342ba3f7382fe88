//! Database initialization
//!
//! Opens (or creates) the SQLite database file and brings the schema up.
//! Initialization is idempotent: every statement here is safe to run
//! against an already-populated database.

use crate::Result;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Use sqlite options to create database if it doesn't exist
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    // WAL mode lets readers proceed while a write is in flight
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    // Set busy timeout so concurrent writers wait instead of failing fast
    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    create_songs_table(&pool).await?;

    Ok(pool)
}

/// Create the songs table
///
/// `releaseYear` keeps its camelCase spelling so the table matches the
/// field name served over the API and stays readable in existing
/// database files.
pub async fn create_songs_table(pool: &SqlitePool) -> Result<()> {
    // AUTOINCREMENT keeps ids monotonic: a deleted song's id is never
    // handed out again
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            artist TEXT NOT NULL,
            releaseYear INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
