//! Database initialization
//!
//! Opens (or creates) the SQLite database and brings the schema up with
//! `CREATE TABLE IF NOT EXISTS`, so a fresh root folder starts working
//! without any manual migration step.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Initialize database connection pool and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Pragmas are per-connection, so they go on the connect options and
    // apply to every connection the pool hands out:
    // - foreign_keys: venue deletion must cascade into shows
    // - WAL: concurrent readers while a handler commits
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(5000));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Schema creation (idempotent)
    create_venues_table(&pool).await?;
    create_artists_table(&pool).await?;
    create_shows_table(&pool).await?;

    Ok(pool)
}

async fn create_venues_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT NOT NULL DEFAULT '',
            state TEXT NOT NULL DEFAULT '',
            address TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            genres TEXT NOT NULL DEFAULT '{}',
            image_link TEXT NOT NULL DEFAULT '/static/img/venue.png',
            facebook_link TEXT NOT NULL DEFAULT '',
            website TEXT NOT NULL DEFAULT '',
            seeking_talent INTEGER NOT NULL DEFAULT 1,
            seeking_description TEXT NOT NULL DEFAULT 'We are on the lookout for a local artist'
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_artists_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT NOT NULL DEFAULT '',
            state TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            genres TEXT NOT NULL DEFAULT '{}',
            image_link TEXT NOT NULL DEFAULT '/static/img/artist.png',
            facebook_link TEXT NOT NULL DEFAULT '',
            website TEXT NOT NULL DEFAULT '',
            seeking_venue INTEGER NOT NULL DEFAULT 1,
            seeking_description TEXT NOT NULL DEFAULT 'Looking for shows to perform'
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_shows_table(pool: &SqlitePool) -> Result<()> {
    // Association entity: one artist, one venue, keyed by the full triple
    // so a pair can repeat only with a different start_time.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            artist_id INTEGER NOT NULL REFERENCES artists(id),
            venue_id INTEGER NOT NULL REFERENCES venues(id) ON DELETE CASCADE,
            start_time TEXT NOT NULL,
            PRIMARY KEY (artist_id, venue_id, start_time)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
