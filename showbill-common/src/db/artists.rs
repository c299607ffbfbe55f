//! Artist queries
//!
//! Artists have no delete path; records only leave the table by hand.

use crate::db::models::{Artist, ArtistFields};
use crate::{Error, Result};
use sqlx::SqlitePool;

/// Insert a new artist, returning its generated id
pub async fn insert(pool: &SqlitePool, fields: &ArtistFields) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO artists (name, city, state, phone, genres, facebook_link)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(&fields.genres)
    .bind(&fields.facebook_link)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    tx.commit().await?;

    Ok(id)
}

/// Fetch an artist by id
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let artist = sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(artist)
}

/// All artists in storage order
pub async fn list(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let artists = sqlx::query_as::<_, Artist>("SELECT * FROM artists ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(artists)
}

/// Case-insensitive substring match on name only
pub async fn search(pool: &SqlitePool, term: &str) -> Result<Vec<Artist>> {
    let artists = sqlx::query_as::<_, Artist>(
        "SELECT * FROM artists WHERE name LIKE '%' || ? || '%' ORDER BY id",
    )
    .bind(term)
    .fetch_all(pool)
    .await?;

    Ok(artists)
}

/// First artist whose name contains the term, if any.
///
/// Backs the venue-page booking flow, which looks an artist up by name.
pub async fn find_by_name(pool: &SqlitePool, term: &str) -> Result<Option<Artist>> {
    let artist = sqlx::query_as::<_, Artist>(
        "SELECT * FROM artists WHERE name LIKE '%' || ? || '%' ORDER BY id LIMIT 1",
    )
    .bind(term)
    .fetch_optional(pool)
    .await?;

    Ok(artist)
}

/// Overwrite the editable field subset of an existing artist
pub async fn update(pool: &SqlitePool, id: i64, fields: &ArtistFields) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "UPDATE artists
         SET name = ?, genres = ?, city = ?, state = ?, phone = ?, facebook_link = ?
         WHERE id = ?",
    )
    .bind(&fields.name)
    .bind(&fields.genres)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(&fields.facebook_link)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    tx.commit().await?;
    Ok(())
}
