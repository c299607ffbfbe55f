//! Venue queries
//!
//! Mutations run inside an explicit transaction: commit on success, and
//! the transaction rolls back on drop when a statement errors out.

use crate::db::models::{Venue, VenueFields};
use crate::{Error, Result};
use sqlx::SqlitePool;

/// Insert a new venue, returning its generated id.
///
/// Columns outside the form subset take the schema defaults.
pub async fn insert(pool: &SqlitePool, fields: &VenueFields) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO venues (name, city, state, address, phone, genres, facebook_link)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.genres)
    .bind(&fields.facebook_link)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    tx.commit().await?;

    Ok(id)
}

/// Fetch a venue by id
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let venue = sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(venue)
}

/// Distinct (city, state) pairs in first-insertion order.
///
/// The grouping key is the literal pair; no case normalization.
pub async fn city_groups(pool: &SqlitePool) -> Result<Vec<(String, String)>> {
    let groups = sqlx::query_as::<_, (String, String)>(
        "SELECT city, state FROM venues GROUP BY city, state ORDER BY MIN(id)",
    )
    .fetch_all(pool)
    .await?;

    Ok(groups)
}

/// All venues in one (city, state) group, storage order
pub async fn in_city(pool: &SqlitePool, city: &str, state: &str) -> Result<Vec<Venue>> {
    let venues = sqlx::query_as::<_, Venue>(
        "SELECT * FROM venues WHERE city = ? AND state = ? ORDER BY id",
    )
    .bind(city)
    .bind(state)
    .fetch_all(pool)
    .await?;

    Ok(venues)
}

/// Case-insensitive substring match on name only.
///
/// SQLite LIKE is case-insensitive for ASCII letters.
pub async fn search(pool: &SqlitePool, term: &str) -> Result<Vec<Venue>> {
    let venues = sqlx::query_as::<_, Venue>(
        "SELECT * FROM venues WHERE name LIKE '%' || ? || '%' ORDER BY id",
    )
    .bind(term)
    .fetch_all(pool)
    .await?;

    Ok(venues)
}

/// Overwrite the editable field subset of an existing venue
pub async fn update(pool: &SqlitePool, id: i64, fields: &VenueFields) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "UPDATE venues
         SET name = ?, genres = ?, city = ?, state = ?, address = ?, phone = ?, facebook_link = ?
         WHERE id = ?",
    )
    .bind(&fields.name)
    .bind(&fields.genres)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.facebook_link)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    Ok(())
}

/// Delete a venue; its shows go with it via the cascading foreign key
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    Ok(())
}
