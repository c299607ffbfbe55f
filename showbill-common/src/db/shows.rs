//! Show queries
//!
//! Shows are an association entity; there is no update or delete path.
//! Display queries join both sides so a page renders from one result set
//! instead of a lookup per row.

use crate::db::models::{ArtistShowRow, ShowListRow, VenueShowRow};
use crate::Result;
use sqlx::SqlitePool;

/// Insert a show association row.
///
/// No overlap or double-booking validation: the composite primary key
/// only rejects an exact (artist, venue, start_time) duplicate.
pub async fn insert(
    pool: &SqlitePool,
    artist_id: i64,
    venue_id: i64,
    start_time: &str,
) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)")
        .bind(artist_id)
        .bind(venue_id)
        .bind(start_time)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// All shows flattened with venue and artist display fields
pub async fn list(pool: &SqlitePool) -> Result<Vec<ShowListRow>> {
    let rows = sqlx::query_as::<_, ShowListRow>(
        "SELECT s.venue_id, v.name AS venue_name,
                s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         JOIN artists a ON a.id = s.artist_id
         ORDER BY s.rowid",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Shows at one venue, with artist display fields
pub async fn for_venue(pool: &SqlitePool, venue_id: i64) -> Result<Vec<VenueShowRow>> {
    let rows = sqlx::query_as::<_, VenueShowRow>(
        "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                s.start_time
         FROM shows s
         JOIN artists a ON a.id = s.artist_id
         WHERE s.venue_id = ?
         ORDER BY s.rowid",
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Shows by one artist, with venue display fields
pub async fn for_artist(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ArtistShowRow>> {
    let rows = sqlx::query_as::<_, ArtistShowRow>(
        "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         WHERE s.artist_id = ?
         ORDER BY s.rowid",
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Count of shows at a venue strictly later than `now`
pub async fn upcoming_count_for_venue(
    pool: &SqlitePool,
    venue_id: i64,
    now: chrono::NaiveDateTime,
) -> Result<usize> {
    let rows = for_venue(pool, venue_id).await?;
    Ok(rows
        .iter()
        .filter(|row| crate::time::is_upcoming(&row.start_time, now))
        .count())
}

/// Count of shows by an artist strictly later than `now`
pub async fn upcoming_count_for_artist(
    pool: &SqlitePool,
    artist_id: i64,
    now: chrono::NaiveDateTime,
) -> Result<usize> {
    let rows = for_artist(pool, artist_id).await?;
    Ok(rows
        .iter()
        .filter(|row| crate::time::is_upcoming(&row.start_time, now))
        .count())
}
