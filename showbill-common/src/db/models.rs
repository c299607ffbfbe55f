//! Database models

use serde::{Deserialize, Serialize};

/// A venue record as stored
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    /// Brace-wrapped comma-joined tag list, see [`crate::genres`]
    pub genres: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// An artist record as stored
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

/// Association record linking one artist and one venue at a start time
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Show {
    pub artist_id: i64,
    pub venue_id: i64,
    /// TEXT timestamp, `%Y-%m-%d %H:%M:%S`, see [`crate::time`]
    pub start_time: String,
}

/// The editable field subset of a venue (create and edit forms)
#[derive(Debug, Clone)]
pub struct VenueFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    /// Already encoded into the stored text form
    pub genres: String,
    pub facebook_link: String,
}

/// The editable field subset of an artist
#[derive(Debug, Clone)]
pub struct ArtistFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub facebook_link: String,
}

/// A show joined with artist display fields, for venue detail pages
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct VenueShowRow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

/// A show joined with venue display fields, for artist detail pages
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArtistShowRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

/// A show flattened with both sides' display fields, for the show listing
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ShowListRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}
