//! showbill-web library - booking directory web module
//!
//! Server-rendered venue/artist/show directory over the shared SQLite
//! database. One handler module per entity, all pages assembled in Rust.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod views;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::pages::index))
        // Venues
        .route("/venues", get(api::venues::list_venues))
        .route("/venues/search", post(api::venues::search_venues))
        .route(
            "/venues/create",
            get(api::venues::create_venue_form).post(api::venues::create_venue_submission),
        )
        .route(
            "/venues/:venue_id",
            get(api::venues::show_venue).delete(api::venues::delete_venue),
        )
        .route(
            "/venues/:venue_id/edit",
            get(api::venues::edit_venue_form).post(api::venues::edit_venue_submission),
        )
        // Artists
        .route("/artists", get(api::artists::list_artists))
        .route("/artists/search", post(api::artists::search_artists))
        .route(
            "/artists/create",
            get(api::artists::create_artist_form).post(api::artists::create_artist_submission),
        )
        .route("/artists/:artist_id", get(api::artists::show_artist))
        .route(
            "/artists/:artist_id/edit",
            get(api::artists::edit_artist_form).post(api::artists::edit_artist_submission),
        )
        // Shows
        .route("/shows", get(api::shows::list_shows))
        .route(
            "/shows/create",
            get(api::shows::create_show_form).post(api::shows::create_show_submission),
        )
        .route("/shows/:venue_id/create/", post(api::shows::create_show_from_venue))
        .merge(api::health::health_routes())
        .fallback(api::pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
