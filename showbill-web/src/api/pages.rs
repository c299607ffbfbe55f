//! Landing page and fallback handlers

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::views::{self, Flash};

/// Build the landing page, optionally with a flash banner.
///
/// The create/update/delete handlers land here after their work, so the
/// banner slot is part of the page contract.
pub fn home_page(flash: Option<&Flash>) -> Html<String> {
    let body = "<h1>Showbill</h1>\n\
         <p>A booking directory for venues and artists.</p>\n\
         <ul>\n\
         <li><a href=\"/venues\">Browse venues</a></li>\n\
         <li><a href=\"/artists\">Browse artists</a></li>\n\
         <li><a href=\"/shows\">Browse shows</a></li>\n\
         </ul>";
    Html(views::layout("Home", flash, body))
}

/// GET /
///
/// Landing page
pub async fn index() -> Html<String> {
    home_page(None)
}

/// Fallback for unknown routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::not_found_page("page")))
}
