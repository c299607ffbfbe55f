//! Show pages: listing and the two creation flows
//!
//! Shows are created either from the standalone form or from a venue
//! page, where an artist-name search prefills the form. There is no
//! overlap validation; only an exact duplicate triple is rejected by
//! the composite key.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use showbill_common::db::{artists, shows, venues};
use showbill_common::Error;
use tracing::{info, warn};

use crate::api::{pages, redirect_with_notice};
use crate::error::PageResult;
use crate::views::{self, escape, Flash};
use crate::AppState;

/// Show creation form fields.
///
/// Ids arrive as text so a malformed submission lands on the flash
/// contract instead of a bare extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

/// Booking form posted from a venue detail page
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    /// Artist name search term
    #[serde(default)]
    pub name: String,
}

/// GET /shows
///
/// All shows flattened with venue and artist display fields.
pub async fn list_shows(State(state): State<AppState>) -> PageResult<Html<String>> {
    let rows = shows::list(&state.db).await?;

    let body = if rows.is_empty() {
        "<h1>Shows</h1>\n<p class=\"muted\">No shows listed yet.</p>".to_string()
    } else {
        let mut table = String::from(
            "<table>\n<tr><th>Venue</th><th>Artist</th><th>Start time</th></tr>\n",
        );
        for row in &rows {
            table.push_str(&format!(
                "<tr><td><a href=\"/venues/{}\">{}</a></td>\
                 <td><a href=\"/artists/{}\">{}</a></td>\
                 <td>{}</td></tr>\n",
                row.venue_id,
                escape(&row.venue_name),
                row.artist_id,
                escape(&row.artist_name),
                escape(&row.start_time),
            ));
        }
        table.push_str("</table>");
        format!("<h1>Shows</h1>\n{}", table)
    };

    Ok(Html(views::layout("Shows", None, &body)))
}

fn show_form_page(
    artist_id: Option<i64>,
    venue_id: Option<i64>,
    flash: Option<&Flash>,
) -> String {
    let artist_value = artist_id.map(|id| id.to_string()).unwrap_or_default();
    let venue_value = venue_id.map(|id| id.to_string()).unwrap_or_default();

    let body = format!(
        "<h1>List a show</h1>\n\
         <form method=\"post\" action=\"/shows/create\">\n\
         <label>Artist id</label>\n<input type=\"text\" name=\"artist_id\" value=\"{artist}\">\n\
         <label>Venue id</label>\n<input type=\"text\" name=\"venue_id\" value=\"{venue}\">\n\
         <label>Start time (YYYY-MM-DD HH:MM:SS)</label>\n\
         <input type=\"text\" name=\"start_time\">\n\
         <button type=\"submit\">Submit</button>\n\
         </form>",
        artist = artist_value,
        venue = venue_value,
    );

    views::layout("List a show", flash, &body)
}

/// GET /shows/create
///
/// Empty show creation form
pub async fn create_show_form() -> Html<String> {
    Html(show_form_page(None, None, None))
}

/// POST /shows/:venue_id/create/
///
/// Pre-filled show creation from a venue page: the venue comes from the
/// path and the artist from a name search. No match is a warning back
/// on the venue page, not a crash.
pub async fn create_show_from_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
    Form(form): Form<BookingForm>,
) -> PageResult<Response> {
    venues::get(&state.db, venue_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("venue {}", venue_id)))?;

    let artist = match artists::find_by_name(&state.db, &form.name).await? {
        Some(artist) => artist,
        None => {
            let flash =
                Flash::warning(format!("No artist matching \"{}\" was found.", form.name));
            let detail = format!("/venues/{}", venue_id);
            return Ok(Redirect::to(&redirect_with_notice(&detail, &flash)).into_response());
        }
    };

    let flash = Flash::info(
        "Please set the start time only, the venue and artist are already filled.",
    );
    Ok(Html(show_form_page(Some(artist.id), Some(venue_id), Some(&flash))).into_response())
}

/// POST /shows/create
///
/// Insert the association row; a missing side or a persistence failure
/// rolls back and lands on the landing page with a warning banner.
pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> PageResult<Html<String>> {
    let failure = || {
        Flash::warning(format!(
            "An error occurred. Show on {} could not be listed.",
            form.start_time
        ))
    };

    let (artist_id, venue_id) = match (form.artist_id.parse::<i64>(), form.venue_id.parse::<i64>()) {
        (Ok(artist_id), Ok(venue_id)) => (artist_id, venue_id),
        _ => {
            warn!(
                "Show listing rejected: non-numeric ids ({:?}, {:?})",
                form.artist_id, form.venue_id
            );
            return Ok(pages::home_page(Some(&failure())));
        }
    };

    // Both sides must exist before the association row goes in
    let artist = artists::get(&state.db, artist_id).await?;
    let venue = venues::get(&state.db, venue_id).await?;
    if artist.is_none() || venue.is_none() {
        warn!(
            "Show listing rejected: missing artist {} or venue {}",
            artist_id, venue_id
        );
        return Ok(pages::home_page(Some(&failure())));
    }

    match shows::insert(&state.db, artist_id, venue_id, &form.start_time).await {
        Ok(()) => {
            info!("Listed show: artist {} at venue {} on {}", artist_id, venue_id, form.start_time);
            Ok(pages::home_page(Some(&Flash::info(format!(
                "Show on {} was successfully listed!",
                form.start_time
            )))))
        }
        Err(err) => {
            warn!("Show listing failed: {}", err);
            Ok(pages::home_page(Some(&failure())))
        }
    }
}
