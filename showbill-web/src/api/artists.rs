//! Artist pages: listing, search, detail, create/edit
//!
//! Artists have no delete path. Search computes the real per-artist
//! upcoming count (the data this page always had but never showed).

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use showbill_common::db::models::{Artist, ArtistFields, ArtistShowRow};
use showbill_common::db::{artists, shows};
use showbill_common::{genres, time, Error};
use tracing::{info, warn};

use crate::api::{pages, redirect_with_notice, NoticeQuery, SearchForm};
use crate::error::PageResult;
use crate::views::{self, escape, Flash};
use crate::AppState;

/// Artist form fields, shared by the create and edit forms
#[derive(Debug, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    /// Comma-separated genre tags, one text input
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub facebook_link: String,
}

impl ArtistForm {
    fn into_fields(self) -> ArtistFields {
        ArtistFields {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: genres::encode(&genres::from_form_field(&self.genres)),
            facebook_link: self.facebook_link,
        }
    }
}

/// GET /artists
///
/// All artists in storage order, id and name only.
pub async fn list_artists(State(state): State<AppState>) -> PageResult<Html<String>> {
    let all = artists::list(&state.db).await?;

    let mut items = String::new();
    for artist in &all {
        items.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a></li>\n",
            artist.id,
            escape(&artist.name),
        ));
    }

    let body = if all.is_empty() {
        "<h1>Artists</h1>\n<p class=\"muted\">No artists listed yet.</p>".to_string()
    } else {
        format!("<h1>Artists</h1>\n<ul>\n{}</ul>", items)
    };
    Ok(Html(views::layout("Artists", None, &body)))
}

/// POST /artists/search
///
/// Case-insensitive substring match on name only.
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> PageResult<Html<String>> {
    let now = time::now();
    let results = artists::search(&state.db, &form.search_term).await?;

    let mut items = String::new();
    for artist in &results {
        let upcoming = shows::upcoming_count_for_artist(&state.db, artist.id, now).await?;
        items.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> \
             <span class=\"muted\">{} upcoming shows</span></li>\n",
            artist.id,
            escape(&artist.name),
            upcoming,
        ));
    }

    let body = format!(
        "<h1>Artist search</h1>\n\
         <p>Found {} result(s) for \"{}\"</p>\n<ul>\n{}</ul>",
        results.len(),
        escape(&form.search_term),
        items,
    );
    Ok(Html(views::layout("Artist search", None, &body)))
}

/// GET /artists/:artist_id
///
/// Artist detail with shows partitioned into past and upcoming at the
/// current instant.
pub async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
    Query(notice): Query<NoticeQuery>,
) -> PageResult<Html<String>> {
    let artist = artists::get(&state.db, artist_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("artist {}", artist_id)))?;

    let rows = shows::for_artist(&state.db, artist_id).await?;
    let now = time::now();
    let (upcoming, past): (Vec<ArtistShowRow>, Vec<ArtistShowRow>) = rows
        .into_iter()
        .partition(|row| time::is_upcoming(&row.start_time, now));

    let flash = notice.into_flash();
    Ok(Html(artist_detail_page(&artist, &past, &upcoming, flash.as_ref())))
}

fn show_rows(rows: &[ArtistShowRow]) -> String {
    if rows.is_empty() {
        return "<p class=\"muted\">No shows.</p>\n".to_string();
    }
    let mut out = String::from("<ul>\n");
    for row in rows {
        out.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a> \
             <span class=\"muted\">{}</span></li>\n",
            row.venue_id,
            escape(&row.venue_name),
            escape(&row.start_time),
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn artist_detail_page(
    artist: &Artist,
    past: &[ArtistShowRow],
    upcoming: &[ArtistShowRow],
    flash: Option<&Flash>,
) -> String {
    let genre_list = genres::parse(&artist.genres)
        .iter()
        .map(|g| escape(g))
        .collect::<Vec<_>>()
        .join(", ");

    let seeking = if artist.seeking_venue {
        format!(
            "<p>Seeking venues: {}</p>\n",
            escape(&artist.seeking_description)
        )
    } else {
        "<p class=\"muted\">Not currently seeking venues.</p>\n".to_string()
    };

    let body = format!(
        "<h1>{name}</h1>\n\
         <p class=\"muted\">Genres: {genres}</p>\n\
         <p>{city}, {state}</p>\n\
         <p>Phone: {phone}</p>\n\
         <p>Website: {website}</p>\n\
         <p>Facebook: {facebook}</p>\n\
         {seeking}\
         <p><img src=\"{image}\" alt=\"{name}\" width=\"200\"></p>\n\
         <p><a href=\"/artists/{id}/edit\">Edit artist</a></p>\n\
         <h2>Upcoming shows ({upcoming_count})</h2>\n{upcoming}\
         <h2>Past shows ({past_count})</h2>\n{past}",
        name = escape(&artist.name),
        genres = genre_list,
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(&artist.phone),
        website = escape(&artist.website),
        facebook = escape(&artist.facebook_link),
        seeking = seeking,
        image = escape(&artist.image_link),
        id = artist.id,
        upcoming_count = upcoming.len(),
        upcoming = show_rows(upcoming),
        past_count = past.len(),
        past = show_rows(past),
    );

    views::layout(&artist.name, flash, &body)
}

fn artist_form_page(
    heading: &str,
    action: &str,
    prefill: Option<&Artist>,
    flash: Option<&Flash>,
) -> String {
    let value = |field: fn(&Artist) -> &str| {
        prefill.map(|a| escape(field(a))).unwrap_or_default()
    };
    let genre_value = prefill
        .map(|a| escape(&genres::parse(&a.genres).join(", ")))
        .unwrap_or_default();

    let body = format!(
        "<h1>{heading}</h1>\n\
         <form method=\"post\" action=\"{action}\">\n\
         <label>Name</label>\n<input type=\"text\" name=\"name\" value=\"{name}\">\n\
         <label>City</label>\n<input type=\"text\" name=\"city\" value=\"{city}\">\n\
         <label>State</label>\n<input type=\"text\" name=\"state\" value=\"{state}\">\n\
         <label>Phone</label>\n<input type=\"text\" name=\"phone\" value=\"{phone}\">\n\
         <label>Genres (comma separated)</label>\n<input type=\"text\" name=\"genres\" value=\"{genres}\">\n\
         <label>Facebook link</label>\n<input type=\"text\" name=\"facebook_link\" value=\"{facebook}\">\n\
         <button type=\"submit\">Submit</button>\n\
         </form>",
        heading = escape(heading),
        action = escape(action),
        name = value(|a| &a.name),
        city = value(|a| &a.city),
        state = value(|a| &a.state),
        phone = value(|a| &a.phone),
        genres = genre_value,
        facebook = value(|a| &a.facebook_link),
    );

    views::layout(heading, flash, &body)
}

/// GET /artists/create
///
/// Empty artist creation form
pub async fn create_artist_form() -> Html<String> {
    Html(artist_form_page("List an artist", "/artists/create", None, None))
}

/// POST /artists/create
///
/// Insert a new artist; on persistence failure roll back and land on
/// the landing page with a warning banner.
pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Html<String> {
    let name = form.name.clone();
    let fields = form.into_fields();

    match artists::insert(&state.db, &fields).await {
        Ok(id) => {
            info!("Listed artist {} ({})", id, name);
            pages::home_page(Some(&Flash::info(format!(
                "Artist {} was successfully listed!",
                name
            ))))
        }
        Err(err) => {
            warn!("Artist listing failed: {}", err);
            pages::home_page(Some(&Flash::warning(format!(
                "An error occurred. Artist {} could not be listed.",
                name
            ))))
        }
    }
}

/// GET /artists/:artist_id/edit
///
/// Edit form prefilled from the stored record
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
) -> PageResult<Html<String>> {
    let artist = artists::get(&state.db, artist_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("artist {}", artist_id)))?;

    let action = format!("/artists/{}/edit", artist_id);
    Ok(Html(artist_form_page("Edit artist", &action, Some(&artist), None)))
}

/// POST /artists/:artist_id/edit
///
/// Overwrite the fixed field subset, then redirect to the detail page
/// carrying the outcome banner.
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
    Form(form): Form<ArtistForm>,
) -> PageResult<Response> {
    artists::get(&state.db, artist_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("artist {}", artist_id)))?;

    let name = form.name.clone();
    let fields = form.into_fields();
    let detail = format!("/artists/{}", artist_id);

    let flash = match artists::update(&state.db, artist_id, &fields).await {
        Ok(()) => {
            info!("Updated artist {} ({})", artist_id, name);
            Flash::info(format!("Artist {} was successfully updated!", name))
        }
        Err(err) => {
            warn!("Artist update failed: {}", err);
            Flash::warning(format!("An error occurred. Artist {} could not be updated.", name))
        }
    };

    Ok(Redirect::to(&redirect_with_notice(&detail, &flash)).into_response())
}
