//! Venue pages: grouped listing, search, detail, create/edit/delete
//!
//! Read paths return typed not-found errors for absent ids. Mutation
//! paths recover from persistence failures with a flash banner and the
//! landing page, so the browser never sees a bare error for a failed
//! form submission.

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use showbill_common::db::models::{Venue, VenueFields, VenueShowRow};
use showbill_common::db::{shows, venues};
use showbill_common::{genres, time, Error};
use tracing::{info, warn};

use crate::api::{pages, redirect_with_notice, NoticeQuery, SearchForm};
use crate::error::PageResult;
use crate::views::{self, escape, Flash};
use crate::AppState;

/// Venue form fields, shared by the create and edit forms
#[derive(Debug, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    /// Comma-separated genre tags, one text input
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub facebook_link: String,
}

impl VenueForm {
    fn into_fields(self) -> VenueFields {
        VenueFields {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            genres: genres::encode(&genres::from_form_field(&self.genres)),
            facebook_link: self.facebook_link,
        }
    }
}

/// GET /venues
///
/// Venues grouped by their literal (city, state) pair, each with its
/// count of upcoming shows.
pub async fn list_venues(State(state): State<AppState>) -> PageResult<Html<String>> {
    let now = time::now();
    let mut sections = String::new();

    for (city, us_state) in venues::city_groups(&state.db).await? {
        let mut items = String::new();
        for venue in venues::in_city(&state.db, &city, &us_state).await? {
            let upcoming = shows::upcoming_count_for_venue(&state.db, venue.id, now).await?;
            items.push_str(&format!(
                "<li><a href=\"/venues/{}\">{}</a> \
                 <span class=\"muted\">{} upcoming shows</span></li>\n",
                venue.id,
                escape(&venue.name),
                upcoming,
            ));
        }
        sections.push_str(&format!(
            "<h2>{}, {}</h2>\n<ul>\n{}</ul>\n",
            escape(&city),
            escape(&us_state),
            items,
        ));
    }

    if sections.is_empty() {
        sections.push_str("<p class=\"muted\">No venues listed yet.</p>\n");
    }

    let body = format!("<h1>Venues</h1>\n{}", sections);
    Ok(Html(views::layout("Venues", None, &body)))
}

/// POST /venues/search
///
/// Case-insensitive substring match on name only.
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> PageResult<Html<String>> {
    let now = time::now();
    let results = venues::search(&state.db, &form.search_term).await?;

    let mut items = String::new();
    for venue in &results {
        let upcoming = shows::upcoming_count_for_venue(&state.db, venue.id, now).await?;
        items.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a> \
             <span class=\"muted\">{} upcoming shows</span></li>\n",
            venue.id,
            escape(&venue.name),
            upcoming,
        ));
    }

    let body = format!(
        "<h1>Venue search</h1>\n\
         <p>Found {} result(s) for \"{}\"</p>\n<ul>\n{}</ul>",
        results.len(),
        escape(&form.search_term),
        items,
    );
    Ok(Html(views::layout("Venue search", None, &body)))
}

/// GET /venues/:venue_id
///
/// Venue detail with shows partitioned into past and upcoming at the
/// current instant.
pub async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
    Query(notice): Query<NoticeQuery>,
) -> PageResult<Html<String>> {
    let venue = venues::get(&state.db, venue_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("venue {}", venue_id)))?;

    let rows = shows::for_venue(&state.db, venue_id).await?;
    let now = time::now();
    let (upcoming, past): (Vec<VenueShowRow>, Vec<VenueShowRow>) = rows
        .into_iter()
        .partition(|row| time::is_upcoming(&row.start_time, now));

    let flash = notice.into_flash();
    Ok(Html(venue_detail_page(&venue, &past, &upcoming, flash.as_ref())))
}

fn show_rows(rows: &[VenueShowRow]) -> String {
    if rows.is_empty() {
        return "<p class=\"muted\">No shows.</p>\n".to_string();
    }
    let mut out = String::from("<ul>\n");
    for row in rows {
        out.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> \
             <span class=\"muted\">{}</span></li>\n",
            row.artist_id,
            escape(&row.artist_name),
            escape(&row.start_time),
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn venue_detail_page(
    venue: &Venue,
    past: &[VenueShowRow],
    upcoming: &[VenueShowRow],
    flash: Option<&Flash>,
) -> String {
    let genre_list = genres::parse(&venue.genres)
        .iter()
        .map(|g| escape(g))
        .collect::<Vec<_>>()
        .join(", ");

    let seeking = if venue.seeking_talent {
        format!(
            "<p>Seeking talent: {}</p>\n",
            escape(&venue.seeking_description)
        )
    } else {
        "<p class=\"muted\">Not currently seeking talent.</p>\n".to_string()
    };

    let body = format!(
        "<h1>{name}</h1>\n\
         <p class=\"muted\">Genres: {genres}</p>\n\
         <p>{address}, {city}, {state}</p>\n\
         <p>Phone: {phone}</p>\n\
         <p>Website: {website}</p>\n\
         <p>Facebook: {facebook}</p>\n\
         {seeking}\
         <p><img src=\"{image}\" alt=\"{name}\" width=\"200\"></p>\n\
         <p><a href=\"/venues/{id}/edit\">Edit venue</a></p>\n\
         <h2>Book an artist</h2>\n\
         <form method=\"post\" action=\"/shows/{id}/create/\">\n\
         <label>Artist name</label>\n\
         <input type=\"text\" name=\"name\">\n\
         <button type=\"submit\">Find artist</button>\n\
         </form>\n\
         <h2>Upcoming shows ({upcoming_count})</h2>\n{upcoming}\
         <h2>Past shows ({past_count})</h2>\n{past}",
        name = escape(&venue.name),
        genres = genre_list,
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape(&venue.phone),
        website = escape(&venue.website),
        facebook = escape(&venue.facebook_link),
        seeking = seeking,
        image = escape(&venue.image_link),
        id = venue.id,
        upcoming_count = upcoming.len(),
        upcoming = show_rows(upcoming),
        past_count = past.len(),
        past = show_rows(past),
    );

    views::layout(&venue.name, flash, &body)
}

fn venue_form_page(
    heading: &str,
    action: &str,
    prefill: Option<&Venue>,
    flash: Option<&Flash>,
) -> String {
    let value = |field: fn(&Venue) -> &str| {
        prefill.map(|v| escape(field(v))).unwrap_or_default()
    };
    let genre_value = prefill
        .map(|v| escape(&genres::parse(&v.genres).join(", ")))
        .unwrap_or_default();

    let body = format!(
        "<h1>{heading}</h1>\n\
         <form method=\"post\" action=\"{action}\">\n\
         <label>Name</label>\n<input type=\"text\" name=\"name\" value=\"{name}\">\n\
         <label>City</label>\n<input type=\"text\" name=\"city\" value=\"{city}\">\n\
         <label>State</label>\n<input type=\"text\" name=\"state\" value=\"{state}\">\n\
         <label>Address</label>\n<input type=\"text\" name=\"address\" value=\"{address}\">\n\
         <label>Phone</label>\n<input type=\"text\" name=\"phone\" value=\"{phone}\">\n\
         <label>Genres (comma separated)</label>\n<input type=\"text\" name=\"genres\" value=\"{genres}\">\n\
         <label>Facebook link</label>\n<input type=\"text\" name=\"facebook_link\" value=\"{facebook}\">\n\
         <button type=\"submit\">Submit</button>\n\
         </form>",
        heading = escape(heading),
        action = escape(action),
        name = value(|v| &v.name),
        city = value(|v| &v.city),
        state = value(|v| &v.state),
        address = value(|v| &v.address),
        phone = value(|v| &v.phone),
        genres = genre_value,
        facebook = value(|v| &v.facebook_link),
    );

    views::layout(heading, flash, &body)
}

/// GET /venues/create
///
/// Empty venue creation form
pub async fn create_venue_form() -> Html<String> {
    Html(venue_form_page("List a venue", "/venues/create", None, None))
}

/// POST /venues/create
///
/// Insert a new venue; on persistence failure roll back and land on the
/// landing page with a warning banner.
pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Html<String> {
    let name = form.name.clone();
    let fields = form.into_fields();

    match venues::insert(&state.db, &fields).await {
        Ok(id) => {
            info!("Listed venue {} ({})", id, name);
            pages::home_page(Some(&Flash::info(format!(
                "Venue {} was successfully listed!",
                name
            ))))
        }
        Err(err) => {
            warn!("Venue listing failed: {}", err);
            pages::home_page(Some(&Flash::warning(format!(
                "An error occurred. Venue {} could not be listed.",
                name
            ))))
        }
    }
}

/// DELETE /venues/:venue_id
///
/// Delete a venue; its shows cascade away with it. A missing id is a
/// clean 404, and a failed delete reports a warning banner like the
/// other mutations.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
) -> PageResult<Html<String>> {
    let venue = venues::get(&state.db, venue_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("venue {}", venue_id)))?;

    match venues::delete(&state.db, venue_id).await {
        Ok(()) => {
            info!("Deleted venue {} ({})", venue_id, venue.name);
            Ok(pages::home_page(Some(&Flash::info(format!(
                "Venue {} was successfully deleted!",
                venue.name
            )))))
        }
        // The row vanished between the fetch and the delete
        Err(Error::NotFound(what)) => Err(Error::NotFound(what).into()),
        Err(err) => {
            warn!("Venue delete failed: {}", err);
            Ok(pages::home_page(Some(&Flash::warning(format!(
                "An error occurred. Venue {} could not be deleted.",
                venue.name
            )))))
        }
    }
}

/// GET /venues/:venue_id/edit
///
/// Edit form prefilled from the stored record
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
) -> PageResult<Html<String>> {
    let venue = venues::get(&state.db, venue_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("venue {}", venue_id)))?;

    let action = format!("/venues/{}/edit", venue_id);
    Ok(Html(venue_form_page("Edit venue", &action, Some(&venue), None)))
}

/// POST /venues/:venue_id/edit
///
/// Overwrite the fixed field subset, then redirect to the detail page
/// carrying the outcome banner.
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
    Form(form): Form<VenueForm>,
) -> PageResult<Response> {
    venues::get(&state.db, venue_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("venue {}", venue_id)))?;

    let name = form.name.clone();
    let fields = form.into_fields();
    let detail = format!("/venues/{}", venue_id);

    let flash = match venues::update(&state.db, venue_id, &fields).await {
        Ok(()) => {
            info!("Updated venue {} ({})", venue_id, name);
            Flash::info(format!("Venue {} was successfully updated!", name))
        }
        Err(err) => {
            warn!("Venue update failed: {}", err);
            Flash::warning(format!("An error occurred. Venue {} could not be updated.", name))
        }
    };

    Ok(Redirect::to(&redirect_with_notice(&detail, &flash)).into_response())
}
