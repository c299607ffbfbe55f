//! Integration tests for the showbill-web routes
//!
//! Drives the router directly with tower's `oneshot` against a fresh
//! temporary database per test: listing/grouping, search, detail
//! partitioning, the create/edit/delete contracts, and the hardened
//! not-found behavior.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

use showbill_web::{build_router, AppState};

/// Test helper: fresh database + router; the TempDir keeps the file alive
async fn setup_app() -> (axum::Router, SqlitePool, TempDir) {
    let dir = TempDir::new().unwrap();
    let pool = showbill_common::db::init_database(&dir.path().join("showbill.db"))
        .await
        .expect("Should initialize test database");

    let app = build_router(AppState::new(pool.clone()));
    (app, pool, dir)
}

/// Test helper: request without a body
fn get_request(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

/// Test helper: urlencoded form POST
fn form_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: response body as text
async fn body_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

// =============================================================================
// Health and landing page
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _pool, _dir) = setup_app().await;

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "showbill-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_landing_page() {
    let (app, _pool, _dir) = setup_app().await;

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response.into_body()).await;
    assert!(text.contains("Showbill"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (app, _pool, _dir) = setup_app().await;

    let response = app.oneshot(get_request("/no/such/page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Venue creation and grouped listing
// =============================================================================

#[tokio::test]
async fn test_create_venue_then_grouped_listing() {
    let (app, _pool, _dir) = setup_app().await;

    let response = app
        .clone()
        .oneshot(form_request(
            "POST",
            "/venues/create",
            "name=The+Hall&city=Austin&state=TX&address=123+Main+St&phone=555-0100&genres=Rock,Jazz&facebook_link=",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response.into_body()).await;
    assert!(text.contains("Venue The Hall was successfully listed!"));

    // New venue appears in its (city, state) group with zero upcoming shows
    let response = app.oneshot(get_request("/venues")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response.into_body()).await;
    assert!(text.contains("Austin, TX"));
    assert!(text.contains("The Hall"));
    assert!(text.contains("0 upcoming shows"));
}

#[tokio::test]
async fn test_venue_detail_not_found() {
    let (app, _pool, _dir) = setup_app().await;

    let response = app.oneshot(get_request("/venues/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Show partitioning on the detail page
// =============================================================================

#[tokio::test]
async fn test_venue_detail_partitions_shows() {
    let (app, _pool, _dir) = setup_app().await;

    app.clone()
        .oneshot(form_request(
            "POST",
            "/venues/create",
            "name=The+Hall&city=Austin&state=TX&address=&phone=&genres=Rock&facebook_link=",
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(form_request(
            "POST",
            "/artists/create",
            "name=The+Band&city=Austin&state=TX&phone=&genres=Rock&facebook_link=",
        ))
        .await
        .unwrap();

    // One show far in the future, one far in the past
    app.clone()
        .oneshot(form_request(
            "POST",
            "/shows/create",
            "artist_id=1&venue_id=1&start_time=2999-01-01+20:00:00",
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(form_request(
            "POST",
            "/shows/create",
            "artist_id=1&venue_id=1&start_time=2000-01-01+20:00:00",
        ))
        .await
        .unwrap();

    let response = app.oneshot(get_request("/venues/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response.into_body()).await;
    assert!(text.contains("Upcoming shows (1)"));
    assert!(text.contains("Past shows (1)"));
    assert!(text.contains("The Band"));
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_venue_search_case_insensitive() {
    let (app, _pool, _dir) = setup_app().await;

    app.clone()
        .oneshot(form_request(
            "POST",
            "/venues/create",
            "name=The+Art+House&city=Austin&state=TX&address=&phone=&genres=&facebook_link=",
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(form_request("POST", "/venues/search", "search_term=ART"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response.into_body()).await;
    assert!(text.contains("Found 1 result(s)"));
    assert!(text.contains("The Art House"));
}

#[tokio::test]
async fn test_artist_search_reports_upcoming_count() {
    let (app, _pool, _dir) = setup_app().await;

    app.clone()
        .oneshot(form_request(
            "POST",
            "/venues/create",
            "name=The+Hall&city=Austin&state=TX&address=&phone=&genres=&facebook_link=",
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(form_request(
            "POST",
            "/artists/create",
            "name=Blue+Notes&city=Austin&state=TX&phone=&genres=&facebook_link=",
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(form_request(
            "POST",
            "/shows/create",
            "artist_id=1&venue_id=1&start_time=2999-06-01+21:00:00",
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(form_request("POST", "/artists/search", "search_term=blue"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response.into_body()).await;
    assert!(text.contains("Found 1 result(s)"));
    assert!(text.contains("1 upcoming shows"));
}

// =============================================================================
// Genre round trip through the web surface
// =============================================================================

#[tokio::test]
async fn test_genres_round_trip_to_detail_page() {
    let (app, pool, _dir) = setup_app().await;

    app.clone()
        .oneshot(form_request(
            "POST",
            "/venues/create",
            "name=Genre+Venue&city=Austin&state=TX&address=&phone=&genres=Hip-Hop,Soul&facebook_link=",
        ))
        .await
        .unwrap();

    // Stored in the brace-wrapped text form
    let stored: String = sqlx::query_scalar("SELECT genres FROM venues WHERE name = 'Genre Venue'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "{Hip-Hop,Soul}");

    // Rendered back as the parsed list
    let response = app.oneshot(get_request("/venues/1")).await.unwrap();
    let text = body_text(response.into_body()).await;
    assert!(text.contains("Hip-Hop, Soul"));
}

// =============================================================================
// Edit
// =============================================================================

#[tokio::test]
async fn test_edit_venue_redirects_and_persists() {
    let (app, pool, _dir) = setup_app().await;

    app.clone()
        .oneshot(form_request(
            "POST",
            "/venues/create",
            "name=Old+Name&city=Austin&state=TX&address=&phone=&genres=&facebook_link=",
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(form_request(
            "POST",
            "/venues/1/edit",
            "name=New+Name&city=Dallas&state=TX&address=1+Elm+St&phone=555-0199&genres=Blues&facebook_link=",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let name: String = sqlx::query_scalar("SELECT name FROM venues WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(name, "New Name");

    // Prefilled edit form for a missing record is a clean 404
    let response = app.oneshot(get_request("/venues/9999/edit")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_artist_redirects_and_persists() {
    let (app, pool, _dir) = setup_app().await;

    app.clone()
        .oneshot(form_request(
            "POST",
            "/artists/create",
            "name=Old+Artist&city=Austin&state=TX&phone=&genres=&facebook_link=",
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(form_request(
            "POST",
            "/artists/1/edit",
            "name=New+Artist&city=Austin&state=TX&phone=&genres=&facebook_link=",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let name: String = sqlx::query_scalar("SELECT name FROM artists WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(name, "New Artist");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_venue_cascades_to_shows() {
    let (app, pool, _dir) = setup_app().await;

    app.clone()
        .oneshot(form_request(
            "POST",
            "/venues/create",
            "name=Doomed+Hall&city=Austin&state=TX&address=&phone=&genres=&facebook_link=",
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(form_request(
            "POST",
            "/artists/create",
            "name=Survivor&city=Austin&state=TX&phone=&genres=&facebook_link=",
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(form_request(
            "POST",
            "/shows/create",
            "artist_id=1&venue_id=1&start_time=2999-01-01+20:00:00",
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(Request::builder().method("DELETE").uri("/venues/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response.into_body()).await;
    assert!(text.contains("Venue Doomed Hall was successfully deleted!"));

    let venues: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues").fetch_one(&pool).await.unwrap();
    let shows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows").fetch_one(&pool).await.unwrap();
    let artists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists").fetch_one(&pool).await.unwrap();
    assert_eq!(venues, 0);
    assert_eq!(shows, 0, "Shows must be deleted with their venue");
    assert_eq!(artists, 1, "Artists survive a venue delete");
}

#[tokio::test]
async fn test_delete_missing_venue_is_clean_404() {
    let (app, _pool, _dir) = setup_app().await;

    let response = app
        .oneshot(Request::builder().method("DELETE").uri("/venues/9999").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Show creation contracts
// =============================================================================

#[tokio::test]
async fn test_show_listing_after_creation() {
    let (app, _pool, _dir) = setup_app().await;

    app.clone()
        .oneshot(form_request(
            "POST",
            "/venues/create",
            "name=The+Hall&city=Austin&state=TX&address=&phone=&genres=&facebook_link=",
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(form_request(
            "POST",
            "/artists/create",
            "name=The+Band&city=Austin&state=TX&phone=&genres=&facebook_link=",
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(form_request(
            "POST",
            "/shows/create",
            "artist_id=1&venue_id=1&start_time=2999-01-01+20:00:00",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response.into_body()).await;
    assert!(text.contains("Show on 2999-01-01 20:00:00 was successfully listed!"));

    let response = app.oneshot(get_request("/shows")).await.unwrap();
    let text = body_text(response.into_body()).await;
    assert!(text.contains("The Hall"));
    assert!(text.contains("The Band"));
    assert!(text.contains("2999-01-01 20:00:00"));
}

#[tokio::test]
async fn test_show_creation_with_missing_side_flashes_warning() {
    let (app, pool, _dir) = setup_app().await;

    let response = app
        .oneshot(form_request(
            "POST",
            "/shows/create",
            "artist_id=42&venue_id=17&start_time=2999-01-01+20:00:00",
        ))
        .await
        .unwrap();
    // Still a normal page, failure is signaled in the banner
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response.into_body()).await;
    assert!(text.contains("could not be listed"));

    let shows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows").fetch_one(&pool).await.unwrap();
    assert_eq!(shows, 0);
}

#[tokio::test]
async fn test_show_creation_with_non_numeric_ids_flashes_warning() {
    let (app, _pool, _dir) = setup_app().await;

    let response = app
        .oneshot(form_request(
            "POST",
            "/shows/create",
            "artist_id=abc&venue_id=1&start_time=2999-01-01+20:00:00",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response.into_body()).await;
    assert!(text.contains("could not be listed"));
}

#[tokio::test]
async fn test_booking_from_venue_prefills_form() {
    let (app, _pool, _dir) = setup_app().await;

    app.clone()
        .oneshot(form_request(
            "POST",
            "/venues/create",
            "name=The+Hall&city=Austin&state=TX&address=&phone=&genres=&facebook_link=",
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(form_request(
            "POST",
            "/artists/create",
            "name=Blue+Notes&city=Austin&state=TX&phone=&genres=&facebook_link=",
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(form_request("POST", "/shows/1/create/", "name=blue"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response.into_body()).await;
    assert!(text.contains("set the start time only"));
    assert!(text.contains("name=\"artist_id\" value=\"1\""));
    assert!(text.contains("name=\"venue_id\" value=\"1\""));

    // No matching artist bounces back to the venue page with a notice
    let response = app
        .clone()
        .oneshot(form_request("POST", "/shows/1/create/", "name=nobody"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // Unknown venue in the path is a clean 404
    let response = app
        .oneshot(form_request("POST", "/shows/9999/create/", "name=blue"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
