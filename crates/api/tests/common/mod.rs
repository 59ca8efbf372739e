#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use chrono::{Duration, Utc};
use fyyur_core::types::{DbId, Timestamp};
use fyyur_db::models::artist::ArtistInput;
use fyyur_db::models::booking::CreateBooking;
use fyyur_db::models::venue::VenueInput;
use fyyur_db::repositories::{ArtistRepo, BookingRepo, VenueRepo};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use fyyur_api::config::{LogFormat, ServerConfig};
use fyyur_api::router::build_app_router;
use fyyur_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        request_timeout_secs: 30,
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
        log_format: LogFormat::Pretty,
    }
}

/// Build the application router exactly as `main.rs` does, on the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an urlencoded form; repeated keys are sent in order.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Form bodies
// ---------------------------------------------------------------------------

pub fn venue_fields(name: &str) -> Vec<(&str, &str)> {
    vec![
        ("name", name),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("address", "1015 Folsom Street"),
        ("phone", "123-123-1234"),
        ("genres", "Jazz"),
        ("genres", "Reggae"),
        ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
        ("image_link", ""),
        ("website_link", ""),
        ("seeking_talent", "y"),
        ("seeking_description", "Looking for local jazz acts"),
    ]
}

pub fn artist_fields(name: &str) -> Vec<(&str, &str)> {
    vec![
        ("name", name),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("phone", "326-123-5000"),
        ("genres", "Rock n Roll"),
        ("facebook_link", ""),
        ("image_link", ""),
        ("website_link", ""),
    ]
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

pub fn new_venue(name: &str, city: &str, state: &str) -> VenueInput {
    VenueInput {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: None,
        genres: vec!["Jazz".to_string()],
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

pub async fn insert_venue(pool: &PgPool, name: &str, city: &str, state: &str) -> DbId {
    VenueRepo::create(pool, &new_venue(name, city, state))
        .await
        .unwrap()
        .id
}

pub async fn insert_artist(pool: &PgPool, name: &str) -> DbId {
    let input = ArtistInput {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: None,
        genres: vec!["Rock n Roll".to_string()],
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_venue: false,
        seeking_description: None,
    };
    ArtistRepo::create(pool, &input).await.unwrap().id
}

pub async fn book(pool: &PgPool, venue_id: DbId, artist_id: DbId, start_time: Timestamp) {
    let input = CreateBooking {
        venue_id,
        artist_id,
        start_time,
    };
    BookingRepo::create(pool, &input).await.unwrap();
}

/// A start time `days` from now (negative for the past), whole seconds only.
pub fn days_from_now(days: i64) -> Timestamp {
    let ts = Utc::now() + Duration::days(days);
    chrono::DateTime::from_timestamp(ts.timestamp(), 0).unwrap()
}
