#![allow(dead_code)]

use chrono::{Duration, Utc};
use fyyur_core::types::{DbId, Timestamp};
use fyyur_db::models::artist::ArtistInput;
use fyyur_db::models::booking::CreateBooking;
use fyyur_db::models::venue::VenueInput;
use fyyur_db::repositories::{ArtistRepo, BookingRepo, VenueRepo};
use sqlx::PgPool;

pub fn new_venue(name: &str, city: &str, state: &str) -> VenueInput {
    VenueInput {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: None,
        genres: vec!["Jazz".to_string(), "Folk".to_string()],
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

pub fn new_artist(name: &str) -> ArtistInput {
    ArtistInput {
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
    }
}

pub async fn insert_venue(pool: &PgPool, name: &str) -> DbId {
    VenueRepo::create(pool, &new_venue(name, "San Francisco", "CA"))
        .await
        .unwrap()
        .id
}

pub async fn insert_artist(pool: &PgPool, name: &str) -> DbId {
    ArtistRepo::create(pool, &new_artist(name)).await.unwrap().id
}

pub async fn book(pool: &PgPool, venue_id: DbId, artist_id: DbId, start_time: Timestamp) {
    BookingRepo::create(
        pool,
        &CreateBooking {
            venue_id,
            artist_id,
            start_time,
        },
    )
    .await
    .unwrap();
}

/// A start time `days` from now (negative for the past), truncated to whole
/// seconds so it round-trips through PostgreSQL unchanged.
pub fn days_from_now(days: i64) -> Timestamp {
    let ts = Utc::now() + Duration::days(days);
    chrono::DateTime::from_timestamp(ts.timestamp(), 0).unwrap()
}
