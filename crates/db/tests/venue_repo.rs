//! Integration tests for venue persistence: CRUD, summaries, search and
//! cascading deletes.

mod common;

use chrono::Utc;
use common::{book, days_from_now, insert_artist, insert_venue, new_venue};
use fyyur_core::areas::group_by_area;
use fyyur_core::search::name_pattern;
use fyyur_db::repositories::{BookingRepo, VenueRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create / read / update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_without_seeking_talent_persists_false(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();

    let stored = VenueRepo::find_by_id(&pool, venue.id).await.unwrap().unwrap();
    assert!(!stored.seeking_talent);
    assert_eq!(stored.seeking_description, None);
    assert_eq!(stored.genres, ["Jazz", "Folk"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_missing_returns_none(pool: PgPool) {
    assert!(VenueRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_fields(pool: PgPool) {
    let id = insert_venue(&pool, "Old Name").await;

    let mut input = new_venue("New Name", "Oakland", "CA");
    input.seeking_talent = true;
    input.seeking_description = Some("Looking for local acts".into());
    input.genres = vec!["Blues".into()];

    let updated = VenueRepo::update(&pool, id, &input).await.unwrap().unwrap();
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.city, "Oakland");
    assert!(updated.seeking_talent);
    assert_eq!(updated.genres, ["Blues"]);
    assert!(updated.updated_at >= updated.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_returns_none(pool: PgPool) {
    let result = VenueRepo::update(&pool, 424_242, &new_venue("X", "Y", "CA"))
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Summaries and areas
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn summaries_carry_show_times(pool: PgPool) {
    let venue_id = insert_venue(&pool, "Park Square Live Music & Coffee").await;
    let quiet_id = insert_venue(&pool, "Quiet Room").await;
    let artist_id = insert_artist(&pool, "The Wild Sax Band").await;
    book(&pool, venue_id, artist_id, days_from_now(-3)).await;
    book(&pool, venue_id, artist_id, days_from_now(5)).await;
    book(&pool, venue_id, artist_id, days_from_now(9)).await;

    let summaries = VenueRepo::list_summaries(&pool).await.unwrap();
    assert_eq!(summaries.len(), 2);

    let busy = summaries.iter().find(|s| s.id == venue_id).unwrap();
    assert_eq!(busy.show_times.len(), 3);
    assert_eq!(busy.upcoming_count(Utc::now()), 2);

    let quiet = summaries.iter().find(|s| s.id == quiet_id).unwrap();
    assert!(quiet.show_times.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn summaries_group_into_areas(pool: PgPool) {
    for (name, city, state) in [
        ("A", "San Francisco", "CA"),
        ("B", "New York", "NY"),
        ("C", "SAN FRANCISCO", "CA"),
    ] {
        VenueRepo::create(&pool, &new_venue(name, city, state))
            .await
            .unwrap();
    }

    let now = Utc::now();
    let summaries = VenueRepo::list_summaries(&pool).await.unwrap();
    let areas = group_by_area(summaries.into_iter().map(|s| s.into_located(now)));

    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].city, "San Francisco");
    assert_eq!(areas[0].venues.len(), 2);
    assert_eq!(areas[1].city, "New York");
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive(pool: PgPool) {
    insert_venue(&pool, "The Cafe").await;
    insert_venue(&pool, "Music Hall").await;

    let hits = VenueRepo::search(&pool, &name_pattern("cafe")).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "The Cafe");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_search_returns_every_venue(pool: PgPool) {
    for name in ["One", "Two", "Three"] {
        insert_venue(&pool, name).await;
    }

    let hits = VenueRepo::search(&pool, &name_pattern("")).await.unwrap();
    assert_eq!(hits.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_treats_wildcards_literally(pool: PgPool) {
    insert_venue(&pool, "100% Jazz").await;
    insert_venue(&pool, "1000 Jazz").await;

    let hits = VenueRepo::search(&pool, &name_pattern("100%")).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "100% Jazz");
}

// ---------------------------------------------------------------------------
// Shows and delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn shows_are_ordered_by_start_time(pool: PgPool) {
    let venue_id = insert_venue(&pool, "Hall").await;
    let first = insert_artist(&pool, "First").await;
    let second = insert_artist(&pool, "Second").await;
    book(&pool, venue_id, second, days_from_now(4)).await;
    book(&pool, venue_id, first, days_from_now(-1)).await;

    let shows = VenueRepo::shows(&pool, venue_id).await.unwrap();
    let names: Vec<_> = shows.iter().map(|s| s.artist_name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_bookings_too(pool: PgPool) {
    let venue_id = insert_venue(&pool, "Doomed").await;
    let other_venue = insert_venue(&pool, "Survivor").await;
    let artist_id = insert_artist(&pool, "Touring Act").await;
    book(&pool, venue_id, artist_id, days_from_now(1)).await;
    book(&pool, venue_id, artist_id, days_from_now(2)).await;
    book(&pool, other_venue, artist_id, days_from_now(3)).await;

    assert!(VenueRepo::delete(&pool, venue_id).await.unwrap());

    assert!(VenueRepo::find_by_id(&pool, venue_id).await.unwrap().is_none());
    assert_eq!(BookingRepo::count(&pool).await.unwrap(), 1);

    let orphans: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM bookings b \
         LEFT JOIN venues v ON v.id = b.venue_id WHERE v.id IS NULL",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(orphans.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_returns_false(pool: PgPool) {
    assert!(!VenueRepo::delete(&pool, 31_337).await.unwrap());
}
