//! Repository for the `venues` table.

use fyyur_core::types::DbId;
use sqlx::PgPool;

use crate::models::venue::{Venue, VenueInput, VenueOption, VenueShow, VenueSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
    facebook_link, website_link, seeking_talent, seeking_description, created_at, updated_at";

/// Venue columns plus every booking start time, oldest first.
const SUMMARY_SELECT: &str = "SELECT v.id, v.name, v.city, v.state, \
        COALESCE(ARRAY_AGG(b.start_time ORDER BY b.start_time) \
            FILTER (WHERE b.start_time IS NOT NULL), '{}') AS show_times \
     FROM venues v \
     LEFT JOIN bookings b ON b.venue_id = v.id";

/// Provides CRUD operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &VenueInput) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, genres, image_link, \
                facebook_link, website_link, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(venue)
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every venue with its booking times, in insertion order.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} GROUP BY v.id ORDER BY v.id");
        sqlx::query_as::<_, VenueSummary>(&query).fetch_all(pool).await
    }

    /// Venues whose name matches an `ILIKE` pattern built by
    /// [`fyyur_core::search::name_pattern`].
    pub async fn search(pool: &PgPool, pattern: &str) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE v.name ILIKE $1 ESCAPE '\\' GROUP BY v.id ORDER BY v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// `(id, name)` of every venue ordered by name, for the show form.
    pub async fn list_options(pool: &PgPool) -> Result<Vec<VenueOption>, sqlx::Error> {
        sqlx::query_as::<_, VenueOption>("SELECT id, name FROM venues ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    /// All shows at a venue with their artist, ordered by start time.
    pub async fn shows(pool: &PgPool, venue_id: DbId) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT a.id AS artist_id, a.name AS artist_name, \
                    a.image_link AS artist_image_link, b.start_time \
             FROM bookings b \
             JOIN artists a ON a.id = b.artist_id \
             WHERE b.venue_id = $1 \
             ORDER BY b.start_time, a.id",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// Replace every editable field of a venue.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &VenueInput,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET \
                name = $2, city = $3, state = $4, address = $5, phone = $6, genres = $7, \
                image_link = $8, facebook_link = $9, website_link = $10, \
                seeking_talent = $11, seeking_description = $12 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(venue)
    }

    /// Delete a venue together with its bookings.
    ///
    /// Both deletes share one transaction. Returns `false` if the venue did
    /// not exist, in which case nothing is changed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let bookings = sqlx::query("DELETE FROM bookings WHERE venue_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        if !deleted {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(venue_id = id, bookings, "Venue deleted with its bookings");
        Ok(true)
    }
}
