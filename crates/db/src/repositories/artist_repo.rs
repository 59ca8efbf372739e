//! Repository for the `artists` table.

use fyyur_core::types::DbId;
use sqlx::PgPool;

use crate::models::artist::{Artist, ArtistInput, ArtistOption, ArtistShow, ArtistSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
    website_link, seeking_venue, seeking_description, created_at, updated_at";

const SUMMARY_SELECT: &str = "SELECT a.id, a.name, \
        COALESCE(ARRAY_AGG(b.start_time ORDER BY b.start_time) \
            FILTER (WHERE b.start_time IS NOT NULL), '{}') AS show_times \
     FROM artists a \
     LEFT JOIN bookings b ON b.artist_id = a.id";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &ArtistInput) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, city, state, phone, genres, image_link, \
                facebook_link, website_link, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(artist)
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// `(id, name)` of every artist in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ArtistOption>, sqlx::Error> {
        sqlx::query_as::<_, ArtistOption>("SELECT id, name FROM artists ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// `(id, name)` of every artist ordered by name, for the show form.
    pub async fn list_options(pool: &PgPool) -> Result<Vec<ArtistOption>, sqlx::Error> {
        sqlx::query_as::<_, ArtistOption>("SELECT id, name FROM artists ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    /// Artists whose name matches an `ILIKE` pattern built by
    /// [`fyyur_core::search::name_pattern`].
    pub async fn search(pool: &PgPool, pattern: &str) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE a.name ILIKE $1 ESCAPE '\\' GROUP BY a.id ORDER BY a.id"
        );
        sqlx::query_as::<_, ArtistSummary>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// All shows by an artist with their venue, ordered by start time.
    pub async fn shows(pool: &PgPool, artist_id: DbId) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT v.id AS venue_id, v.name AS venue_name, \
                    v.image_link AS venue_image_link, b.start_time \
             FROM bookings b \
             JOIN venues v ON v.id = b.venue_id \
             WHERE b.artist_id = $1 \
             ORDER BY b.start_time, v.id",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }

    /// Replace every editable field of an artist.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ArtistInput,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET \
                name = $2, city = $3, state = $4, phone = $5, genres = $6, \
                image_link = $7, facebook_link = $8, website_link = $9, \
                seeking_venue = $10, seeking_description = $11 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(artist)
    }

    /// Delete an artist together with its bookings, in one transaction.
    ///
    /// Returns `false` if the artist did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let bookings = sqlx::query("DELETE FROM bookings WHERE artist_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM artists WHERE id = $1")
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
        tracing::debug!(artist_id = id, bookings, "Artist deleted with its bookings");
        Ok(true)
    }
}
