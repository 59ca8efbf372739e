//! Repository for the `bookings` table.

use sqlx::PgPool;

use crate::models::booking::{Booking, CreateBooking, ShowListing};

const COLUMNS: &str = "venue_id, artist_id, start_time, created_at, updated_at";

/// Provides create and list operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a booking.
    ///
    /// Fails with a unique violation if the exact `(venue, artist, start_time)`
    /// triple already exists, and with a foreign-key violation if either
    /// parent is missing.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (venue_id, artist_id, start_time) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(input.venue_id)
            .bind(input.artist_id)
            .bind(input.start_time)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(booking)
    }

    /// Every booking with venue and artist names, ordered by start time.
    pub async fn list_listings(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT v.id AS venue_id, v.name AS venue_name, \
                    a.id AS artist_id, a.name AS artist_name, \
                    a.image_link AS artist_image_link, b.start_time \
             FROM bookings b \
             JOIN venues v ON v.id = b.venue_id \
             JOIN artists a ON a.id = b.artist_id \
             ORDER BY b.start_time, v.id, a.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Total number of bookings.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
