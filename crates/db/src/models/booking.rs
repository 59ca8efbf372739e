//! Booking (show) model.
//!
//! A booking has no surrogate id: `(venue_id, artist_id, start_time)` is its
//! primary key.

use fyyur_core::forms::ShowForm;
use fyyur_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a booking.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
}

impl From<ShowForm> for CreateBooking {
    fn from(form: ShowForm) -> Self {
        Self {
            venue_id: form.venue_id,
            artist_id: form.artist_id,
            start_time: form.start_time,
        }
    }
}

/// A booking joined with both its venue and artist, for the shows page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}
