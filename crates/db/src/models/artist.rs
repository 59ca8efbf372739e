//! Artist entity model, input DTO and read projections.

use fyyur_core::forms::ArtistForm;
use fyyur_core::search::SearchHit;
use fyyur_core::shows::{count_upcoming, Scheduled};
use fyyur_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an artist or replacing every editable field of one.
#[derive(Debug, Clone)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl From<ArtistForm> for ArtistInput {
    fn from(form: ArtistForm) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            phone: form.phone,
            genres: form.genres,
            image_link: form.image_link,
            facebook_link: form.facebook_link,
            website_link: form.website_link,
            seeking_venue: form.seeking_venue,
            seeking_description: form.seeking_description,
        }
    }
}

/// An artist with the start times of all its bookings.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
    pub show_times: Vec<Timestamp>,
}

impl ArtistSummary {
    pub fn upcoming_count(&self, now: Timestamp) -> usize {
        count_upcoming(&self.show_times, now)
    }

    pub fn into_search_hit(self, now: Timestamp) -> SearchHit {
        SearchHit {
            num_upcoming_shows: self.upcoming_count(now),
            id: self.id,
            name: self.name,
        }
    }
}

/// A show by an artist, joined with the hosting venue.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistShow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

/// Minimal `(id, name)` projection for the artist list and pick lists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistOption {
    pub id: DbId,
    pub name: String,
}
