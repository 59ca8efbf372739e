//! Venue entity model, input DTO and read projections.

use fyyur_core::areas::{AreaVenue, LocatedVenue};
use fyyur_core::forms::VenueForm;
use fyyur_core::search::SearchHit;
use fyyur_core::shows::{count_upcoming, Scheduled};
use fyyur_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a venue or replacing every editable field of one.
#[derive(Debug, Clone)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<VenueForm> for VenueInput {
    fn from(form: VenueForm) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            address: form.address,
            phone: form.phone,
            genres: form.genres,
            image_link: form.image_link,
            facebook_link: form.facebook_link,
            website_link: form.website_link,
            seeking_talent: form.seeking_talent,
            seeking_description: form.seeking_description,
        }
    }
}

/// A venue with the start times of all its bookings.
///
/// Used by the area listing and by search; classification against `now`
/// happens after loading.
#[derive(Debug, Clone, FromRow)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub show_times: Vec<Timestamp>,
}

impl VenueSummary {
    pub fn upcoming_count(&self, now: Timestamp) -> usize {
        count_upcoming(&self.show_times, now)
    }

    pub fn into_located(self, now: Timestamp) -> LocatedVenue {
        let num_upcoming_shows = self.upcoming_count(now);
        LocatedVenue {
            city: self.city,
            state: self.state,
            venue: AreaVenue {
                id: self.id,
                name: self.name,
                num_upcoming_shows,
            },
        }
    }

    pub fn into_search_hit(self, now: Timestamp) -> SearchHit {
        SearchHit {
            num_upcoming_shows: self.upcoming_count(now),
            id: self.id,
            name: self.name,
        }
    }
}

/// A show at a venue, joined with the performing artist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

/// Minimal `(id, name)` projection for pick lists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueOption {
    pub id: DbId,
    pub name: String,
}
