//! Decoding and validation of the venue, artist and show forms.
//!
//! Forms arrive as ordered `application/x-www-form-urlencoded` pairs so that
//! repeated keys (the `genres` multi-select) survive decoding. Checkbox
//! fields follow browser semantics: present means checked, absent means not.

use chrono::{DateTime, NaiveDateTime, Utc};
use validator::{Validate, ValidationErrors};

use crate::choices;
use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Accepted naive `start_time` layouts, tried in order after RFC 3339.
const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Layout used to pre-fill the show form.
pub const START_TIME_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Pair access
// ---------------------------------------------------------------------------

struct Pairs<'a>(&'a [(String, String)]);

impl Pairs<'_> {
    /// First value for `key`, trimmed, or an empty string.
    fn text(&self, key: &str) -> String {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .unwrap_or_default()
    }

    /// First value for `key`, trimmed; `None` when missing or blank.
    fn optional(&self, key: &str) -> Option<String> {
        Some(self.text(key)).filter(|v| !v.is_empty())
    }

    /// Every non-blank value for `key`, in submission order.
    fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    fn flag(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }
}

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct VenueForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "City is required"))]
    pub city: String,
    pub state: String,
    #[validate(length(min = 1, max = 120, message = "Address is required"))]
    pub address: String,
    #[validate(length(max = 120))]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Pick at least one genre"))]
    pub genres: Vec<String>,
    #[validate(url(message = "Image link must be a URL"), length(max = 500))]
    pub image_link: Option<String>,
    #[validate(url(message = "Facebook link must be a URL"), length(max = 120))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "Website link must be a URL"), length(max = 120))]
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let p = Pairs(pairs);
        let seeking_talent = p.flag("seeking_talent");
        Self {
            name: p.text("name"),
            city: p.text("city"),
            state: p.text("state"),
            address: p.text("address"),
            phone: p.optional("phone"),
            genres: p.all("genres"),
            image_link: p.optional("image_link"),
            facebook_link: p.optional("facebook_link"),
            website_link: p.optional("website_link"),
            seeking_talent,
            seeking_description: seeking_talent
                .then(|| p.optional("seeking_description"))
                .flatten(),
        }
    }

    /// Run field validation plus the state and genre choice checks.
    pub fn validated(self) -> Result<Self, CoreError> {
        self.validate().map_err(validation_error)?;
        check_choices(&self.state, &self.genres)?;
        Ok(self)
    }
}

// ---------------------------------------------------------------------------
// Artist
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ArtistForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "City is required"))]
    pub city: String,
    pub state: String,
    #[validate(length(max = 120))]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Pick at least one genre"))]
    pub genres: Vec<String>,
    #[validate(url(message = "Image link must be a URL"), length(max = 500))]
    pub image_link: Option<String>,
    #[validate(url(message = "Facebook link must be a URL"), length(max = 120))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "Website link must be a URL"), length(max = 120))]
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let p = Pairs(pairs);
        let seeking_venue = p.flag("seeking_venue");
        Self {
            name: p.text("name"),
            city: p.text("city"),
            state: p.text("state"),
            phone: p.optional("phone"),
            genres: p.all("genres"),
            image_link: p.optional("image_link"),
            facebook_link: p.optional("facebook_link"),
            website_link: p.optional("website_link"),
            seeking_venue,
            seeking_description: seeking_venue
                .then(|| p.optional("seeking_description"))
                .flatten(),
        }
    }

    pub fn validated(self) -> Result<Self, CoreError> {
        self.validate().map_err(validation_error)?;
        check_choices(&self.state, &self.genres)?;
        Ok(self)
    }
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

impl ShowForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, CoreError> {
        let p = Pairs(pairs);
        Ok(Self {
            artist_id: parse_id(&p.text("artist_id"), "artist_id")?,
            venue_id: parse_id(&p.text("venue_id"), "venue_id")?,
            start_time: parse_start_time(&p.text("start_time"))?,
        })
    }
}

fn parse_id(raw: &str, field: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| CoreError::Validation(format!("{field} must be a positive integer")))
}

/// Parse a submitted show start time.
///
/// Accepts RFC 3339 or one of the naive layouts in `START_TIME_FORMATS`;
/// naive values are taken as UTC.
pub fn parse_start_time(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CoreError::Validation(format!("Invalid start time: '{raw}'")))
}

// ---------------------------------------------------------------------------
// Shared checks
// ---------------------------------------------------------------------------

fn check_choices(state: &str, genres: &[String]) -> Result<(), CoreError> {
    if !choices::is_state(state) {
        return Err(CoreError::Validation(format!("Unknown state: '{state}'")));
    }
    if let Some(bad) = genres.iter().find(|g| !choices::is_genre(g)) {
        return Err(CoreError::Validation(format!("Unknown genre: '{bad}'")));
    }
    Ok(())
}

fn validation_error(errors: ValidationErrors) -> CoreError {
    CoreError::Validation(errors.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
