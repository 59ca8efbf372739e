//! Compiled page templates and the plain view models they render.
//!
//! Handlers convert rows into the structs here so templates only deal with
//! strings, numbers, booleans and vectors.

use askama::Template;
use axum::response::Html;
use fyyur_core::areas::Area;
use fyyur_core::choices::{GENRES, STATES};
use fyyur_core::formatting::{format_datetime, DateFormat};
use fyyur_core::search::SearchResults;
use fyyur_core::shows::ShowPartition;
use fyyur_core::types::{DbId, Timestamp};
use fyyur_db::models::artist::{Artist, ArtistOption, ArtistShow};
use fyyur_db::models::booking::ShowListing;
use fyyur_db::models::venue::{Venue, VenueOption, VenueShow};

use crate::error::AppResult;

/// Render a template into an HTML response body.
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

/// A one-shot message shown on the home page after a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// CSS modifier: `success` or `error`.
    pub kind: &'static str,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "error",
            message: message.into(),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub notices: Vec<Notice>,
}

impl HomeTemplate {
    pub fn with_notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
        }
    }
}

// ---------------------------------------------------------------------------
// Listings and search
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "pages/venues.html")]
pub struct VenuesTemplate {
    pub areas: Vec<Area>,
}

#[derive(Template)]
#[template(path = "pages/artists.html")]
pub struct ArtistsTemplate {
    pub artists: Vec<ArtistOption>,
}

/// Search results page, shared by venues and artists.
#[derive(Template)]
#[template(path = "pages/search.html")]
pub struct SearchTemplate {
    /// Route prefix of the searched entity, e.g. `/venues`.
    pub base_path: &'static str,
    pub search_term: String,
    pub results: SearchResults,
}

/// One row on the shows page.
#[derive(Debug, Clone)]
pub struct ShowRow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

impl From<ShowListing> for ShowRow {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link.unwrap_or_default(),
            start_time: format_datetime(show.start_time, DateFormat::Medium),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/shows.html")]
pub struct ShowsTemplate {
    pub shows: Vec<ShowRow>,
}

// ---------------------------------------------------------------------------
// Detail pages
// ---------------------------------------------------------------------------

/// A show card on a detail page, pointing at the other side of the booking.
#[derive(Debug, Clone)]
pub struct ShowCard {
    pub href: String,
    pub name: String,
    pub image_link: String,
    pub start_time: String,
}

impl ShowCard {
    fn new(href: String, name: String, image_link: Option<String>, at: Timestamp) -> Self {
        Self {
            href,
            name,
            image_link: image_link.unwrap_or_default(),
            start_time: format_datetime(at, DateFormat::Full),
        }
    }
}

impl From<VenueShow> for ShowCard {
    fn from(show: VenueShow) -> Self {
        Self::new(
            format!("/artists/{}", show.artist_id),
            show.artist_name,
            show.artist_image_link,
            show.start_time,
        )
    }
}

impl From<ArtistShow> for ShowCard {
    fn from(show: ArtistShow) -> Self {
        Self::new(
            format!("/venues/{}", show.venue_id),
            show.venue_name,
            show.venue_image_link,
            show.start_time,
        )
    }
}

/// Profile fields shared by the venue and artist detail pages.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    /// Empty for artists.
    pub address: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking: bool,
    pub seeking_description: String,
    pub image_link: String,
}

impl From<Venue> for Profile {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone.unwrap_or_default(),
            website: venue.website_link.unwrap_or_default(),
            facebook_link: venue.facebook_link.unwrap_or_default(),
            seeking: venue.seeking_talent,
            seeking_description: venue.seeking_description.unwrap_or_default(),
            image_link: venue.image_link.unwrap_or_default(),
        }
    }
}

impl From<Artist> for Profile {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: artist.city,
            state: artist.state,
            address: String::new(),
            phone: artist.phone.unwrap_or_default(),
            website: artist.website_link.unwrap_or_default(),
            facebook_link: artist.facebook_link.unwrap_or_default(),
            seeking: artist.seeking_venue,
            seeking_description: artist.seeking_description.unwrap_or_default(),
            image_link: artist.image_link.unwrap_or_default(),
        }
    }
}

/// Detail page for a venue or an artist.
#[derive(Template)]
#[template(path = "pages/detail.html")]
pub struct DetailTemplate {
    /// Route prefix of the profile, e.g. `/venues`.
    pub base_path: &'static str,
    /// What the profile is seeking: `Talent` or `Venues`.
    pub seeking_label: &'static str,
    pub profile: Profile,
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl DetailTemplate {
    pub fn venue(venue: Venue, shows: ShowPartition<VenueShow>) -> Self {
        Self::build("/venues", "Talent", venue.into(), shows)
    }

    pub fn artist(artist: Artist, shows: ShowPartition<ArtistShow>) -> Self {
        Self::build("/artists", "Venues", artist.into(), shows)
    }

    fn build<S: Into<ShowCard>>(
        base_path: &'static str,
        seeking_label: &'static str,
        profile: Profile,
        shows: ShowPartition<S>,
    ) -> Self {
        let past_shows_count = shows.past_count();
        let upcoming_shows_count = shows.upcoming_count();
        Self {
            base_path,
            seeking_label,
            profile,
            past_shows: shows.past.into_iter().map(Into::into).collect(),
            upcoming_shows: shows.upcoming.into_iter().map(Into::into).collect(),
            past_shows_count,
            upcoming_shows_count,
        }
    }
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// An `<option>` in a select list.
#[derive(Debug, Clone)]
pub struct ChoiceOption {
    pub value: String,
    pub selected: bool,
}

fn choice_options(choices: &[&str], selected: &[String]) -> Vec<ChoiceOption> {
    choices
        .iter()
        .map(|c| ChoiceOption {
            value: c.to_string(),
            selected: selected.iter().any(|s| s == c),
        })
        .collect()
}

/// Current values of a venue or artist form.
#[derive(Debug, Clone, Default)]
pub struct ProfileFormValues {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking: bool,
    pub seeking_description: String,
}

impl From<&Venue> for ProfileFormValues {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            genres: venue.genres.clone(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            seeking: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }
}

impl From<&Artist> for ProfileFormValues {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            address: String::new(),
            phone: artist.phone.clone().unwrap_or_default(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            seeking: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }
}

/// New/edit form for venues and artists.
#[derive(Template)]
#[template(path = "forms/profile.html")]
pub struct ProfileFormTemplate {
    pub heading: String,
    /// Form `action` URL.
    pub action: String,
    /// Venues have an address field; artists do not.
    pub with_address: bool,
    /// Checkbox name: `seeking_talent` or `seeking_venue`.
    pub seeking_field: &'static str,
    pub seeking_label: &'static str,
    pub values: ProfileFormValues,
    pub state_options: Vec<ChoiceOption>,
    pub genre_options: Vec<ChoiceOption>,
}

impl ProfileFormTemplate {
    pub fn new_venue() -> Self {
        Self::venue_form(
            "List a new venue".into(),
            "/venues/create".into(),
            ProfileFormValues::default(),
        )
    }

    pub fn edit_venue(venue: &Venue) -> Self {
        Self::venue_form(
            format!("Edit venue {}", venue.name),
            format!("/venues/{}/edit", venue.id),
            venue.into(),
        )
    }

    pub fn new_artist() -> Self {
        Self::artist_form(
            "List a new artist".into(),
            "/artists/create".into(),
            ProfileFormValues::default(),
        )
    }

    pub fn edit_artist(artist: &Artist) -> Self {
        Self::artist_form(
            format!("Edit artist {}", artist.name),
            format!("/artists/{}/edit", artist.id),
            artist.into(),
        )
    }

    fn venue_form(heading: String, action: String, values: ProfileFormValues) -> Self {
        Self::build(heading, action, true, "seeking_talent", "Seeking talent", values)
    }

    fn artist_form(heading: String, action: String, values: ProfileFormValues) -> Self {
        Self::build(heading, action, false, "seeking_venue", "Seeking venue", values)
    }

    fn build(
        heading: String,
        action: String,
        with_address: bool,
        seeking_field: &'static str,
        seeking_label: &'static str,
        values: ProfileFormValues,
    ) -> Self {
        let state_options = choice_options(STATES, std::slice::from_ref(&values.state));
        let genre_options = choice_options(GENRES, &values.genres);
        Self {
            heading,
            action,
            with_address,
            seeking_field,
            seeking_label,
            values,
            state_options,
            genre_options,
        }
    }
}

#[derive(Template)]
#[template(path = "forms/new_show.html")]
pub struct ShowFormTemplate {
    pub artists: Vec<ArtistOption>,
    pub venues: Vec<VenueOption>,
    /// Pre-filled start time.
    pub start_time: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "errors/error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub title: &'static str,
    pub message: String,
}
