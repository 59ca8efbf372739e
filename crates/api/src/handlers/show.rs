//! Handlers for the `/shows` pages.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use chrono::Utc;
use fyyur_core::forms::{ShowForm, START_TIME_INPUT_FORMAT};
use fyyur_db::models::booking::Booking;
use fyyur_db::repositories::{ArtistRepo, BookingRepo, VenueRepo};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::{render, HomeTemplate, Notice, ShowFormTemplate, ShowRow, ShowsTemplate};

/// GET /shows
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let shows = BookingRepo::list_listings(&state.pool)
        .await?
        .into_iter()
        .map(ShowRow::from)
        .collect();
    render(&ShowsTemplate { shows })
}

/// GET /shows/create
///
/// The start time is pre-filled with the current time.
pub async fn new_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let artists = ArtistRepo::list_options(&state.pool).await?;
    let venues = VenueRepo::list_options(&state.pool).await?;
    render(&ShowFormTemplate {
        artists,
        venues,
        start_time: Utc::now().format(START_TIME_INPUT_FORMAT).to_string(),
    })
}

/// POST /shows/create
///
/// Unknown artist or venue ids and duplicate bookings end up as an error
/// notice; nothing is written in that case.
pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Html<String>> {
    let notice = match insert(&state, &pairs).await {
        Ok(booking) => {
            tracing::info!(
                venue_id = booking.venue_id,
                artist_id = booking.artist_id,
                start_time = %booking.start_time,
                "Show created"
            );
            Notice::success("Show was successfully listed!")
        }
        Err(err) => {
            tracing::error!(error = %err, "Show could not be listed");
            Notice::error("An error occurred. Show could not be listed.")
        }
    };

    render(&HomeTemplate::with_notice(notice))
}

async fn insert(state: &AppState, pairs: &[(String, String)]) -> AppResult<Booking> {
    let form = ShowForm::from_pairs(pairs)?;
    Ok(BookingRepo::create(&state.pool, &form.into()).await?)
}
