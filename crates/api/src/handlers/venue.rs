//! Handlers for the `/venues` pages.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::Utc;
use fyyur_core::areas::group_by_area;
use fyyur_core::forms::VenueForm;
use fyyur_core::search::{name_pattern, SearchResults};
use fyyur_core::shows::partition_shows;
use fyyur_core::types::DbId;
use fyyur_db::models::venue::Venue;
use fyyur_db::repositories::VenueRepo;

use super::{is_not_found, not_found, SearchParams};
use crate::error::AppResult;
use crate::extract::RecordId;
use crate::state::AppState;
use crate::views::{
    render, DetailTemplate, HomeTemplate, Notice, ProfileFormTemplate, SearchTemplate,
    VenuesTemplate,
};

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /venues
///
/// Venues grouped by (city, state) with their upcoming show counts.
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let now = Utc::now();
    let summaries = VenueRepo::list_summaries(&state.pool).await?;
    let areas = group_by_area(summaries.into_iter().map(|s| s.into_located(now)));
    render(&VenuesTemplate { areas })
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    Form(params): Form<SearchParams>,
) -> AppResult<Html<String>> {
    let now = Utc::now();
    let hits = VenueRepo::search(&state.pool, &name_pattern(&params.search_term))
        .await?
        .into_iter()
        .map(|s| s.into_search_hit(now))
        .collect();
    render(&SearchTemplate {
        base_path: "/venues",
        search_term: params.search_term,
        results: SearchResults::new(hits),
    })
}

/// GET /venues/{id}
///
/// Venue profile with its shows split into past and upcoming.
pub async fn show(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Html<String>> {
    let venue = find(&state, id).await?;
    let shows = VenueRepo::shows(&state.pool, id).await?;
    render(&DetailTemplate::venue(venue, partition_shows(shows, Utc::now())))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// GET /venues/create
pub async fn new_form() -> AppResult<Html<String>> {
    render(&ProfileFormTemplate::new_venue())
}

/// POST /venues/create
///
/// Always lands on the home page; the notice says whether the venue was
/// listed.
pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Html<String>> {
    let form = VenueForm::from_pairs(&pairs);
    let name = form.name.clone();

    let notice = match insert(&state, form).await {
        Ok(venue) => {
            tracing::info!(id = venue.id, name = %venue.name, "Venue created");
            Notice::success(format!("Venue {} was successfully listed!", venue.name))
        }
        Err(err) => {
            tracing::error!(error = %err, name = %name, "Venue could not be listed");
            Notice::error(format!("An error occurred. Venue {name} could not be listed."))
        }
    };

    render(&HomeTemplate::with_notice(notice))
}

async fn insert(state: &AppState, form: VenueForm) -> AppResult<Venue> {
    let form = form.validated()?;
    Ok(VenueRepo::create(&state.pool, &form.into()).await?)
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

/// GET /venues/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Html<String>> {
    let venue = find(&state, id).await?;
    render(&ProfileFormTemplate::edit_venue(&venue))
}

/// POST /venues/{id}/edit
///
/// Redirects to the venue page on success. A missing venue is a 404
/// whatever was submitted; any other failure renders the home page with an
/// error notice.
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    find(&state, id).await?;
    let form = VenueForm::from_pairs(&pairs);

    match replace(&state, id, form).await {
        Ok(venue) => {
            tracing::info!(id = venue.id, "Venue updated");
            Ok(Redirect::to(&format!("/venues/{id}")).into_response())
        }
        Err(err) if is_not_found(&err) => Err(err),
        Err(err) => {
            tracing::error!(error = %err, id, "Venue could not be updated");
            let notice =
                Notice::error(format!("An error occurred. Venue {id} could not be updated."));
            Ok(render(&HomeTemplate::with_notice(notice))?.into_response())
        }
    }
}

async fn replace(state: &AppState, id: DbId, form: VenueForm) -> AppResult<Venue> {
    let form = form.validated()?;
    VenueRepo::update(&state.pool, id, &form.into())
        .await?
        .ok_or_else(|| not_found("Venue", id))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// DELETE /venues/{id}
///
/// Removes the venue and every booking at it in one transaction.
pub async fn delete(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Html<String>> {
    let venue = find(&state, id).await?;

    let notice = match VenueRepo::delete(&state.pool, id).await {
        Ok(true) => {
            tracing::info!(id, "Venue deleted");
            Notice::success(format!("Venue {} was successfully deleted.", venue.name))
        }
        Ok(false) => return Err(not_found("Venue", id)),
        Err(err) => {
            tracing::error!(error = %err, id, "Venue could not be deleted");
            Notice::error(format!(
                "An error occurred. Venue {} could not be deleted.",
                venue.name
            ))
        }
    };

    render(&HomeTemplate::with_notice(notice))
}

async fn find(state: &AppState, id: DbId) -> AppResult<Venue> {
    VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Venue", id))
}
