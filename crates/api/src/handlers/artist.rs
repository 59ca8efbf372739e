//! Handlers for the `/artists` pages.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::Utc;
use fyyur_core::forms::ArtistForm;
use fyyur_core::search::{name_pattern, SearchResults};
use fyyur_core::shows::partition_shows;
use fyyur_core::types::DbId;
use fyyur_db::models::artist::Artist;
use fyyur_db::repositories::ArtistRepo;

use super::{is_not_found, not_found, SearchParams};
use crate::error::AppResult;
use crate::extract::RecordId;
use crate::state::AppState;
use crate::views::{
    render, ArtistsTemplate, DetailTemplate, HomeTemplate, Notice, ProfileFormTemplate,
    SearchTemplate,
};

/// GET /artists
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    render(&ArtistsTemplate { artists })
}

/// POST /artists/search
///
/// Counts on each hit are upcoming shows only.
pub async fn search(
    State(state): State<AppState>,
    Form(params): Form<SearchParams>,
) -> AppResult<Html<String>> {
    let now = Utc::now();
    let hits = ArtistRepo::search(&state.pool, &name_pattern(&params.search_term))
        .await?
        .into_iter()
        .map(|s| s.into_search_hit(now))
        .collect();
    render(&SearchTemplate {
        base_path: "/artists",
        search_term: params.search_term,
        results: SearchResults::new(hits),
    })
}

/// GET /artists/{id}
pub async fn show(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Html<String>> {
    let artist = find(&state, id).await?;
    let shows = ArtistRepo::shows(&state.pool, id).await?;
    render(&DetailTemplate::artist(artist, partition_shows(shows, Utc::now())))
}

/// GET /artists/create
pub async fn new_form() -> AppResult<Html<String>> {
    render(&ProfileFormTemplate::new_artist())
}

/// POST /artists/create
pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Html<String>> {
    let form = ArtistForm::from_pairs(&pairs);
    let name = form.name.clone();

    let notice = match insert(&state, form).await {
        Ok(artist) => {
            tracing::info!(id = artist.id, name = %artist.name, "Artist created");
            Notice::success(format!("Artist {} was successfully listed!", artist.name))
        }
        Err(err) => {
            tracing::error!(error = %err, name = %name, "Artist could not be listed");
            Notice::error(format!("An error occurred. Artist {name} could not be listed."))
        }
    };

    render(&HomeTemplate::with_notice(notice))
}

async fn insert(state: &AppState, form: ArtistForm) -> AppResult<Artist> {
    let form = form.validated()?;
    Ok(ArtistRepo::create(&state.pool, &form.into()).await?)
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Html<String>> {
    let artist = find(&state, id).await?;
    render(&ProfileFormTemplate::edit_artist(&artist))
}

/// POST /artists/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Response> {
    find(&state, id).await?;
    let form = ArtistForm::from_pairs(&pairs);

    match replace(&state, id, form).await {
        Ok(artist) => {
            tracing::info!(id = artist.id, "Artist updated");
            Ok(Redirect::to(&format!("/artists/{id}")).into_response())
        }
        Err(err) if is_not_found(&err) => Err(err),
        Err(err) => {
            tracing::error!(error = %err, id, "Artist could not be updated");
            let notice =
                Notice::error(format!("An error occurred. Artist {id} could not be updated."));
            Ok(render(&HomeTemplate::with_notice(notice))?.into_response())
        }
    }
}

async fn replace(state: &AppState, id: DbId, form: ArtistForm) -> AppResult<Artist> {
    let form = form.validated()?;
    ArtistRepo::update(&state.pool, id, &form.into())
        .await?
        .ok_or_else(|| not_found("Artist", id))
}

/// DELETE /artists/{id}
pub async fn delete(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Html<String>> {
    let artist = find(&state, id).await?;

    let notice = match ArtistRepo::delete(&state.pool, id).await {
        Ok(true) => {
            tracing::info!(id, "Artist deleted");
            Notice::success(format!("Artist {} was successfully deleted.", artist.name))
        }
        Ok(false) => return Err(not_found("Artist", id)),
        Err(err) => {
            tracing::error!(error = %err, id, "Artist could not be deleted");
            Notice::error(format!(
                "An error occurred. Artist {} could not be deleted.",
                artist.name
            ))
        }
    };

    render(&HomeTemplate::with_notice(notice))
}

async fn find(state: &AppState, id: DbId) -> AppResult<Artist> {
    ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Artist", id))
}
