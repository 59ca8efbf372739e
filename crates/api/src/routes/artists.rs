//! Route definitions for the `/artists` pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

/// Routes mounted at `/artists`.
///
/// ```text
/// GET    /                 -> list
/// POST   /search           -> search
/// GET    /create           -> new_form
/// POST   /create           -> create
/// GET    /{id}             -> show
/// DELETE /{id}             -> delete
/// GET    /{id}/edit        -> edit_form
/// POST   /{id}/edit        -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artist::list))
        .route("/search", post(artist::search))
        .route("/create", get(artist::new_form).post(artist::create))
        .route("/{id}", get(artist::show).delete(artist::delete))
        .route("/{id}/edit", get(artist::edit_form).post(artist::update))
}
