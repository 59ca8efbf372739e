pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// /                                   home
/// /venues/...                         see [`venues::router`]
/// /artists/...                        see [`artists::router`]
/// /shows/...                          see [`shows::router`]
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .nest("/venues", venues::router())
        .nest("/artists", artists::router())
        .nest("/shows", shows::router())
}
