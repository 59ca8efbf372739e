//! Home page and fallback handlers.

use axum::http::{StatusCode, Uri};
use axum::response::{Html, Response};

use crate::error::{error_page, AppResult};
use crate::views::{render, HomeTemplate};

/// GET /
pub async fn home() -> AppResult<Html<String>> {
    render(&HomeTemplate {
        notices: Vec::new(),
    })
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(%uri, "No route matched");
    error_page(
        StatusCode::NOT_FOUND,
        "Not Found",
        format!("Nothing lives at {}", uri.path()),
    )
}
