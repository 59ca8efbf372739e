use askama::Template;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use fyyur_core::error::CoreError;

use crate::views::ErrorTemplate;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to render the shared HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fyyur_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A record id in the URL that is not a valid id.
    #[error("Invalid record id: {0}")]
    InvalidId(#[from] PathRejection),

    /// A page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Message shown for every 5xx; details only go to the log.
const INTERNAL_MESSAGE: &str = "Something went wrong on our end. Please try again later.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "Not Found",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            AppError::InvalidId(rejection) => {
                tracing::debug!(error = %rejection, "Unparseable record id");
                (
                    StatusCode::NOT_FOUND,
                    "Not Found",
                    "No record lives at this address".to_string(),
                )
            }

            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        error_page(status, title, message)
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        INTERNAL_MESSAGE.to_string(),
    )
}

/// Render the error page; falls back to plain text if the template fails.
pub fn error_page(status: StatusCode, title: &'static str, message: String) -> Response {
    let page = ErrorTemplate {
        status: status.as_u16(),
        title,
        message,
    };
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Error page failed to render");
            (status, title).into_response()
        }
    }
}

/// Classify a sqlx error into an HTTP status, page title, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (`23505`) map to 409.
/// - Foreign-key violations (`23503`) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "Not Found",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => (
                StatusCode::CONFLICT,
                "Conflict",
                "That record already exists".to_string(),
            ),
            Some("23503") => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                "A referenced record does not exist".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                internal()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
