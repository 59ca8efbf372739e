//! Request extractors shared by the handlers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use fyyur_core::types::DbId;

use crate::error::AppError;

/// The `{id}` path segment of a venue or artist route.
///
/// A segment that does not parse as an id is rejected with the 404 page,
/// the same answer an id with no row gets.
pub struct RecordId(pub DbId);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state).await?;
        Ok(RecordId(id))
    }
}
