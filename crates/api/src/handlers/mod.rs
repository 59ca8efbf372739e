pub mod artist;
pub mod pages;
pub mod show;
pub mod venue;

use fyyur_core::error::CoreError;
use fyyur_core::types::DbId;
use serde::Deserialize;

use crate::error::AppError;

/// Body of the venue and artist search forms.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search_term: String,
}

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Whether a write error means the target row is missing, in which case the
/// handler answers 404 instead of rendering a failure notice.
fn is_not_found(err: &AppError) -> bool {
    matches!(err, AppError::Core(CoreError::NotFound { .. }))
}
