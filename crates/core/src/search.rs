//! Name search helpers shared by the venue and artist search pages.

use serde::Serialize;

use crate::types::DbId;

/// Escape character used in generated `ILIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Build a case-insensitive substring pattern for `ILIKE ... ESCAPE '\'`.
///
/// `%`, `_` and the escape character itself are matched literally. An empty
/// term yields `%%`, which matches every name.
///
/// # Examples
///
/// ```
/// use fyyur_core::search::name_pattern;
/// assert_eq!(name_pattern("cafe"), "%cafe%");
/// assert_eq!(name_pattern(""), "%%");
/// assert_eq!(name_pattern("100%"), "%100\\%%");
/// ```
pub fn name_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// One matching venue or artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Search response: the hits plus their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl SearchResults {
    pub fn new(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
