//! Domain logic for the Fyyur listing site.
//!
//! Nothing in this crate touches the database or HTTP: it holds the id and
//! timestamp aliases, the error type, and the pure functions that classify
//! shows, group venues into areas, build search patterns and validate
//! submitted forms.

pub mod areas;
pub mod choices;
pub mod error;
pub mod formatting;
pub mod forms;
pub mod search;
pub mod shows;
pub mod types;
