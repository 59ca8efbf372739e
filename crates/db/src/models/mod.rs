//! Row models and input DTOs, one module per table.

pub mod artist;
pub mod booking;
pub mod venue;
