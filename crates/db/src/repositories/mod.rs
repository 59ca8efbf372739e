//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every write runs inside its
//! own transaction; an early return drops the transaction, which rolls it
//! back and hands the connection back to the pool.

pub mod artist_repo;
pub mod booking_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use booking_repo::BookingRepo;
pub use venue_repo::VenueRepo;
