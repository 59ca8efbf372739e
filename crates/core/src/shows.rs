//! Past / upcoming classification of shows.
//!
//! A show is upcoming when it starts at or after the reference instant and
//! past otherwise, so every show lands in exactly one bucket. Nothing here is
//! persisted: callers pass `now` on every request.

use serde::Serialize;

use crate::types::Timestamp;

/// Which side of the reference instant a show falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowTiming {
    Past,
    Upcoming,
}

/// Anything that has a start time and can therefore be classified.
pub trait Scheduled {
    fn start_time(&self) -> Timestamp;
}

impl Scheduled for Timestamp {
    fn start_time(&self) -> Timestamp {
        *self
    }
}

/// Classify a single start time against `now`.
///
/// The upcoming interval is half-open: a show starting exactly at `now` is
/// upcoming.
pub fn classify(start_time: Timestamp, now: Timestamp) -> ShowTiming {
    if start_time >= now {
        ShowTiming::Upcoming
    } else {
        ShowTiming::Past
    }
}

/// Shows split into past and upcoming, each in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowPartition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> ShowPartition<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

impl<T> Default for ShowPartition<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

/// Partition `shows` relative to `now`, preserving relative order.
pub fn partition_shows<T, I>(shows: I, now: Timestamp) -> ShowPartition<T>
where
    T: Scheduled,
    I: IntoIterator<Item = T>,
{
    let mut partition = ShowPartition::default();
    for show in shows {
        match classify(show.start_time(), now) {
            ShowTiming::Upcoming => partition.upcoming.push(show),
            ShowTiming::Past => partition.past.push(show),
        }
    }
    partition
}

/// Count how many of `shows` are upcoming relative to `now`.
pub fn count_upcoming<'a, T, I>(shows: I, now: Timestamp) -> usize
where
    T: Scheduled + 'a,
    I: IntoIterator<Item = &'a T>,
{
    shows
        .into_iter()
        .filter(|s| classify(s.start_time(), now) == ShowTiming::Upcoming)
        .count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 5, 1, 20, 0, 0).unwrap()
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Gig {
        label: &'static str,
        at: Timestamp,
    }

    impl Scheduled for Gig {
        fn start_time(&self) -> Timestamp {
            self.at
        }
    }

    // -- classify ------------------------------------------------------------

    #[test]
    fn future_start_is_upcoming() {
        assert_eq!(
            classify(now() + Duration::days(3), now()),
            ShowTiming::Upcoming
        );
    }

    #[test]
    fn earlier_start_is_past() {
        assert_eq!(classify(now() - Duration::seconds(1), now()), ShowTiming::Past);
    }

    #[test]
    fn start_equal_to_now_is_upcoming() {
        assert_eq!(classify(now(), now()), ShowTiming::Upcoming);
    }

    // -- partition_shows -----------------------------------------------------

    #[test]
    fn partition_preserves_order_within_buckets() {
        let gigs = vec![
            Gig { label: "a", at: now() - Duration::days(10) },
            Gig { label: "b", at: now() + Duration::days(1) },
            Gig { label: "c", at: now() - Duration::days(1) },
            Gig { label: "d", at: now() },
        ];

        let split = partition_shows(gigs, now());

        let past: Vec<_> = split.past.iter().map(|g| g.label).collect();
        let upcoming: Vec<_> = split.upcoming.iter().map(|g| g.label).collect();
        assert_eq!(past, ["a", "c"]);
        assert_eq!(upcoming, ["b", "d"]);
        assert_eq!(split.past_count(), 2);
        assert_eq!(split.upcoming_count(), 2);
    }

    #[test]
    fn partition_of_nothing_is_empty() {
        let split: ShowPartition<Gig> = partition_shows(Vec::new(), now());
        assert_eq!(split, ShowPartition::default());
    }

    #[test]
    fn every_show_lands_in_exactly_one_bucket() {
        let times: Vec<Timestamp> = (-50..50).map(|h| now() + Duration::hours(h)).collect();
        let split = partition_shows(times.clone(), now());

        assert_eq!(split.past_count() + split.upcoming_count(), times.len());
        assert!(split.past.iter().all(|t| *t < now()));
        assert!(split.upcoming.iter().all(|t| *t >= now()));
    }

    #[test]
    fn reclassifies_as_now_advances() {
        let at = now() + Duration::hours(1);
        assert_eq!(classify(at, now()), ShowTiming::Upcoming);
        assert_eq!(classify(at, now() + Duration::hours(2)), ShowTiming::Past);
    }

    // -- count_upcoming ------------------------------------------------------

    #[test]
    fn counts_only_upcoming() {
        let times = [
            now() - Duration::days(2),
            now(),
            now() + Duration::minutes(5),
        ];
        assert_eq!(count_upcoming(&times, now()), 2);
    }
}
