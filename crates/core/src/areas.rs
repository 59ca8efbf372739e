//! Grouping of venues into (city, state) areas for the venues listing.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::DbId;

/// A venue as it appears inside an area group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaVenue {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// All venues sharing a city (case-insensitive) and state (exact).
///
/// `city` keeps the spelling of the first venue seen for the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<AreaVenue>,
}

/// Input to [`group_by_area`]: a venue with its location.
#[derive(Debug, Clone)]
pub struct LocatedVenue {
    pub city: String,
    pub state: String,
    pub venue: AreaVenue,
}

/// Group venues by area.
///
/// Produces one group per distinct `(city.to_uppercase(), state)` pair, in the
/// order each pair is first seen. Venues keep their input order within a group.
pub fn group_by_area<I>(venues: I) -> Vec<Area>
where
    I: IntoIterator<Item = LocatedVenue>,
{
    let mut areas: Vec<Area> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for located in venues {
        let key = (located.city.to_uppercase(), located.state.clone());
        match index.get(&key) {
            Some(&i) => areas[i].venues.push(located.venue),
            None => {
                index.insert(key, areas.len());
                areas.push(Area {
                    city: located.city,
                    state: located.state,
                    venues: vec![located.venue],
                });
            }
        }
    }

    areas
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn located(id: DbId, city: &str, state: &str) -> LocatedVenue {
        LocatedVenue {
            city: city.to_string(),
            state: state.to_string(),
            venue: AreaVenue {
                id,
                name: format!("Venue {id}"),
                num_upcoming_shows: 0,
            },
        }
    }

    #[test]
    fn empty_input_yields_no_areas() {
        assert!(group_by_area(Vec::new()).is_empty());
    }

    #[test]
    fn city_match_ignores_case() {
        let areas = group_by_area(vec![
            located(1, "San Francisco", "CA"),
            located(2, "SAN FRANCISCO", "CA"),
            located(3, "san francisco", "CA"),
        ]);

        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].city, "San Francisco");
        let ids: Vec<_> = areas[0].venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn state_match_is_case_sensitive() {
        let areas = group_by_area(vec![located(1, "Portland", "OR"), located(2, "Portland", "or")]);
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn same_city_different_state_is_separate() {
        let areas = group_by_area(vec![located(1, "Portland", "OR"), located(2, "Portland", "ME")]);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "OR");
        assert_eq!(areas[1].state, "ME");
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let areas = group_by_area(vec![
            located(1, "New York", "NY"),
            located(2, "San Francisco", "CA"),
            located(3, "new york", "NY"),
            located(4, "Austin", "TX"),
            located(5, "San Francisco", "CA"),
        ]);

        let cities: Vec<_> = areas.iter().map(|a| a.city.as_str()).collect();
        assert_eq!(cities, ["New York", "San Francisco", "Austin"]);
        assert_eq!(areas[0].venues.len(), 2);
        assert_eq!(areas[1].venues.len(), 2);
        assert_eq!(areas[2].venues.len(), 1);
    }

    #[test]
    fn group_count_equals_distinct_normalized_pairs() {
        let input = vec![
            located(1, "Boise", "ID"),
            located(2, "boise", "ID"),
            located(3, "Boise", "OR"),
            located(4, "Nampa", "ID"),
            located(5, "NAMPA", "ID"),
            located(6, "Eagle", "ID"),
        ];
        let distinct: HashSet<_> = input
            .iter()
            .map(|v| (v.city.to_uppercase(), v.state.clone()))
            .collect();

        let areas = group_by_area(input);

        assert_eq!(areas.len(), distinct.len());
        assert_eq!(areas.iter().map(|a| a.venues.len()).sum::<usize>(), 6);
    }

    #[test]
    fn upcoming_counts_travel_with_their_venue() {
        let mut busy = located(7, "Austin", "TX");
        busy.venue.num_upcoming_shows = 4;
        let areas = group_by_area(vec![located(6, "Austin", "TX"), busy]);
        assert_eq!(areas[0].venues[1].num_upcoming_shows, 4);
    }
}
