//! The venue search pipeline: filter, annotate, sort, paginate.
//!
//! Everything here is a pure function over a venue slice. Nothing fails:
//! values that cannot match simply produce fewer results.

pub mod filter;
pub mod paginate;
pub mod sort;

use chrono::NaiveDate;
use geo::Coordinates;
use venues_models::Venue;
use venues_queries::{SortField, SortSpec, VenueFilterQuery};
use venues_responses::VenueResponse;

pub use crate::{
    filter::matches,
    paginate::paginate,
    sort::{open_first, sort_by_spec},
};

/// Runs a filter query against `venues`, evaluating "today" as `today`.
///
/// Stages, in order: location/tag/text/events-today filtering, distance
/// annotation when a valid user location is known, the explicit sort (or
/// ascending distance for "near me"), the open-first partition, and
/// finally the page window. The input is never mutated; an empty query
/// yields a copy of every venue in its original order.
pub fn search(
    venues: &[Venue], query: &VenueFilterQuery, today: NaiveDate,
) -> Vec<VenueResponse> {
    let origin = query.user_location.filter(Coordinates::is_valid);

    let mut results: Vec<VenueResponse> = venues
        .iter()
        .filter(|venue| matches(venue, query, today))
        .map(|venue| annotate(venue, origin))
        .collect();

    let sort = query.sort.or_else(|| {
        (query.is_near_me() && origin.is_some())
            .then_some(SortSpec::asc(SortField::Distance))
    });
    if let Some(spec) = sort {
        sort_by_spec(&mut results, spec);
    }

    if query.open_now {
        open_first(&mut results);
    }

    match query.page {
        Some(page) => paginate(results, page),
        None => results,
    }
}

/// Venues within `radius_km` of `origin`, nearest first.
///
/// A negative or non-finite radius matches nothing.
pub fn nearby(
    venues: &[Venue], origin: Coordinates, radius_km: f64,
) -> Vec<VenueResponse> {
    if !(radius_km.is_finite() && radius_km >= 0.0) {
        return Vec::new();
    }

    let mut within: Vec<(f64, &Venue)> = venues
        .iter()
        .map(|venue| (origin.distance_km(&venue.coordinates()), venue))
        .filter(|(distance, _)| *distance <= radius_km)
        .collect();
    within.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    within
        .into_iter()
        .map(|(distance, venue)| {
            VenueResponse {
                venue: venue.clone(),
                distance_km: Some(distance),
            }
        })
        .collect()
}

fn annotate(venue: &Venue, origin: Option<Coordinates>) -> VenueResponse {
    let response = VenueResponse::from(venue.clone());
    match origin {
        Some(origin) => response.with_distance_from(origin),
        None => response,
    }
}

#[cfg(test)]
mod tests {
    use seeders::sample_venues;
    use venues_queries::{LocationFilter, PageRequest, SortDirection};

    use super::*;

    const CENTER: Coordinates = Coordinates::new(44.4268, 26.1025);

    // a Friday
    fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2026, 10, 16).unwrap() }

    fn names(results: &[VenueResponse]) -> Vec<&str> {
        results.iter().map(VenueResponse::name).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let venues = sample_venues();

        let results = search(&venues, &VenueFilterQuery::default(), today());

        assert_eq!(results.len(), venues.len());
        for (result, venue) in results.iter().zip(&venues) {
            assert_eq!(&result.venue, venue);
            assert!(result.distance_km.is_none());
        }
    }

    #[test]
    fn test_location_keeps_open_and_closed_venues() {
        let venues = sample_venues();
        let query = VenueFilterQuery::builder().location("BUCHAREST").build();

        let results = search(&venues, &query, today());

        assert_eq!(names(&results), vec!["Control Club", "Old Town"]);
        assert!(results[0].venue.is_open);
        assert!(!results[1].venue.is_open);
    }

    #[test]
    fn test_unknown_location_matches_nothing() {
        let venues = sample_venues();
        let query = VenueFilterQuery::builder().location("ATLANTIS").build();

        assert!(search(&venues, &query, today()).is_empty());
    }

    #[test]
    fn test_near_me_sorts_by_distance() {
        let venues = sample_venues();
        let query = VenueFilterQuery::builder()
            .location(LocationFilter::NearMe)
            .user_location(CENTER)
            .build();

        let results = search(&venues, &query, today());

        assert_eq!(results.len(), venues.len());
        assert_eq!(
            &names(&results)[..3],
            &["Old Town", "Control Club", "Sky Lounge Pipera"]
        );
        let distances: Vec<f64> =
            results.iter().map(|r| r.distance_km.unwrap()).collect();
        assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_near_me_without_position_only_skips_location() {
        let venues = sample_venues();
        let query = VenueFilterQuery::builder()
            .location(LocationFilter::NearMe)
            .build();

        let results = search(&venues, &query, today());

        assert_eq!(results.len(), venues.len());
        assert!(results.iter().all(|r| r.distance_km.is_none()));
    }

    #[test]
    fn test_open_now_partitions_stably() {
        let venues = sample_venues();
        let query = VenueFilterQuery::builder().open_now(true).build();

        let results = search(&venues, &query, today());

        assert_eq!(results.len(), venues.len());
        let first_closed = results
            .iter()
            .position(|r| !r.venue.is_open)
            .unwrap();
        assert!(results[first_closed..].iter().all(|r| !r.venue.is_open));

        let expected_open: Vec<&str> = venues
            .iter()
            .filter(|v| v.is_open)
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names(&results[..first_closed]), expected_open);
    }

    #[test]
    fn test_events_today_requires_a_matching_event() {
        let venues = sample_venues();
        let query = VenueFilterQuery::builder().events_today(true).build();

        let results = search(&venues, &query, today());

        assert_eq!(names(&results), vec!["Control Club"]);
        assert!(results.iter().all(|r| {
            r.venue.events.iter().any(|e| e.date.occurs_on(today()))
        }));
    }

    #[test]
    fn test_events_today_on_literal_date() {
        let venues = sample_venues();
        let halloween = NaiveDate::from_ymd_opt(2026, 10, 31).unwrap();
        let query = VenueFilterQuery::builder().events_today(true).build();

        let results = search(&venues, &query, halloween);

        // Halloween 2026 is a Saturday: the party plus the weekly jazz night
        assert_eq!(names(&results), vec!["Old Town", "Festival 39"]);
    }

    #[test]
    fn test_sort_then_paginate() {
        let venues = sample_venues();
        let query = VenueFilterQuery::builder()
            .sort(SortSpec::new(SortField::Rating, SortDirection::Desc))
            .page(PageRequest::new(1, 2))
            .build();

        let results = search(&venues, &query, today());

        assert_eq!(names(&results), vec!["Joben Bistro", "Control Club"]);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let venues = sample_venues();
        let query = VenueFilterQuery::builder()
            .page(PageRequest::new(4, 2))
            .build();

        assert!(search(&venues, &query, today()).is_empty());
    }

    #[test]
    fn test_input_is_left_untouched() {
        let venues = sample_venues();
        let before = venues.clone();
        let query = VenueFilterQuery::builder()
            .open_now(true)
            .sort(SortSpec::desc(SortField::Name))
            .build();

        let _ = search(&venues, &query, today());

        assert_eq!(venues, before);
    }

    #[test]
    fn test_nearby_within_five_km_of_center() {
        let venues = sample_venues();

        let results = nearby(&venues, CENTER, 5.0);

        assert_eq!(names(&results), vec!["Old Town", "Control Club"]);
        assert!(results.iter().all(|r| r.distance_km.unwrap() <= 5.0));
    }

    #[test]
    fn test_nearby_rejects_bad_radius() {
        let venues = sample_venues();

        assert!(nearby(&venues, CENTER, -1.0).is_empty());
        assert!(nearby(&venues, CENTER, f64::NAN).is_empty());
    }

    #[test]
    fn test_nearby_zero_radius_on_a_venue() {
        let venues = sample_venues();
        let old_town = venues.iter().find(|v| v.name == "Old Town").unwrap();

        let results = nearby(&venues, old_town.coordinates(), 0.0);

        assert_eq!(names(&results), vec!["Old Town"]);
        assert!(results[0].distance_km.unwrap().abs() < 1e-9);
    }
}
