use std::cmp::Ordering;

use venues_queries::{SortDirection, SortField, SortSpec};
use venues_responses::VenueResponse;

/// Orders results by `spec`. Not stable: ties may come out in any order.
///
/// Text fields compare case-insensitively. Results without a distance sort
/// after those with one, whichever the direction.
pub fn sort_by_spec(results: &mut [VenueResponse], spec: SortSpec) {
    results.sort_unstable_by(|a, b| compare(a, b, spec));
}

/// Moves open venues ahead of closed ones, keeping relative order.
pub fn open_first(results: &mut [VenueResponse]) {
    results.sort_by_key(|result| !result.venue.is_open);
}

fn compare(a: &VenueResponse, b: &VenueResponse, spec: SortSpec) -> Ordering {
    let ordering = match spec.field {
        SortField::Name => {
            a.venue.name.to_lowercase().cmp(&b.venue.name.to_lowercase())
        }
        SortField::Type => {
            a.venue
                .venue_type
                .to_lowercase()
                .cmp(&b.venue.venue_type.to_lowercase())
        }
        SortField::Rating => a.venue.rating.total_cmp(&b.venue.rating),
        SortField::Distance => {
            return match (a.distance_km, b.distance_km) {
                (Some(a), Some(b)) => directed(a.total_cmp(&b), spec.direction),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
        }
    };
    directed(ordering, spec.direction)
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
