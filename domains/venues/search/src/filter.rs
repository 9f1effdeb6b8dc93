use chrono::NaiveDate;
use venues_models::Venue;
use venues_queries::{LocationFilter, VenueFilterQuery};

/// Whether `venue` survives every narrowing criterion of `query`.
///
/// "Open now", "near me", sorting and paging never exclude a venue and are
/// not consulted here.
pub fn matches(
    venue: &Venue, query: &VenueFilterQuery, today: NaiveDate,
) -> bool {
    matches_location(venue, query.location.as_ref())
        && matches_tags(venue, query)
        && query
            .search_text()
            .is_none_or(|text| matches_search(venue, text))
        && (!query.events_today || has_event_on(venue, today))
}

pub fn matches_location(
    venue: &Venue, location: Option<&LocationFilter>,
) -> bool {
    match location {
        None | Some(LocationFilter::NearMe) => true,
        Some(LocationFilter::City(code)) => venue.location == *code,
    }
}

/// Any requested tag present on the venue (OR semantics).
pub fn matches_tags(venue: &Venue, query: &VenueFilterQuery) -> bool {
    query.tags.is_empty() || query.tags.iter().any(|tag| venue.has_tag(tag))
}

/// Case-insensitive substring match over name, type and tags.
pub fn matches_search(venue: &Venue, text: &str) -> bool {
    let needle = text.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(&venue.name)
        || contains(&venue.venue_type)
        || venue.tags.iter().any(|tag| contains(tag))
}

pub fn has_event_on(venue: &Venue, date: NaiveDate) -> bool {
    venue.events.iter().any(|event| event.date.occurs_on(date))
}
