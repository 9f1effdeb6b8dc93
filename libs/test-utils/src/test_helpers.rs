use anyhow::Result;
use database_traits::dao::GenericDao;
use venues_dao::VenueDao;
use venues_models::{NewVenue, Venue};

/// Minimal open venue in the given city at the given coordinate.
pub fn new_test_venue(
    name: &str, location: &str, lat: f64, lng: f64,
) -> NewVenue {
    NewVenue::builder()
        .name(name)
        .venue_type("Bar")
        .location(location)
        .lat(lat)
        .lng(lng)
        .is_open(true)
        .rating(4.0)
        .build()
}

/// Create a venue in central Bucharest and return it as stored
pub async fn create_test_venue(dao: &VenueDao, name: &str) -> Result<Venue> {
    let venue = dao
        .create(new_test_venue(name, "BUCHAREST", 44.4268, 26.1025))
        .await?;
    Ok(venue)
}

/// Create two Bucharest venues and return them in insertion order
pub async fn create_test_venues(dao: &VenueDao) -> Result<(Venue, Venue)> {
    let first = create_test_venue(dao, "Alpha Bar").await?;
    let second = create_test_venue(dao, "Beta Bar").await?;
    Ok((first, second))
}
