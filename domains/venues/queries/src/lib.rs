pub mod filter;
pub mod nearby;
pub mod sort;

pub use filter::{
    EVENTS_TODAY_MARKER, LocationFilter, NEAR_ME, OPEN_NOW_MARKER,
    VenueFilterQuery,
};
pub use nearby::NearbyQuery;
use serde::Deserialize;
pub use sort::{PageRequest, SortDirection, SortField, SortSpec};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct GetVenueQuery {
    pub venue_id: Uuid,
}
