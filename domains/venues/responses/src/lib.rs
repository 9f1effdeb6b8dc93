use geo::Coordinates;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use venues_models::Venue;

/// A venue as returned by searches, optionally annotated with its distance
/// from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VenueResponse {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub distance_km: Option<f64>,
}

impl VenueResponse {
    pub fn id(&self) -> Uuid { self.venue.id }

    pub fn name(&self) -> &str { &self.venue.name }

    pub fn with_distance_from(mut self, origin: Coordinates) -> Self {
        self.distance_km = Some(origin.distance_km(&self.venue.coordinates()));
        self
    }
}

impl From<Venue> for VenueResponse {
    fn from(venue: Venue) -> Self {
        Self {
            venue,
            distance_km: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteVenueResponse {
    pub deleted: bool,
}
