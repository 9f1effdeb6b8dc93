use geo::Coordinates;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
}

impl NearbyQuery {
    pub const fn new(lat: f64, lng: f64, radius_km: f64) -> Self {
        Self { lat, lng, radius_km }
    }

    pub const fn origin(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}
