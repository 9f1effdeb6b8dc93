//! Coordinates, great-circle distance and device position lookup.

pub mod config;
pub mod distance;
pub mod position;

pub use config::GeolocationConfig;
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use position::{
    GeolocationError, GeolocationProvider, PositionSource, ResolvedPosition,
    resolve_position,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self { Self { lat, lng } }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn distance_km(&self, other: &Self) -> f64 {
        haversine_km(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(44.4268, 26.1025).is_valid());
        assert!(Coordinates::new(-90.0, 180.0).is_valid());
        assert!(!Coordinates::new(90.5, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -180.1).is_valid());
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
    }
}
