use std::time::Duration;

use crate::Coordinates;

#[derive(Debug, Clone)]
pub struct GeolocationConfig {
    pub timeout_secs: u64,
    pub default_lat: f64,
    pub default_lng: f64,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            default_lat: default_lat(),
            default_lng: default_lng(),
        }
    }
}

impl GeolocationConfig {
    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }

    /// Coordinate used when the caller position cannot be determined.
    pub fn fallback(&self) -> Coordinates {
        Coordinates::new(self.default_lat, self.default_lng)
    }
}

fn default_timeout_secs() -> u64 { 10 }
// central Bucharest
fn default_lat() -> f64 { 44.4268 }
fn default_lng() -> f64 { 26.1025 }
