use async_trait::async_trait;
use geo::{Coordinates, GeolocationError, GeolocationProvider};

/// Position reported by the client through `userLat`/`userLng`.
///
/// Absent parameters are treated as the user declining to share a
/// location.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryPositionProvider {
    lat: Option<f64>,
    lng: Option<f64>,
}

impl QueryPositionProvider {
    pub fn new(lat: Option<f64>, lng: Option<f64>) -> Self { Self { lat, lng } }
}

#[async_trait]
impl GeolocationProvider for QueryPositionProvider {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => {
                let coordinates = Coordinates::new(lat, lng);
                if coordinates.is_valid() {
                    Ok(coordinates)
                }
                else {
                    Err(GeolocationError::PositionUnavailable)
                }
            }
            _ => Err(GeolocationError::PermissionDenied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_parameters_mean_denied() {
        let provider = QueryPositionProvider::new(Some(44.4), None);

        assert_eq!(
            provider.current_position().await,
            Err(GeolocationError::PermissionDenied)
        );
    }

    #[tokio::test]
    async fn test_out_of_range_is_unavailable() {
        let provider = QueryPositionProvider::new(Some(44.4), Some(181.0));

        assert_eq!(
            provider.current_position().await,
            Err(GeolocationError::PositionUnavailable)
        );
    }

    #[tokio::test]
    async fn test_reports_given_position() {
        let provider = QueryPositionProvider::new(Some(46.77), Some(23.59));

        assert_eq!(
            provider.current_position().await,
            Ok(Coordinates::new(46.77, 23.59))
        );
    }
}
