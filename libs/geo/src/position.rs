use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{Coordinates, GeolocationConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location information is unavailable")]
    PositionUnavailable,
    #[error("Location request timed out")]
    Timeout,
}

impl GeolocationError {
    /// Message suitable for showing to the person who asked for the lookup.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied => {
                "Location access was denied. Showing results near the city \
                 center instead."
            }
            Self::PositionUnavailable => {
                "Your location could not be determined. Showing results near \
                 the city center instead."
            }
            Self::Timeout => {
                "Finding your location took too long. Showing results near \
                 the city center instead."
            }
        }
    }
}

/// Source of the caller's current position (device GPS, browser API, request
/// parameters).
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionSource {
    Provider,
    Fallback(GeolocationError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPosition {
    pub coordinates: Coordinates,
    pub source: PositionSource,
}

impl ResolvedPosition {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, PositionSource::Fallback(_))
    }

    pub fn error(&self) -> Option<GeolocationError> {
        match self.source {
            PositionSource::Provider => None,
            PositionSource::Fallback(err) => Some(err),
        }
    }
}

/// Asks the provider for a position, bounded by the configured timeout.
///
/// Never fails: any provider error, an invalid coordinate or an elapsed
/// timeout yields the configured fallback coordinate instead.
pub async fn resolve_position<P>(
    provider: &P, config: &GeolocationConfig,
) -> ResolvedPosition
where
    P: GeolocationProvider + ?Sized,
{
    let outcome =
        tokio::time::timeout(config.timeout(), provider.current_position())
            .await
            .unwrap_or(Err(GeolocationError::Timeout))
            .and_then(|coordinates| {
                if coordinates.is_valid() {
                    Ok(coordinates)
                }
                else {
                    Err(GeolocationError::PositionUnavailable)
                }
            });

    match outcome {
        Ok(coordinates) => {
            debug!(
                "Resolved caller position {}, {}",
                coordinates.lat, coordinates.lng
            );
            ResolvedPosition {
                coordinates,
                source: PositionSource::Provider,
            }
        }
        Err(err) => {
            warn!("Geolocation failed ({err}), using fallback coordinate");
            ResolvedPosition {
                coordinates: config.fallback(),
                source: PositionSource::Fallback(err),
            }
        }
    }
}
