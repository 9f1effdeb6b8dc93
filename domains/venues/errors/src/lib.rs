use common_errors::AppError;
use query_cache::CacheError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum VenueError {
    #[error("Venue not found: {venue_id}")]
    NotFound { venue_id: Uuid },
    #[error("Invalid coordinates: lat {lat}, lng {lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

impl From<VenueError> for AppError {
    fn from(err: VenueError) -> Self {
        match err {
            VenueError::NotFound { venue_id } => {
                AppError::not_found(
                    "VENUE_NOT_FOUND",
                    &format!("Venue with ID {venue_id} not found"),
                )
            }
            VenueError::InvalidCoordinates { lat, lng } => {
                AppError::unprocessable_entity(
                    "INVALID_COORDINATES",
                    &format!(
                        "Coordinates ({lat}, {lng}) are outside the valid \
                         latitude/longitude range"
                    ),
                )
            }
            VenueError::Validation(msg) => {
                AppError::unprocessable_entity("VALIDATION_ERROR", &msg)
            }
            VenueError::Cache(cache_err) => {
                AppError::internal_server_error(&format!(
                    "Cache error: {cache_err}"
                ))
            }
        }
    }
}
