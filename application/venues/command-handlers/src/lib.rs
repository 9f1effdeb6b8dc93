use database_traits::dao::GenericDao;
use geo::Coordinates;
use query_cache::CacheTrait;
use tracing::instrument;
use venues_cache_keys::VenueCache;
use venues_commands::{
    CreateVenueCommand, DeleteVenueCommand, UpdateVenueCommand,
};
use venues_dao::VenueDao;
use venues_errors::VenueError;
use venues_models::{NewVenue, UpdateVenue};
use venues_responses::{DeleteVenueResponse, VenueResponse};

const MAX_RATING: f32 = 5.0;

fn validate_name(name: &str) -> Result<(), VenueError> {
    if name.trim().is_empty() {
        return Err(VenueError::Validation(
            "Venue name must not be blank".to_string(),
        ));
    }
    Ok(())
}

fn validate_rating(rating: f32) -> Result<(), VenueError> {
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(VenueError::Validation(format!(
            "Rating must be between 0 and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

fn validate_coordinates(lat: f64, lng: f64) -> Result<(), VenueError> {
    if !Coordinates::new(lat, lng).is_valid() {
        return Err(VenueError::InvalidCoordinates { lat, lng });
    }
    Ok(())
}

#[derive(Clone)]
pub struct CreateVenueHandler {
    venue_dao: VenueDao,
    cache: VenueCache,
}

impl CreateVenueHandler {
    pub fn new(venue_dao: VenueDao, cache: VenueCache) -> Self {
        Self { venue_dao, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: CreateVenueCommand,
    ) -> Result<VenueResponse, VenueError> {
        validate_name(&command.name)?;
        validate_rating(command.rating)?;
        validate_coordinates(command.lat, command.lng)?;

        let saved_venue =
            self.venue_dao.create(NewVenue::from(command)).await?;
        self.cache.clear().await?;

        Ok(VenueResponse::from(saved_venue))
    }
}

#[derive(Clone)]
pub struct UpdateVenueHandler {
    venue_dao: VenueDao,
    cache: VenueCache,
}

impl UpdateVenueHandler {
    pub fn new(venue_dao: VenueDao, cache: VenueCache) -> Self {
        Self { venue_dao, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: UpdateVenueCommand,
    ) -> Result<VenueResponse, VenueError> {
        if let Some(name) = &command.name {
            validate_name(name)?;
        }
        if let Some(rating) = command.rating {
            validate_rating(rating)?;
        }
        if command.lat.is_some() || command.lng.is_some() {
            validate_coordinates(
                command.lat.unwrap_or_default(),
                command.lng.unwrap_or_default(),
            )?;
        }

        let venue_id = command.venue_id;
        let updated_venue = self
            .venue_dao
            .update(venue_id, UpdateVenue::from(command))
            .await?;
        self.cache.clear().await?;

        Ok(VenueResponse::from(updated_venue))
    }
}

#[derive(Clone)]
pub struct DeleteVenueHandler {
    venue_dao: VenueDao,
    cache: VenueCache,
}

impl DeleteVenueHandler {
    pub fn new(venue_dao: VenueDao, cache: VenueCache) -> Self {
        Self { venue_dao, cache }
    }

    /// Removing an unknown id is not an error; it reports `deleted: false`.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: DeleteVenueCommand,
    ) -> Result<DeleteVenueResponse, VenueError> {
        let deleted = self.venue_dao.delete(command.venue_id).await?;
        if deleted {
            self.cache.clear().await?;
        }

        Ok(DeleteVenueResponse { deleted })
    }
}
