use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use database_traits::dao::GenericDao;
use tracing::{debug, instrument};
use uuid::Uuid;
use venues_errors::VenueError;
use venues_models::{NewVenue, UpdateVenue, Venue};

/// Process-local venue store.
///
/// Clones share the same list. Insertion order is preserved and is the
/// "original order" searches report in.
#[derive(Clone, Default)]
pub struct VenueDao {
    venues: Arc<RwLock<Vec<Venue>>>,
}

impl VenueDao {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self {
            venues: Arc::new(RwLock::new(venues)),
        }
    }

    pub fn len(&self) -> usize { self.read().len() }

    pub fn is_empty(&self) -> bool { self.read().is_empty() }

    /// Copy of the current list, detached from later mutations.
    pub fn snapshot(&self) -> Vec<Venue> { self.read().clone() }

    // A panic while holding the lock cannot leave the Vec half-written by
    // any of the operations below, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Venue>> {
        self.venues.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Venue>> {
        self.venues.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl GenericDao for VenueDao {
    type CreateRequest = NewVenue;
    type Error = VenueError;
    type ID = Uuid;
    type Model = Venue;
    type UpdateRequest = UpdateVenue;

    #[instrument(skip(self))]
    async fn find_by_id(
        &self, id: Self::ID,
    ) -> Result<Option<Self::Model>, Self::Error> {
        Ok(self.read().iter().find(|venue| venue.id == id).cloned())
    }

    async fn all(&self) -> Result<Vec<Self::Model>, Self::Error> {
        Ok(self.snapshot())
    }

    #[instrument(skip(self, req), fields(name = %req.name))]
    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Model, Self::Error> {
        let venue = Venue::from_new(Uuid::now_v7(), req);
        self.write().push(venue.clone());
        debug!("Stored venue {}", venue.id);
        Ok(venue)
    }

    #[instrument(skip(self, req))]
    async fn update(
        &self, id: Self::ID, req: Self::UpdateRequest,
    ) -> Result<Self::Model, Self::Error> {
        let mut venues = self.write();
        let venue = venues
            .iter_mut()
            .find(|venue| venue.id == id)
            .ok_or(VenueError::NotFound { venue_id: id })?;

        req.apply_to(venue);
        Ok(venue.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Self::ID) -> Result<bool, Self::Error> {
        let mut venues = self.write();
        let before = venues.len();
        venues.retain(|venue| venue.id != id);
        Ok(venues.len() < before)
    }
}
