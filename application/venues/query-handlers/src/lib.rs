use std::sync::Arc;

use database_traits::dao::GenericDao;
use mockable::Clock;
use query_cache::{CacheTrait, CacheTypeBind};
use tracing::instrument;
use venues_cache_keys::{
    NearbyVenuesCacheKey, VenueCache, VenueList, VenueListCacheKey,
    filter_key_part, nearby_key_part,
};
use venues_dao::VenueDao;
use venues_errors::VenueError;
use venues_models::Venue;
use venues_queries::{GetVenueQuery, NearbyQuery, VenueFilterQuery};
use venues_responses::VenueResponse;

#[derive(Clone)]
pub struct GetVenueQueryHandler {
    venue_dao: VenueDao,
}

impl GetVenueQueryHandler {
    pub fn new(venue_dao: VenueDao) -> Self { Self { venue_dao } }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GetVenueQuery,
    ) -> Result<Venue, VenueError> {
        self.venue_dao
            .find_by_id(query.venue_id)
            .await?
            .ok_or(VenueError::NotFound {
                venue_id: query.venue_id,
            })
    }
}

#[derive(Clone)]
pub struct FindVenuesByFiltersQueryHandler {
    venue_dao: VenueDao,
    cache: VenueCache,
    clock: Arc<dyn Clock>,
}

impl FindVenuesByFiltersQueryHandler {
    pub fn new(
        venue_dao: VenueDao, cache: VenueCache, clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            venue_dao,
            cache,
            clock,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: VenueFilterQuery,
    ) -> Result<VenueList, VenueError> {
        let filter_json = filter_key_part(&query)?;
        let cache = VenueListCacheKey.bind_with(&self.cache, &filter_json);

        if let Some(venues) = cache.try_get().await? {
            tracing::debug!("Cache hit for venue list {}", cache.key());
            return Ok(venues);
        }

        tracing::debug!("Cache miss for venue list {}", cache.key());

        let generation = self.cache.generation();
        let all = self.venue_dao.all().await?;
        let today = self.clock.local().date_naive();
        let venues: VenueList =
            Arc::new(venues_search::search(&all, &query, today));

        if !cache.set_unless_cleared(venues.clone(), generation).await? {
            tracing::debug!("Venues changed during lookup, not caching");
        }

        Ok(venues)
    }
}

#[derive(Clone)]
pub struct FindAllVenuesQueryHandler {
    venue_dao: VenueDao,
    by_filters: FindVenuesByFiltersQueryHandler,
}

impl FindAllVenuesQueryHandler {
    pub fn new(
        venue_dao: VenueDao, by_filters: FindVenuesByFiltersQueryHandler,
    ) -> Self {
        Self {
            venue_dao,
            by_filters,
        }
    }

    /// Every venue in stored order, or the filtered result when a query is
    /// given.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, filters: Option<VenueFilterQuery>,
    ) -> Result<VenueList, VenueError> {
        match filters {
            Some(query) => self.by_filters.execute(query).await,
            None => {
                let venues = self.venue_dao.all().await?;
                Ok(Arc::new(
                    venues.into_iter().map(VenueResponse::from).collect(),
                ))
            }
        }
    }
}

#[derive(Clone)]
pub struct FindNearbyVenuesQueryHandler {
    venue_dao: VenueDao,
    cache: VenueCache,
}

impl FindNearbyVenuesQueryHandler {
    pub fn new(venue_dao: VenueDao, cache: VenueCache) -> Self {
        Self { venue_dao, cache }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: NearbyQuery,
    ) -> Result<VenueList, VenueError> {
        let origin = query.origin();
        if !origin.is_valid() {
            return Err(VenueError::InvalidCoordinates {
                lat: query.lat,
                lng: query.lng,
            });
        }

        let query_json = nearby_key_part(&query)?;
        let cache = NearbyVenuesCacheKey.bind_with(&self.cache, &query_json);

        if let Some(venues) = cache.try_get().await? {
            tracing::debug!("Cache hit for nearby venues {}", cache.key());
            return Ok(venues);
        }

        tracing::debug!("Cache miss for nearby venues {}", cache.key());

        let generation = self.cache.generation();
        let all = self.venue_dao.all().await?;
        let venues: VenueList =
            Arc::new(venues_search::nearby(&all, origin, query.radius_km));

        if !cache.set_unless_cleared(venues.clone(), generation).await? {
            tracing::debug!("Venues changed during lookup, not caching");
        }

        Ok(venues)
    }
}
