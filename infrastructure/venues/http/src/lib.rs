pub mod handlers;
pub mod params;
pub mod position;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use mockable::Clock;
use geo::GeolocationConfig;
use venues_cache_keys::VenueCache;
use venues_command_handlers::{
    CreateVenueHandler, DeleteVenueHandler, UpdateVenueHandler,
};
use venues_dao::VenueDao;
use venues_query_handlers::{
    FindAllVenuesQueryHandler, FindNearbyVenuesQueryHandler,
    FindVenuesByFiltersQueryHandler, GetVenueQueryHandler,
};

pub use crate::{
    handlers::*,
    params::{ListVenuesParams, NearbyParams},
    position::QueryPositionProvider,
};

#[derive(Clone)]
pub struct VenueServices {
    pub create_venue: CreateVenueHandler,
    pub update_venue: UpdateVenueHandler,
    pub delete_venue: DeleteVenueHandler,

    pub get_venue: GetVenueQueryHandler,
    pub find_all_venues: FindAllVenuesQueryHandler,
    pub find_nearby_venues: FindNearbyVenuesQueryHandler,
    pub geolocation: GeolocationConfig,
}

impl VenueServices {
    pub fn new(
        dao: VenueDao, cache: VenueCache, clock: Arc<dyn Clock>,
        geolocation: GeolocationConfig,
    ) -> Self {
        let by_filters = FindVenuesByFiltersQueryHandler::new(
            dao.clone(),
            cache.clone(),
            clock,
        );

        Self {
            create_venue: CreateVenueHandler::new(dao.clone(), cache.clone()),
            update_venue: UpdateVenueHandler::new(dao.clone(), cache.clone()),
            delete_venue: DeleteVenueHandler::new(dao.clone(), cache.clone()),
            get_venue: GetVenueQueryHandler::new(dao.clone()),
            find_all_venues: FindAllVenuesQueryHandler::new(
                dao.clone(),
                by_filters,
            ),
            find_nearby_venues: FindNearbyVenuesQueryHandler::new(dao, cache),
            geolocation,
        }
    }
}

pub struct VenueHandlers;

impl VenueHandlers {
    pub fn routes() -> Router<VenueServices> {
        Router::new()
            .route("/", get(list_venues))
            .route("/", post(create_venue))
            .route("/nearby", get(find_nearby_venues))
            .route(
                "/{id}",
                get(get_venue).put(update_venue).delete(delete_venue),
            )
    }
}
