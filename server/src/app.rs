use std::sync::Arc;

use axum::{
    Json, Router, http::StatusCode, response::IntoResponse, routing::get,
};
use mockable::{Clock, DefaultClock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use venues_cache_keys::venue_cache;
use venues_dao::VenueDao;
use venues_http::{VenueHandlers, VenueServices};

use crate::config::AppConfig;

/// Wires the store, cache and clock into services per `config`.
pub fn build_services(
    config: &AppConfig, clock: Arc<dyn Clock>,
) -> VenueServices {
    let dao = if config.seed_sample_data {
        let venues = seeders::sample_venues();
        info!("Seeding {} sample venues", venues.len());
        VenueDao::new(venues)
    }
    else {
        VenueDao::default()
    };

    VenueServices::new(
        dao,
        venue_cache(config.cache.clone()),
        clock,
        config.geolocation.clone(),
    )
}

pub fn build_router(services: VenueServices) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/venues", VenueHandlers::routes().with_state(services))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Router backed by the system clock.
pub fn app(config: &AppConfig) -> Router {
    build_router(build_services(config, Arc::new(DefaultClock)))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        venues_http::list_venues,
        venues_http::find_nearby_venues,
        venues_http::get_venue,
        venues_http::create_venue,
        venues_http::update_venue,
        venues_http::delete_venue
    ),
    components(
        schemas(
            venues_models::Venue,
            venues_models::Drink,
            venues_models::DrinkCategory,
            venues_models::VenueEvent,
            venues_models::WeeklyHours,
            venues_responses::VenueResponse,
            venues_responses::DeleteVenueResponse,
            venues_commands::CreateVenueCommand,
            venues_commands::UpdateVenueCommand,
            venues_queries::SortField,
            venues_queries::SortDirection,
            common_errors::ApiErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "venues", description = "Venue search and management endpoints")
    ),
    info(
        title = "Barscout API",
        description = "Bar and venue discovery API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = String)
    ),
    tag = "health"
)]
async fn health_check() -> impl IntoResponse { (StatusCode::OK, "OK") }
