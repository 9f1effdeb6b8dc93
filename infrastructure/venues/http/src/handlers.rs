use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::Json,
};
use common_errors::AppError;
use geo::resolve_position;
use tracing::instrument;
use uuid::Uuid;
use venues_cache_keys::VenueList;
use venues_commands::{
    CreateVenueCommand, DeleteVenueCommand, UpdateVenueCommand,
};
use venues_models::Venue;
use venues_queries::GetVenueQuery;
use venues_responses::{DeleteVenueResponse, VenueResponse};

use crate::{
    VenueServices,
    params::{ListVenuesParams, NearbyParams},
    position::QueryPositionProvider,
};

/// Set when a "near me" search had to fall back to the default coordinate.
pub const GEOLOCATION_NOTICE_HEADER: &str = "x-geolocation-notice";

#[utoipa::path(
    get,
    path = "/venues",
    params(ListVenuesParams),
    responses(
        (status = 200, description = "Venues matching the filters", body = Vec<VenueResponse>),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "venues"
)]
#[instrument(skip_all)]
pub async fn list_venues(
    State(services): State<VenueServices>,
    Query(params): Query<ListVenuesParams>,
) -> Result<(HeaderMap, Json<VenueList>), AppError> {
    let mut query = params.to_query();
    let mut headers = HeaderMap::new();

    if query.is_near_me() {
        let provider =
            QueryPositionProvider::new(params.user_lat(), params.user_lng());
        let resolved = resolve_position(&provider, &services.geolocation).await;
        if let Some(err) = resolved.error() {
            headers.insert(
                GEOLOCATION_NOTICE_HEADER,
                HeaderValue::from_static(err.user_message()),
            );
        }
        query.user_location = Some(resolved.coordinates);
    }

    let filters = (!query.is_empty()).then_some(query);
    let venues = services.find_all_venues.execute(filters).await?;

    Ok((headers, Json(venues)))
}

#[utoipa::path(
    get,
    path = "/venues/nearby",
    params(NearbyParams),
    responses(
        (status = 200, description = "Venues within the radius, nearest first", body = Vec<VenueResponse>),
        (status = 400, description = "Missing or malformed parameters", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Coordinates out of range", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "venues"
)]
#[instrument(skip_all)]
pub async fn find_nearby_venues(
    State(services): State<VenueServices>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<VenueList>, AppError> {
    let venues = services.find_nearby_venues.execute(params.into()).await?;

    Ok(Json(venues))
}

#[utoipa::path(
    get,
    path = "/venues/{id}",
    params(
        ("id" = Uuid, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Venue found", body = Venue),
        (status = 400, description = "Invalid UUID format"),
        (status = 404, description = "Venue not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "venues"
)]
#[instrument(skip_all)]
pub async fn get_venue(
    State(services): State<VenueServices>, Path(id): Path<Uuid>,
) -> Result<Json<Venue>, AppError> {
    let venue = services
        .get_venue
        .execute(GetVenueQuery { venue_id: id })
        .await?;

    Ok(Json(venue))
}

#[utoipa::path(
    post,
    path = "/venues",
    request_body = CreateVenueCommand,
    responses(
        (status = 201, description = "Venue created successfully", body = VenueResponse),
        (status = 400, description = "Invalid request data", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Validation error", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "venues"
)]
#[instrument(skip_all)]
pub async fn create_venue(
    State(services): State<VenueServices>,
    Json(command): Json<CreateVenueCommand>,
) -> Result<(StatusCode, Json<VenueResponse>), AppError> {
    let result = services.create_venue.execute(command).await?;

    tracing::info!("Venue created: {}", result.id());

    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    put,
    path = "/venues/{id}",
    request_body = UpdateVenueCommand,
    params(
        ("id" = Uuid, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Venue updated successfully", body = VenueResponse),
        (status = 404, description = "Venue not found", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Validation error", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "venues"
)]
#[instrument(skip_all)]
pub async fn update_venue(
    State(services): State<VenueServices>, Path(id): Path<Uuid>,
    Json(mut command): Json<UpdateVenueCommand>,
) -> Result<Json<VenueResponse>, AppError> {
    command.venue_id = id;
    let result = services.update_venue.execute(command).await?;

    tracing::info!("Venue updated: {}", id);

    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/venues/{id}",
    params(
        ("id" = Uuid, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Whether a venue was removed", body = DeleteVenueResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "venues"
)]
#[instrument(skip_all)]
pub async fn delete_venue(
    State(services): State<VenueServices>, Path(id): Path<Uuid>,
) -> Result<Json<DeleteVenueResponse>, AppError> {
    let result = services
        .delete_venue
        .execute(DeleteVenueCommand { venue_id: id })
        .await?;

    if result.deleted {
        tracing::info!("Venue deleted: {}", id);
    }

    Ok(Json(result))
}
