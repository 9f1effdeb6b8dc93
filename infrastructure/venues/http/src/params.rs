use std::{fmt::Display, str::FromStr};

use geo::Coordinates;
use serde::Deserialize;
use utoipa::IntoParams;
use venues_queries::{
    NearbyQuery, PageRequest, SortDirection, SortField, SortSpec,
    VenueFilterQuery,
};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListVenuesParams {
    /// City code such as `BUCHAREST`, or `NEAR_ME`.
    pub location: Option<String>,
    /// Comma separated tags; `open-now` and `events-today` switch modes.
    pub filters: Option<String>,
    pub search: Option<String>,
    #[param(value_type = Option<f64>)]
    pub user_lat: Option<String>,
    #[param(value_type = Option<f64>)]
    pub user_lng: Option<String>,
    /// One of `name`, `type`, `rating`, `distance`.
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`.
    pub sort_direction: Option<String>,
    /// 1-indexed; only applied together with `limit`.
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
}

/// Parses an optional raw value, treating blank or malformed input as absent.
fn parse_lenient<T>(name: &str, raw: Option<&str>) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = raw.map(str::trim).filter(|raw| !raw.is_empty())?;
    raw.parse()
        .inspect_err(|err| tracing::debug!("Ignoring {name}={raw:?}: {err}"))
        .ok()
}

impl ListVenuesParams {
    pub fn user_lat(&self) -> Option<f64> {
        parse_lenient("userLat", self.user_lat.as_deref())
    }

    pub fn user_lng(&self) -> Option<f64> {
        parse_lenient("userLng", self.user_lng.as_deref())
    }

    /// Coordinates supplied by the client, when both halves are present.
    pub fn user_coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.user_lat()?, self.user_lng()?))
    }

    /// Converts raw parameters into a typed query.
    ///
    /// Unknown sort fields and directions are ignored rather than rejected,
    /// and so are coordinates or paging values that do not parse.
    pub fn to_query(&self) -> VenueFilterQuery {
        let mut query = VenueFilterQuery {
            location: self
                .location
                .as_deref()
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(Into::into),
            search: self.search.clone(),
            user_location: self.user_coordinates(),
            sort: self.sort_spec(),
            page: self.page_request(),
            ..Default::default()
        };

        if let Some(filters) = &self.filters {
            query = query.with_filter_tokens(filters.split(','));
        }
        query
    }

    fn sort_spec(&self) -> Option<SortSpec> {
        let raw = self.sort_by.as_deref()?;
        let field = raw
            .parse::<SortField>()
            .inspect_err(|err| tracing::debug!("Ignoring sortBy: {err}"))
            .ok()?;

        let direction = self
            .sort_direction
            .as_deref()
            .and_then(|raw| {
                raw.parse::<SortDirection>()
                    .inspect_err(|err| {
                        tracing::debug!("Ignoring sortDirection: {err}")
                    })
                    .ok()
            })
            .unwrap_or_default();

        Some(SortSpec::new(field, direction))
    }

    fn page_request(&self) -> Option<PageRequest> {
        let limit = parse_lenient("limit", self.limit.as_deref())?;
        let page = parse_lenient("page", self.page.as_deref()).unwrap_or(1);
        Some(PageRequest::new(page, limit))
    }
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NearbyParams {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
}

impl From<NearbyParams> for NearbyQuery {
    fn from(params: NearbyParams) -> Self {
        Self::new(params.lat, params.lng, params.radius_km)
    }
}
