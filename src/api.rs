use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, error, info, instrument, warn};
use utoipa::{OpenApi, ToSchema};

use crate::db::{TemperatureObservation, TemperatureStats};
use crate::services::{ClimateError, ClimateService, StationService};

#[derive(Clone)]
pub struct AppState {
    pub climate_service: ClimateService,
    pub station_service: StationService,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub const WELCOME_PAGE: &str = concat!(
    "Welcome to the Climate App!<br/>",
    "Append a date to the start_date route, for example start_date/2015-01-01<br/>",
    "and two dates to the range route, for example start_date/end_date/2010-01-01/2015-01-01<br/>",
    "Available Routes:<br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/>",
    "/api/v1.0/start_date/&lt;start&gt;<br/>",
    "/api/v1.0/start_date/end_date/&lt;start&gt;/&lt;end&gt;"
);

#[derive(OpenApi)]
#[openapi(
    paths(
        welcome,
        get_precipitation,
        get_stations,
        get_most_active_temperatures,
        get_stats_from,
        get_stats_between
    ),
    components(schemas(TemperatureObservation, TemperatureStats, ErrorResponse)),
    tags((name = "climate", description = "Climate observations by date range"))
)]
pub struct ApiDoc;

pub fn generate_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/precipitation", get(get_precipitation))
        .route("/stations", get(get_stations))
        .route("/tobs", get(get_most_active_temperatures))
        .route("/start_date/{start}", get(get_stats_from))
        .route("/start_date/end_date/{start}/{end}", get(get_stats_between))
        .with_state(state);

    Router::new()
        .route("/", get(welcome))
        .nest("/api/v1.0", api_routes)
}

impl IntoResponse for ClimateError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            warn!("Rejected request: {}", self);
            let body = ErrorResponse {
                error: self.to_string(),
            };
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        } else {
            error!("Request failed: {}", self);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "climate",
    responses((status = 200, description = "Route listing", body = String, content_type = "text/html"))
)]
#[instrument]
async fn welcome() -> Html<&'static str> {
    debug!("Welcome page requested");
    Html(WELCOME_PAGE)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    tag = "climate",
    responses(
        (status = 200, description = "Precipitation by date for the latest year of data", body = BTreeMap<String, Option<f64>>),
        (status = 500, description = "Database failure")
    )
)]
#[instrument(skip(state))]
async fn get_precipitation(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ClimateError> {
    debug!("Fetching precipitation for the latest year");
    let precipitation = state.climate_service.get_precipitation_last_year().await?;
    info!("Returning precipitation for {} dates", precipitation.len());
    Ok(Json(precipitation))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    tag = "climate",
    responses(
        (status = 200, description = "All station identifiers", body = Vec<String>),
        (status = 500, description = "Database failure")
    )
)]
#[instrument(skip(state))]
async fn get_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ClimateError> {
    debug!("Fetching station list");
    let stations = state.station_service.get_station_ids().await?;

    info!("Retrieved {} stations", stations.len());
    Ok(Json(stations))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    tag = "climate",
    responses(
        (status = 200, description = "Latest year of temperatures for the most active station", body = Vec<TemperatureObservation>),
        (status = 500, description = "Database failure")
    )
)]
#[instrument(skip(state))]
async fn get_most_active_temperatures(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemperatureObservation>>, ClimateError> {
    debug!("Fetching temperatures for the most active station");
    let observations = state.climate_service.get_most_active_temperatures().await?;
    info!("Returning {} temperature observations", observations.len());
    Ok(Json(observations))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/start_date/{start}",
    tag = "climate",
    params(("start" = String, Path, description = "Start date, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Temperature stats from the start date onward", body = TemperatureStats),
        (status = 400, description = "Invalid, out-of-range or missing data", body = ErrorResponse),
        (status = 500, description = "Database failure")
    )
)]
#[instrument(skip(state), fields(start = %start))]
async fn get_stats_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStats>, ClimateError> {
    debug!("Computing temperature stats from {}", start);
    let stats = state.climate_service.get_stats_from(&start).await?;
    info!("Computed temperature stats from {}", start);
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/start_date/end_date/{start}/{end}",
    tag = "climate",
    params(
        ("start" = String, Path, description = "Start date, YYYY-MM-DD"),
        ("end" = String, Path, description = "End date, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Temperature stats between both dates, inclusive", body = TemperatureStats),
        (status = 400, description = "Invalid, out-of-range or missing data", body = ErrorResponse),
        (status = 500, description = "Database failure")
    )
)]
#[instrument(skip(state), fields(start = %start, end = %end))]
async fn get_stats_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStats>, ClimateError> {
    debug!("Computing temperature stats from {} to {}", start, end);
    let stats = state.climate_service.get_stats_between(&start, &end).await?;
    info!("Computed temperature stats from {} to {}", start, end);
    Ok(Json(stats))
}
