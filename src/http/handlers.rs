//! HTTP handlers for the REST API.
//!
//! Handlers validate input, delegate to the repository and the orbit engine,
//! and map domain errors to HTTP statuses. The window search is CPU-bound
//! and runs under `spawn_blocking` so it never stalls the runtime.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};

use super::dto::{
    CreateLocationRequest, CreateLocationResponse, CreateSatelliteRequest,
    CreateSatelliteResponse, HealthResponse, LocationDto, LookAnglesRequest, PassesRequest,
    PassesResponse, PositionRequest, PositionResponse, SatelliteDto, SearchLocationsRequest,
    SearchLocationsResponse, SearchSatellitesRequest, SearchSatellitesResponse,
    UpdateSatelliteRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::{
    LocationFilter, LocationRecord, NewLocation, NewSatellite, SatelliteFilter, SatelliteRecord,
};
use crate::orbit::{self, LookAngles, OrbitDescriptor, SearchParameters};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn resolve_timestamp(timestamp: Option<i64>) -> Result<DateTime<Utc>, AppError> {
    match timestamp {
        Some(secs) => DateTime::<Utc>::from_timestamp(secs, 0)
            .ok_or_else(|| AppError::BadRequest(format!("timestamp {secs} is out of range"))),
        None => Ok(Utc::now()),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Computations
// =============================================================================

/// POST /v1/position
///
/// Geodetic sub-satellite point at the requested instant (default: now).
pub async fn position(
    State(state): State<AppState>,
    Json(request): Json<PositionRequest>,
) -> HandlerResult<PositionResponse> {
    let at = resolve_timestamp(request.timestamp)?;
    let satellite = state.repository.get_satellite(request.satellite_id).await?;

    let position = satellite.orbit.geodetic_position(at)?;
    Ok(Json(position.into()))
}

/// POST /v1/look-angles
///
/// Azimuth/elevation/range from a stored observer location.
pub async fn look_angles(
    State(state): State<AppState>,
    Json(request): Json<LookAnglesRequest>,
) -> HandlerResult<LookAngles> {
    let at = resolve_timestamp(request.timestamp)?;
    let satellite = state.repository.get_satellite(request.satellite_id).await?;
    let location = state
        .repository
        .get_location(request.observer_location_id)
        .await?;

    let eci = satellite.orbit.propagate(at)?;
    Ok(Json(orbit::look_angles(&eci, &location.position, at)))
}

/// POST /v1/passes
///
/// Upcoming visibility windows for an ad-hoc observer position. Searching a
/// week of orbit at second precision is CPU work, so it runs on the blocking
/// pool.
pub async fn passes(
    State(state): State<AppState>,
    Json(request): Json<PassesRequest>,
) -> HandlerResult<PassesResponse> {
    let start = resolve_timestamp(request.timestamp)?;
    let satellite = state.repository.get_satellite(request.satellite_id).await?;

    let orbit = Arc::clone(&satellite.orbit);
    let observer = request.observer();
    let count = request.count_of_time_ranges.unwrap_or(1);
    let params = SearchParameters::default();

    let windows = tokio::task::spawn_blocking(move || {
        orbit::find_windows(&orbit, &observer, start, count, &params)
    })
    .await
    .map_err(|e| AppError::Internal(format!("task join error: {}", e)))??;

    Ok(Json(PassesResponse {
        time_ranges: windows.into_iter().map(Into::into).collect(),
    }))
}

// =============================================================================
// Satellite CRUD
// =============================================================================

/// POST /v1/satellites
///
/// Register a satellite from explicit TLE lines, or by catalog id (the
/// current element set is fetched from the upstream catalog).
pub async fn create_satellite(
    State(state): State<AppState>,
    Json(request): Json<CreateSatelliteRequest>,
) -> HandlerResult<CreateSatelliteResponse> {
    let new_satellite = match (request.line1, request.line2, request.catalog_id) {
        (Some(line1), Some(line2), catalog_id) => {
            let orbit = OrbitDescriptor::new(&line1, &line2)?;
            let name = request
                .name
                .unwrap_or_else(|| format!("NORAD {}", orbit.norad_id()));
            NewSatellite {
                name,
                catalog_id,
                orbit: Arc::new(orbit),
            }
        }
        (None, None, Some(catalog_id)) => {
            let entry = state.catalog.fetch_tle(catalog_id).await?;
            let orbit = OrbitDescriptor::new(&entry.line1, &entry.line2)?;
            NewSatellite {
                name: request.name.unwrap_or(entry.name),
                catalog_id: Some(catalog_id),
                orbit: Arc::new(orbit),
            }
        }
        _ => {
            return Err(AppError::BadRequest(
                "either both TLE lines or a catalogId must be provided".to_string(),
            ))
        }
    };

    let satellite_id = state.repository.create_satellite(new_satellite).await?;
    Ok(Json(CreateSatelliteResponse { satellite_id }))
}

/// GET /v1/satellites/{id}
pub async fn get_satellite(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<SatelliteDto> {
    let record = state.repository.get_satellite(id).await?;
    Ok(Json(record.into()))
}

/// PATCH /v1/satellites/{id}
///
/// Replace the record wholesale; the new element set must parse before
/// anything is stored.
pub async fn update_satellite(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateSatelliteRequest>,
) -> HandlerResult<SatelliteDto> {
    let orbit = OrbitDescriptor::new(&request.line1, &request.line2)?;
    let record = SatelliteRecord {
        id,
        name: request.name,
        catalog_id: request.catalog_id,
        orbit: Arc::new(orbit),
    };

    state.repository.update_satellite(record.clone()).await?;
    Ok(Json(record.into()))
}

/// DELETE /v1/satellites/{id}
pub async fn delete_satellite(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<axum::http::StatusCode, AppError> {
    state.repository.delete_satellite(id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// POST /v1/satellites/search
pub async fn search_satellites(
    State(state): State<AppState>,
    Json(request): Json<SearchSatellitesRequest>,
) -> HandlerResult<SearchSatellitesResponse> {
    let filter = SatelliteFilter {
        ids: request.ids,
        catalog_ids: request.catalog_ids,
        name: request.name,
        has_catalog_id: None,
    };

    let satellites: Vec<SatelliteDto> = state
        .repository
        .find_satellites(filter)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let total = satellites.len();

    Ok(Json(SearchSatellitesResponse { satellites, total }))
}

// =============================================================================
// Location CRUD
// =============================================================================

/// POST /v1/locations
pub async fn create_location(
    State(state): State<AppState>,
    Json(request): Json<CreateLocationRequest>,
) -> HandlerResult<CreateLocationResponse> {
    let position = request.position();
    let observer_location_id = state
        .repository
        .create_location(NewLocation {
            name: request.name,
            position,
        })
        .await?;

    Ok(Json(CreateLocationResponse {
        observer_location_id,
    }))
}

/// GET /v1/locations/{id}
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<LocationDto> {
    let record = state.repository.get_location(id).await?;
    Ok(Json(record.into()))
}

/// PATCH /v1/locations/{id}
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CreateLocationRequest>,
) -> HandlerResult<LocationDto> {
    let record = LocationRecord {
        id,
        name: request.name.clone(),
        position: request.position(),
    };

    state.repository.update_location(record.clone()).await?;
    Ok(Json(record.into()))
}

/// DELETE /v1/locations/{id}
pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<axum::http::StatusCode, AppError> {
    state.repository.delete_location(id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// POST /v1/locations/search
pub async fn search_locations(
    State(state): State<AppState>,
    Json(request): Json<SearchLocationsRequest>,
) -> HandlerResult<SearchLocationsResponse> {
    let locations: Vec<LocationDto> = state
        .repository
        .find_locations(LocationFilter { name: request.name })
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let total = locations.len();

    Ok(Json(SearchLocationsResponse { locations, total }))
}
