//! Request and response types for the REST API.
//!
//! Field names follow the JSON convention of the public API (camelCase);
//! `timestamp` fields are unix seconds and default to "now" when absent.

use serde::{Deserialize, Serialize};

use crate::db::{LocationRecord, SatelliteRecord};
use crate::orbit::{GeodeticPosition, ObserverCoordinates, TimeRange};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// POST /v1/position
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRequest {
    pub satellite_id: i64,
    /// Unix seconds; absent means now.
    pub timestamp: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResponse {
    pub lat: f64,
    pub lon: f64,
    /// Kilometers above the ellipsoid.
    pub alt: f64,
    pub gmaps_link: String,
}

impl From<GeodeticPosition> for PositionResponse {
    fn from(pos: GeodeticPosition) -> Self {
        Self {
            lat: pos.latitude,
            lon: pos.longitude,
            alt: pos.altitude,
            gmaps_link: pos.maps_link(),
        }
    }
}

/// POST /v1/look-angles
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookAnglesRequest {
    pub satellite_id: i64,
    pub observer_location_id: i64,
    pub timestamp: Option<i64>,
}

/// POST /v1/passes
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassesRequest {
    pub satellite_id: i64,
    pub lon: f64,
    pub lat: f64,
    /// Kilometers above the ellipsoid.
    pub alt: f64,
    pub timestamp: Option<i64>,
    /// Number of windows to search for; defaults to 1. Zero yields an empty
    /// list.
    pub count_of_time_ranges: Option<usize>,
}

impl PassesRequest {
    pub fn observer(&self) -> ObserverCoordinates {
        ObserverCoordinates {
            lon: self.lon,
            lat: self.lat,
            alt: self.alt,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRangeDto {
    pub from: chrono::DateTime<chrono::Utc>,
    pub to: chrono::DateTime<chrono::Utc>,
    pub duration_seconds: i64,
}

impl From<TimeRange> for TimeRangeDto {
    fn from(range: TimeRange) -> Self {
        Self {
            from: range.from,
            to: range.to,
            duration_seconds: range.duration.num_seconds(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassesResponse {
    pub time_ranges: Vec<TimeRangeDto>,
}

/// POST /v1/satellites: either both TLE lines, or a `catalogId` to fetch
/// them from the upstream catalog.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSatelliteRequest {
    pub name: Option<String>,
    pub catalog_id: Option<u32>,
    pub line1: Option<String>,
    pub line2: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSatelliteResponse {
    pub satellite_id: i64,
}

/// PATCH /v1/satellites/{id}: the record is replaced wholesale, so all
/// descriptive fields are required.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSatelliteRequest {
    pub name: String,
    pub catalog_id: Option<u32>,
    pub line1: String,
    pub line2: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteDto {
    pub satellite_id: i64,
    pub name: String,
    pub catalog_id: Option<u32>,
    pub line1: String,
    pub line2: String,
}

impl From<SatelliteRecord> for SatelliteDto {
    fn from(record: SatelliteRecord) -> Self {
        Self {
            satellite_id: record.id,
            name: record.name,
            catalog_id: record.catalog_id,
            line1: record.orbit.line1().to_string(),
            line2: record.orbit.line2().to_string(),
        }
    }
}

/// POST /v1/satellites/search
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSatellitesRequest {
    #[serde(default)]
    pub ids: Vec<i64>,
    #[serde(default)]
    pub catalog_ids: Vec<u32>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchSatellitesResponse {
    pub satellites: Vec<SatelliteDto>,
    pub total: usize,
}

/// POST /v1/locations
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    pub alt: f64,
}

impl CreateLocationRequest {
    pub fn position(&self) -> ObserverCoordinates {
        ObserverCoordinates {
            lon: self.lon,
            lat: self.lat,
            alt: self.alt,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationResponse {
    pub observer_location_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub observer_location_id: i64,
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    pub alt: f64,
}

impl From<LocationRecord> for LocationDto {
    fn from(record: LocationRecord) -> Self {
        Self {
            observer_location_id: record.id,
            name: record.name,
            lon: record.position.lon,
            lat: record.position.lat,
            alt: record.position.alt,
        }
    }
}

/// POST /v1/locations/search
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchLocationsRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchLocationsResponse {
    pub locations: Vec<LocationDto>,
    pub total: usize,
}
