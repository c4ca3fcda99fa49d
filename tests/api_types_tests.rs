//! Wire-format tests for the API DTOs.
//!
//! The JSON field names are a compatibility contract with existing clients;
//! these tests pin them down.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

use sattrack::clients::CatalogClient;
use sattrack::db::{FullRepository, LocalRepository, SatelliteRecord};
use sattrack::http::dto::{
    PassesRequest, PositionRequest, PositionResponse, SatelliteDto, SearchSatellitesRequest,
    TimeRangeDto,
};
use sattrack::http::{create_router, AppState};
use sattrack::orbit::{GeodeticPosition, OrbitDescriptor, TimeRange};

const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

#[test]
fn position_request_uses_camel_case_names() {
    let request: PositionRequest =
        serde_json::from_value(json!({"satelliteId": 3, "timestamp": 1727978254})).unwrap();
    assert_eq!(request.satellite_id, 3);
    assert_eq!(request.timestamp, Some(1727978254));

    // timestamp is optional and defaults to "now" in the handler
    let request: PositionRequest = serde_json::from_value(json!({"satelliteId": 3})).unwrap();
    assert_eq!(request.timestamp, None);
}

#[test]
fn passes_request_accepts_observer_and_count() {
    let request: PassesRequest = serde_json::from_value(json!({
        "satelliteId": 3,
        "lon": 37.51934842793972,
        "lat": 55.43025412211996,
        "alt": 0.151,
        "countOfTimeRanges": 4
    }))
    .unwrap();

    assert_eq!(request.count_of_time_ranges, Some(4));
    let observer = request.observer();
    assert_eq!(observer.lat, 55.43025412211996);
}

#[test]
fn position_response_includes_maps_link() {
    let position = GeodeticPosition {
        latitude: 55.43,
        longitude: 37.52,
        altitude: 415.2,
    };
    let response: PositionResponse = position.into();
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["lat"], 55.43);
    assert_eq!(value["lon"], 37.52);
    let link = value["gmapsLink"].as_str().unwrap();
    assert!(link.starts_with("https://www.google.com/maps"), "{link}");
}

#[test]
fn time_range_serializes_with_duration_seconds() {
    let from = Utc.with_ymd_and_hms(2008, 9, 20, 13, 0, 0).unwrap();
    let to = from + Duration::seconds(540);
    let dto: TimeRangeDto = TimeRange {
        from,
        to,
        duration: to - from,
    }
    .into();

    let value = serde_json::to_value(&dto).unwrap();
    assert_eq!(value["durationSeconds"], 540);
    assert!(value["from"].as_str().unwrap().starts_with("2008-09-20T13:00:00"));
}

#[test]
fn satellite_dto_carries_the_stored_lines() {
    let record = SatelliteRecord {
        id: 7,
        name: "ISS (ZARYA)".to_string(),
        catalog_id: Some(25544),
        orbit: Arc::new(OrbitDescriptor::new(ISS_LINE1, ISS_LINE2).unwrap()),
    };

    let dto: SatelliteDto = record.into();
    let value = serde_json::to_value(&dto).unwrap();
    assert_eq!(value["satelliteId"], 7);
    assert_eq!(value["catalogId"], 25544);
    assert_eq!(value["line1"], ISS_LINE1);
}

#[test]
fn search_request_fields_default_to_empty() {
    let request: SearchSatellitesRequest = serde_json::from_value(json!({})).unwrap();
    assert!(request.ids.is_empty());
    assert!(request.catalog_ids.is_empty());
    assert!(request.name.is_none());
}

#[test]
fn router_builds_with_local_repository() {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn FullRepository>;
    let catalog = Arc::new(CatalogClient::new("http://localhost:1").unwrap());
    let _router = create_router(AppState::new(repo, catalog));
}
