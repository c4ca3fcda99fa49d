//! In-memory repository implementation.
//!
//! Stores all records in HashMaps behind a `parking_lot::RwLock`. Fast and
//! deterministic; the default backend for the server and for tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::models::{
    LocationFilter, LocationRecord, NewLocation, NewSatellite, SatelliteFilter, SatelliteRecord,
};
use super::repository::{
    LocationRepository, RepositoryError, RepositoryResult, SatelliteRepository,
};

#[derive(Default)]
struct LocalData {
    satellites: HashMap<i64, SatelliteRecord>,
    locations: HashMap<i64, LocationRecord>,
    next_satellite_id: i64,
    next_location_id: i64,
}

/// In-memory repository; cheap to clone and share.
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SatelliteRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn create_satellite(&self, satellite: NewSatellite) -> RepositoryResult<i64> {
        let mut data = self.data.write();
        data.next_satellite_id += 1;
        let id = data.next_satellite_id;
        data.satellites.insert(
            id,
            SatelliteRecord {
                id,
                name: satellite.name,
                catalog_id: satellite.catalog_id,
                orbit: satellite.orbit,
            },
        );
        Ok(id)
    }

    async fn get_satellite(&self, id: i64) -> RepositoryResult<SatelliteRecord> {
        self.data
            .read()
            .satellites
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("satellite {id}")))
    }

    async fn find_satellites(
        &self,
        filter: SatelliteFilter,
    ) -> RepositoryResult<Vec<SatelliteRecord>> {
        let data = self.data.read();
        let mut matched: Vec<SatelliteRecord> = data
            .satellites
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        matched.sort_by_key(|record| record.id);
        Ok(matched)
    }

    async fn update_satellite(&self, record: SatelliteRecord) -> RepositoryResult<()> {
        let mut data = self.data.write();
        match data.satellites.get_mut(&record.id) {
            // Whole-record replacement: the orbit Arc is swapped in one
            // store, never patched field-by-field.
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(format!(
                "satellite {}",
                record.id
            ))),
        }
    }

    async fn delete_satellite(&self, id: i64) -> RepositoryResult<()> {
        match self.data.write().satellites.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(format!("satellite {id}"))),
        }
    }
}

#[async_trait]
impl LocationRepository for LocalRepository {
    async fn create_location(&self, location: NewLocation) -> RepositoryResult<i64> {
        let mut data = self.data.write();
        data.next_location_id += 1;
        let id = data.next_location_id;
        data.locations.insert(
            id,
            LocationRecord {
                id,
                name: location.name,
                position: location.position,
            },
        );
        Ok(id)
    }

    async fn get_location(&self, id: i64) -> RepositoryResult<LocationRecord> {
        self.data
            .read()
            .locations
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("location {id}")))
    }

    async fn find_locations(
        &self,
        filter: LocationFilter,
    ) -> RepositoryResult<Vec<LocationRecord>> {
        let data = self.data.read();
        let mut matched: Vec<LocationRecord> = data
            .locations
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        matched.sort_by_key(|record| record.id);
        Ok(matched)
    }

    async fn update_location(&self, record: LocationRecord) -> RepositoryResult<()> {
        let mut data = self.data.write();
        match data.locations.get_mut(&record.id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(format!("location {}", record.id))),
        }
    }

    async fn delete_location(&self, id: i64) -> RepositoryResult<()> {
        match self.data.write().locations.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(format!("location {id}"))),
        }
    }
}
