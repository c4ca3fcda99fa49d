//! Repository traits for satellite and location storage.
//!
//! The traits abstract the storage backend so it can be swapped via
//! dependency injection; the in-memory implementation in [`super::local`] is
//! the default backend, and a relational one can live behind the same seam.
//! Implementations must be `Send + Sync`.

use async_trait::async_trait;

use super::models::{
    LocationFilter, LocationRecord, NewLocation, NewSatellite, SatelliteFilter, SatelliteRecord,
};

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("data validation error: {0}")]
    ValidationError(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

/// Satellite storage operations.
#[async_trait]
pub trait SatelliteRepository: Send + Sync {
    /// Check that the backend is reachable and healthy.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a new satellite, returning its assigned id.
    async fn create_satellite(&self, satellite: NewSatellite) -> RepositoryResult<i64>;

    /// Fetch one satellite by id.
    async fn get_satellite(&self, id: i64) -> RepositoryResult<SatelliteRecord>;

    /// List satellites matching the filter, in id order.
    async fn find_satellites(
        &self,
        filter: SatelliteFilter,
    ) -> RepositoryResult<Vec<SatelliteRecord>>;

    /// Replace a satellite record wholesale. The record's orbit descriptor
    /// is swapped as a unit; concurrent readers keep the snapshot they
    /// already hold.
    async fn update_satellite(&self, record: SatelliteRecord) -> RepositoryResult<()>;

    /// Delete a satellite by id.
    async fn delete_satellite(&self, id: i64) -> RepositoryResult<()>;
}

/// Observer location storage operations.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn create_location(&self, location: NewLocation) -> RepositoryResult<i64>;

    async fn get_location(&self, id: i64) -> RepositoryResult<LocationRecord>;

    async fn find_locations(&self, filter: LocationFilter)
        -> RepositoryResult<Vec<LocationRecord>>;

    async fn update_location(&self, record: LocationRecord) -> RepositoryResult<()>;

    async fn delete_location(&self, id: i64) -> RepositoryResult<()>;
}

/// Convenience super-trait for backends implementing both repositories.
pub trait FullRepository: SatelliteRepository + LocationRepository {}

impl<T: SatelliteRepository + LocationRepository> FullRepository for T {}
