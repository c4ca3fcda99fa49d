//! Storage layer: entities, repository traits, and the in-memory backend.

pub mod local;
pub mod models;
pub mod repository;

pub use local::LocalRepository;
pub use models::{
    LocationFilter, LocationRecord, NewLocation, NewSatellite, SatelliteFilter, SatelliteRecord,
};
pub use repository::{
    FullRepository, LocationRepository, RepositoryError, RepositoryResult, SatelliteRepository,
};
