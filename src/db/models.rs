//! Entities stored by the repository layer.

use std::sync::Arc;

use crate::orbit::{ObserverCoordinates, OrbitDescriptor};

/// A tracked satellite. The orbit descriptor is shared behind an `Arc` and
/// replaced wholesale on update, so a reader holding a clone always sees a
/// complete, consistent element set.
#[derive(Debug, Clone)]
pub struct SatelliteRecord {
    pub id: i64,
    pub name: String,
    /// NORAD catalog number, when the satellite is tracked upstream. Records
    /// without one are skipped by the refresh job.
    pub catalog_id: Option<u32>,
    pub orbit: Arc<OrbitDescriptor>,
}

/// Fields for creating a satellite; the repository assigns the id.
#[derive(Debug, Clone)]
pub struct NewSatellite {
    pub name: String,
    pub catalog_id: Option<u32>,
    pub orbit: Arc<OrbitDescriptor>,
}

/// A named observer location.
#[derive(Debug, Clone)]
pub struct LocationRecord {
    pub id: i64,
    pub name: String,
    pub position: ObserverCoordinates,
}

#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: String,
    pub position: ObserverCoordinates,
}

/// Conjunctive satellite filter; empty/unset members match everything.
#[derive(Debug, Clone, Default)]
pub struct SatelliteFilter {
    pub ids: Vec<i64>,
    pub catalog_ids: Vec<u32>,
    /// Case-insensitive name substring.
    pub name: Option<String>,
    /// `Some(true)` keeps only records with a catalog id, `Some(false)` only
    /// those without one.
    pub has_catalog_id: Option<bool>,
}

impl SatelliteFilter {
    pub fn matches(&self, record: &SatelliteRecord) -> bool {
        if !self.ids.is_empty() && !self.ids.contains(&record.id) {
            return false;
        }
        if !self.catalog_ids.is_empty()
            && !record
                .catalog_id
                .is_some_and(|id| self.catalog_ids.contains(&id))
        {
            return false;
        }
        if let Some(ref needle) = self.name {
            if !record.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(required) = self.has_catalog_id {
            if record.catalog_id.is_some() != required {
                return false;
            }
        }
        true
    }
}

/// Location filter; `name` is a case-insensitive substring.
#[derive(Debug, Clone, Default)]
pub struct LocationFilter {
    pub name: Option<String>,
}

impl LocationFilter {
    pub fn matches(&self, record: &LocationRecord) -> bool {
        match self.name {
            Some(ref needle) => record.name.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        }
    }
}
