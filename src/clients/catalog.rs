//! HTTP client for the upstream TLE catalog.
//!
//! The catalog serves current orbital elements per NORAD id at
//! `GET {base}/tle/{catalogId}`. Used when registering a satellite by catalog
//! number and by the periodic refresh job.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Error type for catalog lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog returned status {0} for satellite {1}")]
    UnexpectedStatus(reqwest::StatusCode, u32),
}

/// One catalog record: the satellite's current two-line element set and the
/// epoch it was published at.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub satellite_id: u32,
    pub date: DateTime<Utc>,
    pub name: String,
    pub line1: String,
    pub line2: String,
}

/// Catalog API client. Cheap to clone; the underlying connection pool is
/// shared.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Build a client against `base_url`, e.g. `https://api.r4uab.ru`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Fetch the current element set for `catalog_id`.
    pub async fn fetch_tle(&self, catalog_id: u32) -> Result<CatalogEntry, CatalogError> {
        let url = format!("{}/tle/{}", self.base_url, catalog_id);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus(status, catalog_id));
        }

        Ok(response.json().await?)
    }
}
