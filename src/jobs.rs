//! Background jobs.
//!
//! Currently one job: the periodic TLE refresh. Satellites registered with a
//! catalog id get their orbital elements re-fetched from the upstream catalog
//! on a fixed interval, so propagation accuracy does not decay as the stored
//! element sets age.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::clients::CatalogClient;
use crate::db::{FullRepository, SatelliteFilter};
use crate::orbit::OrbitDescriptor;

/// Periodic TLE refresh job.
pub struct TleRefreshJob {
    repository: Arc<dyn FullRepository>,
    catalog: Arc<CatalogClient>,
    interval: Duration,
}

impl TleRefreshJob {
    pub fn new(
        repository: Arc<dyn FullRepository>,
        catalog: Arc<CatalogClient>,
        interval: Duration,
    ) -> Self {
        Self {
            repository,
            catalog,
            interval,
        }
    }

    /// Run the refresh loop until the task is dropped. The first refresh
    /// happens one full interval after startup; elements supplied at
    /// registration are assumed fresh.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.refresh_all().await;
        }
    }

    /// One refresh pass over every satellite that has a catalog id. Failures
    /// are logged per satellite and never abort the pass.
    pub async fn refresh_all(&self) {
        let satellites = match self
            .repository
            .find_satellites(SatelliteFilter {
                has_catalog_id: Some(true),
                ..Default::default()
            })
            .await
        {
            Ok(satellites) => satellites,
            Err(err) => {
                warn!(error = %err, "tle refresh: listing satellites failed");
                return;
            }
        };

        info!(count = satellites.len(), "tle refresh pass started");

        for mut satellite in satellites {
            let Some(catalog_id) = satellite.catalog_id else {
                continue;
            };

            let entry = match self.catalog.fetch_tle(catalog_id).await {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(catalog_id, error = %err, "tle refresh: catalog fetch failed");
                    continue;
                }
            };

            let orbit = match OrbitDescriptor::new(&entry.line1, &entry.line2) {
                Ok(orbit) => orbit,
                Err(err) => {
                    warn!(catalog_id, error = %err, "tle refresh: catalog returned invalid elements");
                    continue;
                }
            };

            satellite.orbit = Arc::new(orbit);
            if let Err(err) = self.repository.update_satellite(satellite).await {
                warn!(catalog_id, error = %err, "tle refresh: store failed");
            }
        }
    }
}
