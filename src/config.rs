//! Server configuration, read from the environment.

use std::time::Duration;

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind, default `0.0.0.0`.
    pub host: String,
    /// TCP port, default `8080`.
    pub port: u16,
    /// Base URL of the upstream TLE catalog.
    pub catalog_url: String,
    /// Interval between TLE refresh passes.
    pub tle_refresh_interval: Duration,
}

impl Config {
    /// Read configuration from `HOST`, `PORT`, `CATALOG_URL`, and
    /// `TLE_REFRESH_HOURS`, falling back to defaults for unset variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a number, got {raw:?}"))?,
            Err(_) => 8080,
        };

        let catalog_url =
            std::env::var("CATALOG_URL").unwrap_or_else(|_| "https://api.r4uab.ru".to_string());

        let refresh_hours: u64 = match std::env::var("TLE_REFRESH_HOURS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("TLE_REFRESH_HOURS must be a number, got {raw:?}"))?,
            Err(_) => 24,
        };

        Ok(Self {
            host,
            port,
            catalog_url,
            tle_refresh_interval: Duration::from_secs(refresh_hours * 3600),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
