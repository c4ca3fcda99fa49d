//! Application state for the HTTP server.

use std::sync::Arc;

use crate::clients::CatalogClient;
use crate::db::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for storage operations
    pub repository: Arc<dyn FullRepository>,
    /// Upstream TLE catalog client
    pub catalog: Arc<CatalogClient>,
}

impl AppState {
    pub fn new(repository: Arc<dyn FullRepository>, catalog: Arc<CatalogClient>) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}
