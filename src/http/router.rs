//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing) and
//! returns the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Computations
        .route("/position", post(handlers::position))
        .route("/look-angles", post(handlers::look_angles))
        .route("/passes", post(handlers::passes))
        // Satellite CRUD
        .route("/satellites", post(handlers::create_satellite))
        .route("/satellites/search", post(handlers::search_satellites))
        .route("/satellites/{id}", get(handlers::get_satellite))
        .route("/satellites/{id}", patch(handlers::update_satellite))
        .route("/satellites/{id}", delete(handlers::delete_satellite))
        // Location CRUD
        .route("/locations", post(handlers::create_location))
        .route("/locations/search", post(handlers::search_locations))
        .route("/locations/{id}", get(handlers::get_location))
        .route("/locations/{id}", patch(handlers::update_location))
        .route("/locations/{id}", delete(handlers::delete_location));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
