//! HTTP API module.
//!
//! Axum-based REST surface: request/response DTOs, error mapping, shared
//! state, handlers, and router assembly.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
