//! Clients for external services.

pub mod catalog;

pub use catalog::{CatalogClient, CatalogEntry, CatalogError};
