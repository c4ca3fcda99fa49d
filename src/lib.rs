//! # Satellite Tracking Service
//!
//! TLE-based satellite tracking with a visibility window search engine.
//!
//! Given a satellite's two-line element set and a ground observer, the crate
//! answers three questions: where is the satellite now (geodetic position),
//! at what azimuth/elevation/range is it seen from a given point, and during
//! which future intervals is it above the horizon. The REST API is served
//! via Axum.
//!
//! ## Architecture
//!
//! - [`orbit`]: Propagation, coordinate transforms, and the visibility
//!   window search (the computational core)
//! - [`db`]: Repository pattern over satellite and observer-location storage
//! - [`clients`]: Upstream TLE catalog client
//! - [`jobs`]: Periodic TLE refresh
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: Environment-driven configuration

pub mod clients;
pub mod config;
pub mod db;
pub mod http;
pub mod jobs;
pub mod orbit;
