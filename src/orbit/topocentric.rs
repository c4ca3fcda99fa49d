//! Topocentric transform: satellite ECI position → look angles for a ground
//! observer.
//!
//! The observer's geodetic coordinates are lifted into the inertial frame at
//! the requested instant (local sidereal time alignment), and the range
//! vector is rotated into the south/east/zenith frame to produce azimuth,
//! elevation, and slant range. This is the sole signal source for the
//! visibility search and is called at sub-second cadence during bisection,
//! so it performs no I/O and allocates nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::geodetic::gmst;
use super::EciPosition;

/// WGS-72/84-style flattening used for the observer position; matches the
/// geopotential the propagation model is initialized with.
const FLATTENING: f64 = 1.0 / 298.257223563;

/// Observer position on the ground: degrees for longitude/latitude,
/// kilometers above the ellipsoid for altitude. Caller-supplied, not
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverCoordinates {
    pub lon: f64,
    pub lat: f64,
    pub alt: f64,
}

/// Azimuth and elevation in degrees, slant range in kilometers. Elevation is
/// signed: negative means below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LookAngles {
    pub az: f64,
    pub el: f64,
    pub range: f64,
}

/// Observer position in the inertial frame at `theta` (local sidereal time).
fn observer_eci(observer: &ObserverCoordinates, theta: f64) -> [f64; 3] {
    let lat = observer.lat.to_radians();

    let c = 1.0 / (1.0 + FLATTENING * (FLATTENING - 2.0) * lat.sin().powi(2)).sqrt();
    let s = (1.0 - FLATTENING).powi(2) * c;
    let achcp = (sgp4::WGS84.ae * c + observer.alt) * lat.cos();

    [
        achcp * theta.cos(),
        achcp * theta.sin(),
        (sgp4::WGS84.ae * s + observer.alt) * lat.sin(),
    ]
}

/// Compute look angles from `observer` to a satellite at `sat` for the
/// instant `at`.
pub fn look_angles(
    sat: &EciPosition,
    observer: &ObserverCoordinates,
    at: DateTime<Utc>,
) -> LookAngles {
    // Local mean sidereal time for the observer's meridian.
    let theta = (gmst(at) + observer.lon.to_radians()).rem_euclid(2.0 * PI);
    let obs = observer_eci(observer, theta);

    let rx = sat.x - obs[0];
    let ry = sat.y - obs[1];
    let rz = sat.z - obs[2];
    let range = (rx * rx + ry * ry + rz * rz).sqrt();

    let lat = observer.lat.to_radians();
    let (sin_lat, cos_lat) = (lat.sin(), lat.cos());
    let (sin_theta, cos_theta) = (theta.sin(), theta.cos());

    // Rotate the range vector into the topocentric south/east/zenith frame.
    let top_s = sin_lat * cos_theta * rx + sin_lat * sin_theta * ry - cos_lat * rz;
    let top_e = -sin_theta * rx + cos_theta * ry;
    let top_z = cos_lat * cos_theta * rx + cos_lat * sin_theta * ry + sin_lat * rz;

    let mut az = (-top_e / top_s).atan();
    if top_s > 0.0 {
        az += PI;
    }
    if az < 0.0 {
        az += 2.0 * PI;
    }

    let el = (top_z / range).asin();

    LookAngles {
        az: az.to_degrees(),
        el: el.to_degrees(),
        range,
    }
}
