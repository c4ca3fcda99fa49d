//! Inertial-to-geodetic conversion.
//!
//! Rotates an ECI position into the Earth-fixed frame using Greenwich mean
//! sidereal time, then solves iteratively for the WGS-84 geodetic latitude.
//! The conversion is total: every valid inertial position maps to a geodetic
//! position.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EciPosition;

/// WGS-84 flattening.
const FLATTENING: f64 = 1.0 / 298.257223563;

/// Sub-satellite point on the WGS-84 ellipsoid. Latitude and longitude in
/// degrees, altitude in kilometers above the ellipsoid.
///
/// Longitude is always wrapped into `[-180, 180)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl GeodeticPosition {
    /// Hemisphere suffix for the latitude.
    pub fn lat_direction(&self) -> &'static str {
        if self.latitude >= 0.0 {
            "N"
        } else {
            "S"
        }
    }

    /// Hemisphere suffix for the longitude.
    pub fn lon_direction(&self) -> &'static str {
        if self.longitude >= 0.0 {
            "E"
        } else {
            "W"
        }
    }

    /// Link to the sub-satellite point on Google Maps.
    pub fn maps_link(&self) -> String {
        format!(
            "https://www.google.com/maps/place/{:.6}+{:.6}",
            self.latitude, self.longitude
        )
    }
}

impl std::fmt::Display for GeodeticPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.6}°{} {:.6}°{}",
            self.latitude.abs(),
            self.lat_direction(),
            self.longitude.abs(),
            self.lon_direction(),
        )
    }
}

/// Greenwich mean sidereal time at `at`, radians.
pub(crate) fn gmst(at: DateTime<Utc>) -> f64 {
    sgp4::iau_epoch_to_sidereal_time(sgp4::julian_years_since_j2000(&at.naive_utc()))
}

/// Wrap an angle in degrees into `[-180, 180)`.
pub fn wrap_degrees(angle: f64) -> f64 {
    (angle + 540.0).rem_euclid(360.0) - 180.0
}

fn wrap_radians_pi(angle: f64) -> f64 {
    use std::f64::consts::PI;
    (angle + PI).rem_euclid(2.0 * PI) - PI
}

/// Convert an ECI position to geodetic coordinates for the same instant.
pub fn eci_to_geodetic(pos: &EciPosition, at: DateTime<Utc>) -> GeodeticPosition {
    let sidereal = gmst(at);

    let theta = pos.y.atan2(pos.x);
    let r = (pos.x * pos.x + pos.y * pos.y).sqrt();
    let e2 = FLATTENING * (2.0 - FLATTENING);

    let lon = wrap_radians_pi(theta - sidereal);
    let mut lat = pos.z.atan2(r);
    let mut c = 1.0;

    // Fixed-point iteration for geodetic latitude; converges in a handful of
    // steps for any bound orbit.
    for _ in 0..10 {
        let phi = lat;
        c = 1.0 / (1.0 - e2 * phi.sin() * phi.sin()).sqrt();
        lat = (pos.z + sgp4::WGS84.ae * c * e2 * phi.sin()).atan2(r);
        if (lat - phi).abs() < 1e-10 {
            break;
        }
    }

    let altitude = r / lat.cos() - sgp4::WGS84.ae * c;

    // The solver keeps latitude in [-90, 90], where the canonical wrap is the
    // identity, so a single wrap covers both components.
    GeodeticPosition {
        latitude: wrap_degrees(lat.to_degrees()),
        longitude: wrap_degrees(lon.to_degrees()),
        altitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    #[test]
    fn wrap_canonical_range() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(180.0), -180.0);
        assert_eq!(wrap_degrees(-180.0), -180.0);
        assert_eq!(wrap_degrees(190.0), -170.0);
        assert_eq!(wrap_degrees(540.0), -180.0);
        assert_eq!(wrap_degrees(-350.0), 10.0);
    }

    proptest! {
        #[test]
        fn wrap_always_lands_in_range(angle in -72000.0f64..72000.0) {
            let wrapped = wrap_degrees(angle);
            prop_assert!((-180.0..180.0).contains(&wrapped));
        }
    }

    #[test]
    fn equatorial_point_at_zero_sidereal_offset() {
        let at = Utc.with_ymd_and_hms(2008, 9, 20, 12, 25, 40).unwrap();
        let theta = gmst(at);
        // Place the satellite on the equatorial plane directly over the
        // Greenwich meridian at 400 km.
        let r = sgp4::WGS84.ae + 400.0;
        let pos = EciPosition {
            x: r * theta.cos(),
            y: r * theta.sin(),
            z: 0.0,
        };

        let geo = eci_to_geodetic(&pos, at);
        assert!(geo.latitude.abs() < 1e-6, "lat = {}", geo.latitude);
        assert!(geo.longitude.abs() < 1e-6, "lon = {}", geo.longitude);
        assert!((geo.altitude - 400.0).abs() < 0.5, "alt = {}", geo.altitude);
    }

    #[test]
    fn polar_point_has_latitude_ninety() {
        let at = Utc.with_ymd_and_hms(2008, 9, 20, 12, 25, 40).unwrap();
        let pos = EciPosition {
            x: 0.0,
            y: 0.0,
            z: 7000.0,
        };
        let geo = eci_to_geodetic(&pos, at);
        assert!(geo.latitude > 89.9, "lat = {}", geo.latitude);
    }

    #[test]
    fn display_uses_hemisphere_suffixes() {
        let geo = GeodeticPosition {
            latitude: 55.5,
            longitude: -37.25,
            altitude: 415.0,
        };
        let s = geo.to_string();
        assert!(s.contains("N") && s.contains("W"), "{s}");
    }
}
