//! Orbital mechanics layer: element sets, propagation, and the visibility
//! search engine.
//!
//! The SGP4 model itself comes from the `sgp4` crate and is treated as a
//! numerical oracle; this module owns the descriptor lifecycle (parse once,
//! replace wholesale) and everything built on top of the raw ECI output:
//! geodetic conversion, look angles, and rise/set window search.

pub mod geodetic;
pub mod topocentric;
pub mod visibility;

pub use geodetic::{eci_to_geodetic, GeodeticPosition};
pub use topocentric::{look_angles, LookAngles, ObserverCoordinates};
pub use visibility::{
    find_crossing, find_windows, CrossingDirection, CrossingOutcome, SearchParameters, TimeRange,
    VisibilityError,
};

use chrono::{DateTime, Utc};

/// Error for element-set construction. A descriptor that parses successfully
/// never fails for syntactic reasons later.
#[derive(Debug, thiserror::Error)]
pub enum OrbitError {
    #[error("invalid two-line element set: {0}")]
    InvalidTle(#[from] sgp4::TleError),
    #[error("invalid orbital elements: {0}")]
    InvalidElements(#[from] sgp4::ElementsError),
}

/// Error for a propagation call. Aborts the computation that requested it;
/// retrying the same instant would fail the same way.
#[derive(Debug, thiserror::Error)]
pub enum PropagationError {
    #[error("propagation model diverged: {0}")]
    Model(#[from] sgp4::Error),
}

/// Position in the Earth-Centered Inertial frame, kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EciPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// An immutable, validated two-line element set together with its initialized
/// SGP4 model.
///
/// Both lines are checked at construction; a malformed pair is rejected here
/// and never surfaces mid-search. A descriptor is never mutated: when the
/// catalog refresh produces new lines, the whole descriptor is replaced (the
/// repository stores it behind an `Arc`, so in-flight searches keep their
/// snapshot).
pub struct OrbitDescriptor {
    line1: String,
    line2: String,
    elements: sgp4::Elements,
    constants: sgp4::Constants,
}

impl std::fmt::Debug for OrbitDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrbitDescriptor")
            .field("norad_id", &self.elements.norad_id)
            .field("epoch", &self.elements.datetime)
            .finish()
    }
}

impl OrbitDescriptor {
    /// Parse and validate a TLE pair, initializing the propagation model.
    pub fn new(line1: &str, line2: &str) -> Result<Self, OrbitError> {
        let elements = sgp4::Elements::from_tle(None, line1.as_bytes(), line2.as_bytes())?;
        let constants = sgp4::Constants::from_elements(&elements)?;

        Ok(Self {
            line1: line1.to_owned(),
            line2: line2.to_owned(),
            elements,
            constants,
        })
    }

    pub fn line1(&self) -> &str {
        &self.line1
    }

    pub fn line2(&self) -> &str {
        &self.line2
    }

    /// NORAD catalog number encoded in the element set.
    pub fn norad_id(&self) -> u64 {
        self.elements.norad_id
    }

    /// Epoch of the element set, UTC.
    pub fn epoch(&self) -> chrono::NaiveDateTime {
        self.elements.datetime
    }

    /// Propagate to `at` and return the inertial position in kilometers.
    ///
    /// Deterministic: the same descriptor and instant always yield the same
    /// vector.
    pub fn propagate(&self, at: DateTime<Utc>) -> Result<EciPosition, PropagationError> {
        let since_epoch = at.naive_utc() - self.elements.datetime;
        let minutes = since_epoch.num_milliseconds() as f64 / 60_000.0;
        let prediction = self.constants.propagate(sgp4::MinutesSinceEpoch(minutes))?;

        Ok(EciPosition {
            x: prediction.position[0],
            y: prediction.position[1],
            z: prediction.position[2],
        })
    }

    /// Current sub-satellite point: propagate and convert to geodetic
    /// coordinates in one step.
    pub fn geodetic_position(
        &self,
        at: DateTime<Utc>,
    ) -> Result<GeodeticPosition, PropagationError> {
        let eci = self.propagate(at)?;
        Ok(eci_to_geodetic(&eci, at))
    }
}
