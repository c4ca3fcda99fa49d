//! Visibility window search engine.
//!
//! Turns the time-varying elevation signal of one (orbit, observer) pair
//! into discrete rise/set events and aggregates them into visibility
//! windows. The search has two phases: a coarse forward scan that brackets a
//! horizon crossing between two consecutive samples, then bisection of the
//! bracket down to the requested time precision. Running out of search
//! budget without a crossing is a normal outcome, not an error.
//!
//! The elevation signal is injected as a closure, so the search logic is
//! independent of the propagation model and can be exercised with synthetic
//! signals in tests.

use chrono::{DateTime, Duration, Utc};

use super::topocentric::{look_angles, ObserverCoordinates};
use super::{OrbitDescriptor, PropagationError};

/// Tuning knobs for a window search.
///
/// Invariant: `precision < coarse_step < max_search_duration`. A coarse step
/// wider than the shortest pass of interest will skip passes; the defaults
/// (5 min / 1 s / 7 days) are sized for low-Earth orbits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParameters {
    /// Step of the bracketing scan.
    pub coarse_step: Duration,
    /// Width at which bisection stops; also the minimum reportable window
    /// duration.
    pub precision: Duration,
    /// Budget for one crossing search, measured from its start instant.
    pub max_search_duration: Duration,
    /// Horizon threshold in degrees.
    pub min_elevation: f64,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            coarse_step: Duration::minutes(5),
            precision: Duration::seconds(1),
            max_search_duration: Duration::days(7),
            min_elevation: 0.0,
        }
    }
}

impl SearchParameters {
    pub fn validate(&self) -> Result<(), VisibilityError> {
        if self.precision <= Duration::zero() {
            return Err(VisibilityError::InvalidParameters(
                "precision must be positive".into(),
            ));
        }
        if self.coarse_step <= self.precision {
            return Err(VisibilityError::InvalidParameters(
                "coarse_step must exceed precision".into(),
            ));
        }
        if self.max_search_duration <= self.coarse_step {
            return Err(VisibilityError::InvalidParameters(
                "max_search_duration must exceed coarse_step".into(),
            ));
        }
        Ok(())
    }
}

/// Which horizon transition to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingDirection {
    /// Below threshold → at or above.
    Rise,
    /// At or above threshold → below.
    Set,
}

impl CrossingDirection {
    /// Crossing predicate over two consecutive samples.
    fn crosses(self, prev: f64, current: f64, threshold: f64) -> bool {
        match self {
            Self::Rise => prev < threshold && current >= threshold,
            Self::Set => prev >= threshold && current < threshold,
        }
    }

    /// During bisection: does the midpoint sample leave the crossing in the
    /// upper half of the bracket?
    fn crossing_in_upper_half(self, mid: f64, threshold: f64) -> bool {
        match self {
            Self::Rise => mid < threshold,
            Self::Set => mid >= threshold,
        }
    }
}

/// Result of one crossing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingOutcome {
    /// The crossing instant, refined to within `precision` (lower edge of
    /// the final bracket).
    Converged(DateTime<Utc>),
    /// No crossing inside the search budget. Terminal and benign.
    Exhausted,
}

/// One visibility window: the satellite is above the threshold for the whole
/// of `[from, to]`, with `from < to` and `to - from > precision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub duration: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum VisibilityError {
    #[error("invalid search parameters: {0}")]
    InvalidParameters(String),
    #[error(transparent)]
    Propagation(#[from] PropagationError),
}

fn elevation_at(
    orbit: &OrbitDescriptor,
    observer: &ObserverCoordinates,
    at: DateTime<Utc>,
) -> Result<f64, PropagationError> {
    let eci = orbit.propagate(at)?;
    Ok(look_angles(&eci, observer, at).el)
}

/// Locate the next horizon crossing of the supplied elevation signal.
///
/// Coarse scan: sample at `start`, then step by `coarse_step` (the final
/// step is clamped to the budget), testing the crossing predicate between
/// consecutive samples. Bisection: shrink the bracketing interval until it
/// is no wider than `precision` and return its lower edge. The bisection
/// phase takes at most `ceil(log2(coarse_step / precision))` samples.
pub(crate) fn find_crossing_with<F>(
    mut sample: F,
    start: DateTime<Utc>,
    direction: CrossingDirection,
    params: &SearchParameters,
) -> Result<CrossingOutcome, PropagationError>
where
    F: FnMut(DateTime<Utc>) -> Result<f64, PropagationError>,
{
    let end = start + params.max_search_duration;
    let mut current = start;
    let mut prev_el = sample(current)?;

    let mut bracket = None;
    while current < end {
        let mut next = current + params.coarse_step;
        if next > end {
            next = end;
        }

        let el = sample(next)?;
        if direction.crosses(prev_el, el, params.min_elevation) {
            bracket = Some((current, next));
            break;
        }

        prev_el = el;
        current = next;
    }

    let Some((mut low, mut high)) = bracket else {
        return Ok(CrossingOutcome::Exhausted);
    };

    while high - low > params.precision {
        let mid = low + (high - low) / 2;
        let mid_el = sample(mid)?;
        if direction.crossing_in_upper_half(mid_el, params.min_elevation) {
            low = mid;
        } else {
            high = mid;
        }
    }

    Ok(CrossingOutcome::Converged(low))
}

/// Find the next instant the satellite's elevation crosses the horizon
/// threshold in the given direction, starting at `start`.
pub fn find_crossing(
    orbit: &OrbitDescriptor,
    observer: &ObserverCoordinates,
    start: DateTime<Utc>,
    direction: CrossingDirection,
    params: &SearchParameters,
) -> Result<CrossingOutcome, PropagationError> {
    find_crossing_with(
        |at| elevation_at(orbit, observer, at),
        start,
        direction,
        params,
    )
}

/// Aggregator loop over the injected signal; see [`find_windows`].
pub(crate) fn find_windows_with<F>(
    mut sample: F,
    start: DateTime<Utc>,
    n: usize,
    params: &SearchParameters,
) -> Result<Vec<TimeRange>, PropagationError>
where
    F: FnMut(DateTime<Utc>) -> Result<f64, PropagationError>,
{
    let mut windows = Vec::with_capacity(n);
    let mut current = start;

    while windows.len() < n {
        let rise = match find_crossing_with(&mut sample, current, CrossingDirection::Rise, params)?
        {
            CrossingOutcome::Converged(t) => t,
            CrossingOutcome::Exhausted => break,
        };

        // Start the set search just past the rise so the refined rise bracket
        // cannot be rediscovered as a set; the budget restarts here.
        let set = match find_crossing_with(
            &mut sample,
            rise + params.precision,
            CrossingDirection::Set,
            params,
        )? {
            CrossingOutcome::Converged(t) => t,
            // A rise with no discoverable set inside the budget is dropped.
            CrossingOutcome::Exhausted => break,
        };

        let duration = set - rise;
        if duration > params.precision {
            windows.push(TimeRange {
                from: rise,
                to: set,
                duration,
            });
        }
        // Sub-precision pairs are noise: skip them without counting toward n.

        current = set + params.precision;
    }

    Ok(windows)
}

/// Collect up to `n` future visibility windows for `orbit` as seen from
/// `observer`, searching forward from `start`.
///
/// Returns at most `n` non-overlapping ranges in increasing time order.
/// Running out of budget mid-sequence yields the windows accumulated so far
/// (possibly none) - a partial result, never an error. The sequence is
/// restartable: calling again with `start` set to the last window's end plus
/// `precision` continues it deterministically.
pub fn find_windows(
    orbit: &OrbitDescriptor,
    observer: &ObserverCoordinates,
    start: DateTime<Utc>,
    n: usize,
    params: &SearchParameters,
) -> Result<Vec<TimeRange>, VisibilityError> {
    params.validate()?;
    find_windows_with(|at| elevation_at(orbit, observer, at), start, n, params)
        .map_err(VisibilityError::from)
}
