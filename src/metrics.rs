//! Metrics Module
//!
//! Aggregate and pairwise distance/time over a route.
//!
//! Both computations walk the route forward through its public traversal
//! surface; neither mutates it. Forward is the only direction: the route is
//! a directed cycle, so the span from B to A is generally *not* the span
//! from A to B — it walks the long way around. That asymmetry is part of
//! the model, not something to correct for.

use crate::error::{Result, RouteError};
use crate::route::Route;

/// Accumulated distance (km) and time (min) over some stretch of route
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub distance: f64,
    pub time: f64,
}

impl Totals {
    pub const ZERO: Totals = Totals {
        distance: 0.0,
        time: 0.0,
    };

    fn add_leg(&mut self, dist: f64, time: f64) {
        self.distance += dist;
        self.time += time;
    }
}

/// Sum every leg of the route, one full revolution from the head.
///
/// An empty route totals to zero. O(N).
pub fn route_totals(route: &Route) -> Totals {
    let mut totals = Totals::ZERO;
    for stop in route.iter() {
        totals.add_leg(stop.dist_to_next, stop.time_to_next);
    }
    totals
}

/// Accumulate legs walking forward from the stop named `from` until the
/// stop named `to` is reached.
///
/// Either name failing to resolve is a [`RouteError::StopNotFound`]. Both
/// names resolving to the same stop is a zero span. Since the route is a
/// single cycle, `to` is always reachable by continuing forward; if a full
/// revolution somehow passes without meeting it, the walk gives up with
/// `StopNotFound` rather than spinning. O(N).
pub fn span_between(route: &Route, from: &str, to: &str) -> Result<Totals> {
    let start = route
        .find_by_name(from)
        .ok_or_else(|| RouteError::StopNotFound(from.to_string()))?;
    let target = route
        .find_by_name(to)
        .ok_or_else(|| RouteError::StopNotFound(to.to_string()))?;

    if start.id == target.id {
        return Ok(Totals::ZERO);
    }

    let target_id = target.id;
    let mut totals = Totals::ZERO;
    // iter_from cannot miss here: start was just resolved on this route.
    for stop in route.iter_from(start.id).into_iter().flatten() {
        if stop.id == target_id {
            return Ok(totals);
        }
        totals.add_leg(stop.dist_to_next, stop.time_to_next);
    }

    // Unreachable while the cyclic invariant holds.
    Err(RouteError::StopNotFound(to.to_string()))
}
