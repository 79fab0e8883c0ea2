//! Route sampler: evenly spaced points along the line between two points.
//!
//! Purpose
//! - Produce the ordered coordinate sequence a map layer draws as the
//!   route between two endpoints: `[origin, p_1, .., p_n, dest]` with the
//!   interior points at equal path-distance steps.
//!
//! Model
//! - One inverse solve fixes the total distance and the initial azimuth;
//!   every interior point is then a direct solve anchored at the origin
//!   with that single frozen azimuth and distance `total * i / (n + 1)`.
//!   The azimuth is deliberately not re-derived per step, so over very
//!   long legs the polyline is a constant-initial-bearing approximation
//!   of the geodesic, not the geodesic itself. Good enough for
//!   rendering; do not use it for precise path reproduction.
//!
//! The output is materialized and purely a function of its inputs, so a
//! sample can be recomputed or cached freely.

use crate::error::Result;
use crate::geodesic::{direct, inverse, GeodesicSolution};
use crate::types::GeoPoint;

/// An ordered route polyline plus the solve that produced it.
///
/// `points` has length `n_interior + 2`; the endpoints are the exact
/// inputs (names included), interior points are unnamed. Path distance
/// from the origin increases monotonically along the sequence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSample {
    pub solution: GeodesicSolution,
    pub points: Vec<GeoPoint>,
}

/// Samples the route from `origin` to `dest` with `n_interior` evenly
/// spaced interior points.
///
/// Propagates the domain errors of the underlying inverse/direct solves
/// (out-of-range latitudes).
pub fn sample_route(origin: &GeoPoint, dest: &GeoPoint, n_interior: usize) -> Result<RouteSample> {
    let solution = inverse(origin, dest)?;
    let mut points = Vec::with_capacity(n_interior + 2);
    points.push(origin.clone());
    for i in 1..=n_interior {
        let fraction = i as f64 / (n_interior + 1) as f64;
        let step = direct(
            origin,
            solution.initial_azimuth_deg,
            solution.distance_m * fraction,
        )?;
        points.push(step);
    }
    points.push(dest.clone());
    Ok(RouteSample { solution, points })
}
