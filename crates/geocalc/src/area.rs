//! Polygon area engine: signed ellipsoidal area and perimeter of a ring.
//!
//! Purpose
//! - Accumulate an ordered ring of geographic points and compute the
//!   enclosed ellipsoidal area (signed, counter-clockwise positive) and
//!   the ring perimeter, both delegated to `geographiclib_rs::PolygonArea`.
//!
//! Model
//! - Vertices are added in caller order; the accumulation closes the ring
//!   from the last vertex back to the first, so callers never repeat the
//!   first vertex. A repeated final vertex is not rejected; it only adds
//!   a zero-length edge.
//!
//! # Limitations
//! - Self-intersecting rings are accumulated by the same rule with no
//!   validation; the signed result is whatever the edge integrals sum to.
//! - Rings larger than half the ellipsoid are reported with the sign
//!   convention of the underlying accumulator (the smaller complement
//!   wins the sign).

use geographiclib_rs::{PolygonArea, Winding};

use crate::error::{Error, Result};
use crate::geodesic::wgs84;
use crate::types::GeoPoint;

/// Perimeter and signed area of a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaResult {
    /// Ring perimeter in meters, closing edge included. Always >= 0.
    pub perimeter_m: f64,
    /// Signed area in square meters; counter-clockwise rings are positive.
    pub signed_area_m2: f64,
}

impl AreaResult {
    /// Area magnitude, the figure consumers report.
    #[inline]
    pub fn area_m2(&self) -> f64 {
        self.signed_area_m2.abs()
    }

    #[inline]
    pub fn area_km2(&self) -> f64 {
        self.area_m2() / 1.0e6
    }
}

/// Computes perimeter and signed ellipsoidal area of `ring` on WGS84.
///
/// The ring is implicitly closed. Fails fast with [`Error::RingTooSmall`]
/// for fewer than three vertices; callers are expected to guard before
/// invoking the engine, this is the backstop.
pub fn compute_area(ring: &[GeoPoint]) -> Result<AreaResult> {
    if ring.len() < 3 {
        return Err(Error::RingTooSmall(ring.len()));
    }
    let mut accumulator = PolygonArea::new(wgs84(), Winding::CounterClockwise);
    for p in ring {
        accumulator.add_point(p.latitude, p.longitude);
    }
    let (perimeter_m, signed_area_m2, _count) = accumulator.compute(true);
    Ok(AreaResult {
        perimeter_m,
        signed_area_m2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Vec<GeoPoint> {
        coords
            .iter()
            .map(|&(lat, lon)| GeoPoint::unnamed(lat, lon))
            .collect()
    }

    // One-degree right triangle at the equator, counter-clockwise in map
    // view: (0,0) -> (0,1) -> (1,0).
    const TRIANGLE: [(f64, f64); 3] = [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)];

    #[test]
    fn equatorial_degree_triangle() {
        let result = compute_area(&ring(&TRIANGLE)).unwrap();
        assert!(
            result.signed_area_m2 > 5.5e9 && result.signed_area_m2 < 6.8e9,
            "signed area {}",
            result.signed_area_m2
        );
        assert!((result.area_m2() - result.signed_area_m2).abs() < 1e-3);
        // Perimeter: two near-111 km legs plus the ~157 km hypotenuse.
        assert!(
            result.perimeter_m > 370_000.0 && result.perimeter_m < 390_000.0,
            "perimeter {}",
            result.perimeter_m
        );
    }

    #[test]
    fn reversal_flips_sign_only() {
        let forward = compute_area(&ring(&TRIANGLE)).unwrap();
        let mut reversed = ring(&TRIANGLE);
        reversed.reverse();
        let backward = compute_area(&reversed).unwrap();
        assert!(backward.signed_area_m2 < 0.0);
        assert!((forward.signed_area_m2 + backward.signed_area_m2).abs() < 1.0);
        assert!((forward.perimeter_m - backward.perimeter_m).abs() < 1e-6);
    }

    #[test]
    fn cyclic_rotation_preserves_result() {
        let base = compute_area(&ring(&TRIANGLE)).unwrap();
        let mut rotated = ring(&TRIANGLE);
        rotated.rotate_left(1);
        let turned = compute_area(&rotated).unwrap();
        assert!((base.signed_area_m2 - turned.signed_area_m2).abs() < 1.0);
        assert!((base.perimeter_m - turned.perimeter_m).abs() < 1e-6);
    }

    #[test]
    fn repeated_closing_vertex_changes_nothing() {
        let open = compute_area(&ring(&TRIANGLE)).unwrap();
        let mut closed_ring = ring(&TRIANGLE);
        closed_ring.push(closed_ring[0].clone());
        let closed = compute_area(&closed_ring).unwrap();
        assert!((open.signed_area_m2 - closed.signed_area_m2).abs() < 1.0);
        assert!((open.perimeter_m - closed.perimeter_m).abs() < 1e-6);
    }

    #[test]
    fn too_few_vertices_fail_fast() {
        assert!(matches!(
            compute_area(&ring(&[])),
            Err(Error::RingTooSmall(0))
        ));
        assert!(matches!(
            compute_area(&ring(&[(0.0, 0.0)])),
            Err(Error::RingTooSmall(1))
        ));
        assert!(matches!(
            compute_area(&ring(&[(0.0, 0.0), (0.0, 1.0)])),
            Err(Error::RingTooSmall(2))
        ));
    }

    #[test]
    fn degenerate_collinear_ring_has_tiny_area() {
        // Three points on the equator: the "ring" folds onto itself.
        let result = compute_area(&ring(&[(0.0, 0.0), (0.0, 0.5), (0.0, 1.0)])).unwrap();
        assert!(result.area_m2() < 1.0);
        assert!(result.perimeter_m > 200_000.0);
    }

    #[test]
    fn km_conversion() {
        let result = compute_area(&ring(&TRIANGLE)).unwrap();
        assert!((result.area_km2() - result.area_m2() / 1.0e6).abs() < 1e-9);
    }
}
