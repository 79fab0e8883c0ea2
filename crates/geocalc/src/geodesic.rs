//! Geodesic solver adapter: inverse and direct problems on WGS84.
//!
//! Purpose
//! - Wrap the ellipsoidal inverse/direct solutions behind the crate's value
//!   types and validation rules. The numerics themselves are delegated to
//!   `geographiclib_rs` (Karney's algorithms); this module owns only the
//!   domain checks and the azimuth normalization convention.
//!
//! Model
//! - `inverse`: shortest-path distance plus initial azimuth, azimuth
//!   normalized into [0, 360) by `(azi + 360) % 360`.
//! - `direct`: destination from origin, initial bearing, and distance;
//!   the bearing is reduced mod 360 before use, negative distances are
//!   rejected.
//!
//! Both are pure functions over immutable inputs and safe to call from any
//! number of threads; the shared `Geodesic` model is initialized once.

use std::sync::OnceLock;

use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};

use crate::error::{Error, Result};
use crate::types::{check_latitude, GeoPoint};

/// Shared WGS84 geodesic model (semi-major axis 6378137 m, flattening
/// 1/298.257223563). Built on first use, then reused by every solver call.
pub(crate) fn wgs84() -> &'static Geodesic {
    static WGS84: OnceLock<Geodesic> = OnceLock::new();
    WGS84.get_or_init(Geodesic::wgs84)
}

/// Result of an inverse geodesic solve between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodesicSolution {
    /// Shortest-path distance in meters, >= 0.
    pub distance_m: f64,
    /// Initial azimuth at the first point, degrees clockwise from north
    /// in [0, 360).
    pub initial_azimuth_deg: f64,
}

impl GeodesicSolution {
    #[inline]
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }
}

/// Solves the inverse problem: distance and initial azimuth from `p1` to
/// `p2` along the shortest path on WGS84.
///
/// Fails with [`Error::LatitudeOutOfRange`] if either latitude lies outside
/// [-90, 90]. Longitudes are passed through; the solver reduces them.
pub fn inverse(p1: &GeoPoint, p2: &GeoPoint) -> Result<GeodesicSolution> {
    check_latitude(p1.latitude)?;
    check_latitude(p2.latitude)?;
    let (distance_m, azi1, _azi2, _a12): (f64, f64, f64, f64) =
        wgs84().inverse(p1.latitude, p1.longitude, p2.latitude, p2.longitude);
    Ok(GeodesicSolution {
        distance_m,
        initial_azimuth_deg: (azi1 + 360.0) % 360.0,
    })
}

/// Solves the direct problem: the point reached from `origin` after
/// traveling `distance_m` meters along initial bearing `azimuth_deg`.
///
/// The azimuth is reduced into [0, 360) before use. Fails with
/// [`Error::NegativeDistance`] for negative distances and
/// [`Error::LatitudeOutOfRange`] for an out-of-range origin latitude.
/// The returned point is unnamed.
pub fn direct(origin: &GeoPoint, azimuth_deg: f64, distance_m: f64) -> Result<GeoPoint> {
    check_latitude(origin.latitude)?;
    if distance_m < 0.0 {
        return Err(Error::NegativeDistance(distance_m));
    }
    let azimuth = azimuth_deg.rem_euclid(360.0);
    let (lat2, lon2, _azi2): (f64, f64, f64) =
        wgs84().direct(origin.latitude, origin.longitude, azimuth, distance_m);
    Ok(GeoPoint::unnamed(lat2, lon2))
}
