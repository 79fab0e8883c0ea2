//! Coordinate transformer: geographic <-> UTM-style projected coordinates.
//!
//! Purpose
//! - Bidirectional conversion between `GeoPoint` and `ProjectedPoint` on
//!   WGS84, with zone selection as a pure function of longitude and
//!   hemisphere selection by latitude sign.
//!
//! Model
//! - Zone `floor((lon + 180) / 6) + 1`, central meridian at the zone
//!   center, scale 0.9996 on the central meridian, false easting 500 km,
//!   false northing 10000 km in the south. The transverse-Mercator core
//!   lives in `tm`.
//!
//! # Limitations
//! - Zone selection applies the formula as-is: no polar grid, no
//!   date-line wraparound, none of the Norway/Svalbard exceptions. A
//!   longitude of exactly +180 degrees yields zone 61, which the inverse
//!   direction then rejects; callers near the date line should normalize
//!   longitudes into [-180, 180) first.
//! - The round-trip guarantee (1e-9 degrees) holds away from the poles;
//!   projected coordinates of near-polar points are well-defined but not
//!   meaningful for navigation.

mod tm;

use crate::error::{Error, Result};
use crate::types::{check_latitude, GeoPoint, Hemisphere, ProjectedPoint};

/// Scale factor on the central meridian.
const SCALE: f64 = 0.9996;
const FALSE_EASTING: f64 = 500_000.0;
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Zone number for a longitude in degrees: `floor((lon + 180) / 6) + 1`.
///
/// Pure in longitude; see the module limitations for edge behavior.
#[inline]
pub fn zone_for_longitude(longitude: f64) -> i32 {
    ((longitude + 180.0) / 6.0).floor() as i32 + 1
}

/// Central meridian of a zone, degrees.
#[inline]
fn central_meridian(zone: i32) -> f64 {
    f64::from((zone - 1) * 6 - 180 + 3)
}

/// Projects a geographic point into its UTM-style planar form.
///
/// Zone and hemisphere are derived from the point itself. Fails with
/// [`Error::LatitudeOutOfRange`] if the latitude lies outside [-90, 90];
/// longitude is taken as-is.
pub fn to_projected(p: &GeoPoint) -> Result<ProjectedPoint> {
    check_latitude(p.latitude)?;
    let zone = zone_for_longitude(p.longitude);
    let hemisphere = Hemisphere::from_latitude(p.latitude);
    let (x, y) = tm::forward(p.latitude, p.longitude, central_meridian(zone));
    let northing_offset = if hemisphere.is_south() {
        FALSE_NORTHING_SOUTH
    } else {
        0.0
    };
    Ok(ProjectedPoint {
        easting: SCALE * x + FALSE_EASTING,
        northing: SCALE * y + northing_offset,
        zone,
        hemisphere,
    })
}

/// Inverse projection with explicit zone and hemisphere (never inferred).
///
/// Fails with [`Error::ZoneOutOfRange`] for zones outside [1, 60]. The
/// returned point is unnamed.
pub fn to_geographic(pp: &ProjectedPoint) -> Result<GeoPoint> {
    if !(1..=60).contains(&pp.zone) {
        return Err(Error::ZoneOutOfRange(pp.zone));
    }
    let northing_offset = if pp.hemisphere.is_south() {
        FALSE_NORTHING_SOUTH
    } else {
        0.0
    };
    let x = (pp.easting - FALSE_EASTING) / SCALE;
    let y = (pp.northing - northing_offset) / SCALE;
    let (lat, lon) = tm::inverse(x, y, central_meridian(pp.zone));
    Ok(GeoPoint::unnamed(lat, lon))
}
