//! Core value types shared by every component.
//!
//! - `GeoPoint`: a named WGS84 geographic coordinate. Immutable once handed
//!   to a registry; re-adding a name appends a new entry, never edits.
//! - `ProjectedPoint`: the UTM-style planar form. Derived on demand from a
//!   `GeoPoint`, never stored alongside it.
//! - `Hemisphere`: north/south selector for the projected form.
//!
//! Coordinate bounds are enforced at the operation boundaries (solvers,
//! transformer), not by these types; see `crate::error`.

use crate::error::{Error, Result};

/// A named geographic coordinate in degrees on WGS84.
///
/// Computed points (direct solutions, route samples, unprojected results)
/// carry an empty name; names are assigned where points enter a registry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub name: String,
    /// Degrees, positive north.
    pub latitude: f64,
    /// Degrees, positive east.
    pub longitude: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// A point with no name, for computed results.
    #[inline]
    pub fn unnamed(latitude: f64, longitude: f64) -> Self {
        Self::new("", latitude, longitude)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "({:.7}, {:.7})", self.latitude, self.longitude)
        } else {
            write!(f, "{} ({:.7}, {:.7})", self.name, self.latitude, self.longitude)
        }
    }
}

/// Hemisphere selector for projected coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// North for latitude >= 0, south otherwise.
    #[inline]
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    #[inline]
    pub fn is_south(self) -> bool {
        matches!(self, Hemisphere::South)
    }
}

impl std::fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hemisphere::North => write!(f, "N"),
            Hemisphere::South => write!(f, "S"),
        }
    }
}

/// A zone-based planar coordinate (UTM-style), in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedPoint {
    pub easting: f64,
    pub northing: f64,
    /// Zone number in [1, 60].
    pub zone: i32,
    pub hemisphere: Hemisphere,
}

impl ProjectedPoint {
    #[inline]
    pub fn new(easting: f64, northing: f64, zone: i32, hemisphere: Hemisphere) -> Self {
        Self {
            easting,
            northing,
            zone,
            hemisphere,
        }
    }
}

impl std::fmt::Display for ProjectedPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} {:.3} E {:.3} N",
            self.zone, self.hemisphere, self.easting, self.northing
        )
    }
}

/// Latitude bound check shared by the solver adapter and the transformer.
#[inline]
pub(crate) fn check_latitude(latitude: f64) -> Result<f64> {
    if (-90.0..=90.0).contains(&latitude) {
        Ok(latitude)
    } else {
        Err(Error::LatitudeOutOfRange(latitude))
    }
}
