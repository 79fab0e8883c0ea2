//! Crate-wide error type.
//!
//! Two families, mirroring how requests are rejected: domain errors (a value
//! lies outside the range the operation is defined on) and precondition
//! violations (the input shape is structurally unusable). Every operation is
//! all-or-nothing; nothing here is retried or coerced.
//!
//! Longitude is deliberately not validated anywhere: the geodesic solvers
//! wrap it internally and the zone formula applies as-is (see
//! `transform::zone_for_longitude` for the limitation note).

/// Errors produced by the solvers, the transformer, and the area engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Latitude outside [-90, 90] degrees.
    #[error("latitude {0} degrees is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Projection zone outside [1, 60].
    #[error("UTM zone {0} is outside [1, 60]")]
    ZoneOutOfRange(i32),

    /// Negative distance passed to the direct geodesic solver.
    #[error("distance {0} m is negative")]
    NegativeDistance(f64),

    /// Polygon ring with too few vertices for an area computation.
    #[error("polygon ring has {0} vertices, area needs at least 3")]
    RingTooSmall(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
