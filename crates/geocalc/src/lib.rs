//! Geodesic point-set and polygon engine on the WGS84 ellipsoid.
//!
//! Everything a geospatial teaching frontend needs behind typed
//! functions: inverse/direct geodesic solutions, geographic <-> UTM
//! transforms, evenly spaced route sampling, signed ellipsoidal polygon
//! area, a session-scoped registry of named points, and geomagnetic
//! field summaries derived from model components.
//!
//! Design rules
//! - WGS84 throughout (semi-major axis 6378137 m, flattening
//!   1/298.257223563).
//! - Ellipsoidal numerics are delegated to `geographiclib_rs`; this crate
//!   owns validation, conventions, and orchestration. The one in-crate
//!   numerical piece is the transverse-Mercator series in `transform`.
//! - Every operation is a pure synchronous function over immutable
//!   inputs; the only mutable state is the per-session `PointRegistry`.
//! - Errors are rejected requests, never retried or coerced; see
//!   [`error::Error`].
//!
//! The presentation layer (forms, maps, tables) is a separate
//! collaborator: it calls these functions and renders the results.

pub mod area;
pub mod error;
pub mod geodesic;
pub mod magnetics;
pub mod registry;
pub mod route;
pub mod transform;
pub mod types;

pub use error::{Error, Result};
pub use types::{GeoPoint, Hemisphere, ProjectedPoint};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::{compute_area, AreaResult};
    pub use crate::error::{Error, Result};
    pub use crate::geodesic::{direct, inverse, GeodesicSolution};
    pub use crate::magnetics::{FieldSummary, FieldVector};
    pub use crate::registry::PointRegistry;
    pub use crate::route::{sample_route, RouteSample};
    pub use crate::transform::{to_geographic, to_projected, zone_for_longitude};
    pub use crate::types::{GeoPoint, Hemisphere, ProjectedPoint};
}
