//! Transverse-Mercator projection core (6th-order Krüger series).
//!
//! Purpose
//! - Evaluate the conformal transverse-Mercator mapping about a given
//!   central meridian on WGS84, unscaled: callers apply the zone scale
//!   factor and the false offsets.
//!
//! Model
//! - Karney's series formulation: geographic latitude -> conformal
//!   latitude via tau/tau-prime, then the rectifying series with
//!   coefficients alpha (forward) and beta (inverse), both truncated at
//!   n^6. At that order the mapping is accurate to nanometers within a
//!   zone, so forward/inverse round-trips sit far below the 1e-9-degree
//!   budget the transformer guarantees.
//! - The inverse recovers geographic latitude from tau-prime with a
//!   Newton iteration on tau.

/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug)]
pub(super) struct Ellipsoid {
    /// Semi-major axis (meters).
    pub a: f64,
    /// First eccentricity squared: f * (2 - f).
    pub e2: f64,
    /// Third flattening: f / (2 - f).
    pub n: f64,
}

impl Ellipsoid {
    pub(super) const fn new(a: f64, f: f64) -> Self {
        Self {
            a,
            e2: f * (2.0 - f),
            n: f / (2.0 - f),
        }
    }
}

pub(super) const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);

const N: f64 = WGS84.n;
const N2: f64 = N * N;
const N3: f64 = N2 * N;
const N4: f64 = N3 * N;
const N5: f64 = N4 * N;
const N6: f64 = N5 * N;

/// Rectifying radius: a/(1+n) * (1 + n^2/4 + n^4/64 + n^6/256).
const RECTIFYING_RADIUS: f64 =
    WGS84.a / (1.0 + N) * (1.0 + N2 / 4.0 + N4 / 64.0 + N6 / 256.0);

/// Forward series coefficients (conformal -> rectifying), order n^6.
const ALPHA: [f64; 6] = [
    N / 2.0 - 2.0 * N2 / 3.0 + 5.0 * N3 / 16.0 + 41.0 * N4 / 180.0 - 127.0 * N5 / 288.0
        + 7891.0 * N6 / 37800.0,
    13.0 * N2 / 48.0 - 3.0 * N3 / 5.0 + 557.0 * N4 / 1440.0 + 281.0 * N5 / 630.0
        - 1983433.0 * N6 / 1935360.0,
    61.0 * N3 / 240.0 - 103.0 * N4 / 140.0 + 15061.0 * N5 / 26880.0 + 167603.0 * N6 / 181440.0,
    49561.0 * N4 / 161280.0 - 179.0 * N5 / 168.0 + 6601661.0 * N6 / 7257600.0,
    34729.0 * N5 / 80640.0 - 3418889.0 * N6 / 1995840.0,
    212378941.0 * N6 / 319334400.0,
];

/// Inverse series coefficients (rectifying -> conformal), order n^6.
const BETA: [f64; 6] = [
    N / 2.0 - 2.0 * N2 / 3.0 + 37.0 * N3 / 96.0 - N4 / 360.0 - 81.0 * N5 / 512.0
        + 96199.0 * N6 / 604800.0,
    N2 / 48.0 + N3 / 15.0 - 437.0 * N4 / 1440.0 + 46.0 * N5 / 105.0 - 1118711.0 * N6 / 3870720.0,
    17.0 * N3 / 480.0 - 37.0 * N4 / 840.0 - 209.0 * N5 / 4480.0 + 5569.0 * N6 / 90720.0,
    4397.0 * N4 / 161280.0 - 11.0 * N5 / 504.0 - 830251.0 * N6 / 7257600.0,
    4583.0 * N5 / 161280.0 - 108847.0 * N6 / 3991680.0,
    20648693.0 * N6 / 638668800.0,
];

/// Newton tolerance on tan(latitude) when inverting the conformal map.
const TAU_TOL: f64 = 1e-12;

/// Forward mapping about `lon0_deg`. Returns unscaled `(x, y)` in meters:
/// `x` east of the central meridian, `y` north of the equator.
pub(super) fn forward(lat_deg: f64, lon_deg: f64, lon0_deg: f64) -> (f64, f64) {
    let phi = lat_deg.to_radians();
    let lam = (lon_deg - lon0_deg).to_radians();
    let e = WGS84.e2.sqrt();

    // Conformal latitude, kept in tangent form for accuracy near the poles.
    let tau = phi.tan();
    let sigma = (e * (e * tau / tau.hypot(1.0)).atanh()).sinh();
    let tau_p = tau * sigma.hypot(1.0) - sigma * tau.hypot(1.0);

    let xi_p = tau_p.atan2(lam.cos());
    let eta_p = (lam.sin() / tau_p.hypot(lam.cos())).asinh();

    let mut xi = xi_p;
    let mut eta = eta_p;
    for (j, a) in ALPHA.iter().enumerate() {
        let k = 2.0 * (j + 1) as f64;
        xi += a * (k * xi_p).sin() * (k * eta_p).cosh();
        eta += a * (k * xi_p).cos() * (k * eta_p).sinh();
    }

    (RECTIFYING_RADIUS * eta, RECTIFYING_RADIUS * xi)
}

/// Inverse mapping: unscaled `(x, y)` about `lon0_deg` back to
/// `(lat_deg, lon_deg)`.
pub(super) fn inverse(x: f64, y: f64, lon0_deg: f64) -> (f64, f64) {
    let eta = x / RECTIFYING_RADIUS;
    let xi = y / RECTIFYING_RADIUS;
    let e = WGS84.e2.sqrt();

    let mut xi_p = xi;
    let mut eta_p = eta;
    for (j, b) in BETA.iter().enumerate() {
        let k = 2.0 * (j + 1) as f64;
        xi_p -= b * (k * xi).sin() * (k * eta).cosh();
        eta_p -= b * (k * xi).cos() * (k * eta).sinh();
    }

    let tau_p = xi_p.sin() / eta_p.sinh().hypot(xi_p.cos());

    // Newton on tau; converges in two or three steps for in-zone input.
    // The cap only matters for non-finite input, which would never settle.
    let mut tau = tau_p;
    for _ in 0..8 {
        let sigma = (e * (e * tau / tau.hypot(1.0)).atanh()).sinh();
        let tau_i = tau * sigma.hypot(1.0) - sigma * tau.hypot(1.0);
        let dtau = (tau_p - tau_i) / tau_i.hypot(1.0) * (1.0 + (1.0 - WGS84.e2) * tau * tau)
            / ((1.0 - WGS84.e2) * tau.hypot(1.0));
        tau += dtau;
        if dtau.abs() <= TAU_TOL {
            break;
        }
    }

    let lat = tau.atan().to_degrees();
    let lon = lon0_deg + eta_p.sinh().atan2(xi_p.cos()).to_degrees();
    (lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipsoid_constants() {
        assert!((WGS84.e2.sqrt() - 0.081_819_190_842_622).abs() < 1e-12);
        assert!((WGS84.n - 0.001_679_220_386_383_705).abs() < 1e-15);
        // Rectifying radius for WGS84, meters.
        assert!((RECTIFYING_RADIUS - 6_367_449.145_823).abs() < 1e-3);
    }

    #[test]
    fn equator_on_central_meridian_is_origin() {
        let (x, y) = forward(0.0, -45.0, -45.0);
        assert!(x.abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn central_meridian_maps_to_meridian_arc() {
        // On the central meridian x must vanish and y equals the meridian
        // arc length from the equator.
        let (x, y) = forward(45.0, 9.0, 9.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 4_984_944.4).abs() < 5.0, "arc {y}");
        // Symmetric under latitude sign flip.
        let (_, ys) = forward(-45.0, 9.0, 9.0);
        assert!((y + ys).abs() < 1e-9);
    }

    #[test]
    fn round_trip_is_tight() {
        for &(lat, lon, lon0) in &[
            (-22.9068, -43.1729, -45.0),
            (48.8584, 2.2945, 3.0),
            (63.5, 10.4, 9.0),
            (-77.85, 166.67, 165.0),
            (0.001, -0.001, 3.0),
        ] {
            let (x, y) = forward(lat, lon, lon0);
            let (lat2, lon2) = inverse(x, y, lon0);
            assert!((lat2 - lat).abs() < 1e-11, "lat {lat} -> {lat2}");
            assert!((lon2 - lon).abs() < 1e-11, "lon {lon} -> {lon2}");
        }
    }
}
