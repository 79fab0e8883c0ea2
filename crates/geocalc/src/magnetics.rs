//! Geomagnetic field summary derived from model components.
//!
//! The field components themselves come from a reference geomagnetic
//! model evaluated upstream (IGRF); synthesizing them is out of scope
//! here. This module carries only the derivation layered on top: total
//! and horizontal intensity, declination, and inclination from the
//! east/north/up component triple.

/// Geomagnetic field components in nanotesla, east/north/up frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldVector {
    pub east_nt: f64,
    pub north_nt: f64,
    /// Positive away from the Earth's center.
    pub up_nt: f64,
}

impl FieldVector {
    #[inline]
    pub fn new(east_nt: f64, north_nt: f64, up_nt: f64) -> Self {
        Self {
            east_nt,
            north_nt,
            up_nt,
        }
    }
}

/// Derived field quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSummary {
    /// Total intensity F, nanotesla.
    pub total_nt: f64,
    /// Horizontal intensity H, nanotesla.
    pub horizontal_nt: f64,
    /// Declination D: horizontal angle from true north to the field,
    /// positive east, degrees in (-180, 180].
    pub declination_deg: f64,
    /// Inclination I: dip below the horizontal plane, positive downward,
    /// degrees in [-90, 90].
    pub inclination_deg: f64,
}

impl FieldSummary {
    /// Derives F, H, D, I from an east/north/up component triple.
    pub fn from_vector(v: FieldVector) -> Self {
        let horizontal_nt = v.east_nt.hypot(v.north_nt);
        let total_nt = horizontal_nt.hypot(v.up_nt);
        let declination_deg = v.east_nt.atan2(v.north_nt).to_degrees();
        // Down component is -up; dip is measured toward it.
        let inclination_deg = (-v.up_nt).atan2(horizontal_nt).to_degrees();
        Self {
            total_nt,
            horizontal_nt,
            declination_deg,
            inclination_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_north_field() {
        let s = FieldSummary::from_vector(FieldVector::new(0.0, 30_000.0, 0.0));
        assert_eq!(s.declination_deg, 0.0);
        assert_eq!(s.inclination_deg, 0.0);
        assert!((s.total_nt - 30_000.0).abs() < 1e-9);
        assert!((s.horizontal_nt - 30_000.0).abs() < 1e-9);
    }

    #[test]
    fn declination_sign_follows_east_component() {
        let east = FieldSummary::from_vector(FieldVector::new(1_000.0, 20_000.0, 0.0));
        assert!(east.declination_deg > 0.0);
        let west = FieldSummary::from_vector(FieldVector::new(-1_000.0, 20_000.0, 0.0));
        assert!(west.declination_deg < 0.0);
        assert!((east.declination_deg + west.declination_deg).abs() < 1e-12);
    }

    #[test]
    fn inclination_positive_when_field_points_down() {
        // Northern-hemisphere style field: strong downward component.
        let s = FieldSummary::from_vector(FieldVector::new(0.0, 20_000.0, -40_000.0));
        assert!(s.inclination_deg > 60.0 && s.inclination_deg < 65.0);
        // Southern-hemisphere style field points up.
        let s = FieldSummary::from_vector(FieldVector::new(0.0, 20_000.0, 40_000.0));
        assert!(s.inclination_deg < -60.0 && s.inclination_deg > -65.0);
    }

    #[test]
    fn quantities_are_consistent() {
        // Realistic mid-latitude components.
        let v = FieldVector::new(-4_500.0, 18_000.0, -15_500.0);
        let s = FieldSummary::from_vector(v);
        let h = (v.east_nt * v.east_nt + v.north_nt * v.north_nt).sqrt();
        let f = (h * h + v.up_nt * v.up_nt).sqrt();
        assert!((s.horizontal_nt - h).abs() < 1e-9);
        assert!((s.total_nt - f).abs() < 1e-9);
        assert!(s.horizontal_nt <= s.total_nt);
        assert!(s.declination_deg < 0.0);
        assert!(s.inclination_deg > 0.0);
    }

    #[test]
    fn vertical_field_has_vertical_dip() {
        let s = FieldSummary::from_vector(FieldVector::new(0.0, 0.0, -50_000.0));
        assert!((s.inclination_deg - 90.0).abs() < 1e-12);
        assert!((s.total_nt - 50_000.0).abs() < 1e-9);
        assert_eq!(s.horizontal_nt, 0.0);
    }
}
