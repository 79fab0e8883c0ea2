//! Session-scoped registry of named points.
//!
//! Purpose
//! - Hold the ordered list of points a session has accumulated. One
//!   session owns one registry; it is created at session start, passed by
//!   reference into handlers, and dropped (or `clear`ed) at session end.
//!   Never a process-wide singleton, and never shared across sessions.
//!
//! Model
//! - Append-only insertion order. Names are not unique; lookup by name
//!   returns the first match, and positional access is offered for
//!   callers that need an exact entry. The single mutation rule: an
//!   empty name is silently ignored, everything else appends. No remove,
//!   no edit; re-adding a name appends a second entry.
//!
//! Coordinates are stored as given. Bounds are checked by the operations
//! that consume the points, not at entry.

use crate::error::Result;
use crate::transform::to_geographic;
use crate::types::{GeoPoint, ProjectedPoint};

/// Ordered collection of named points for one interactive session.
#[derive(Clone, Debug, Default)]
pub struct PointRegistry {
    points: Vec<GeoPoint>,
}

impl PointRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named geographic point. An empty name is silently
    /// ignored: the registry is left unchanged and no error is raised.
    pub fn add_point(&mut self, name: impl Into<String>, latitude: f64, longitude: f64) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.points.push(GeoPoint::new(name, latitude, longitude));
    }

    /// Appends a point given in projected form, converting it to
    /// geographic on entry; only the geographic form is stored. The same
    /// empty-name rule applies. Fails if the zone is out of range, in
    /// which case nothing is appended.
    pub fn add_projected(&mut self, name: impl Into<String>, pp: &ProjectedPoint) -> Result<()> {
        let converted = to_geographic(pp)?;
        self.add_point(name, converted.latitude, converted.longitude);
        Ok(())
    }

    /// First point with the given name, in insertion order.
    pub fn find(&self, name: &str) -> Option<&GeoPoint> {
        self.points.iter().find(|p| p.name == name)
    }

    /// Point at `index` in insertion order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&GeoPoint> {
        self.points.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    /// Insertion-ordered view of all points.
    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Session reset: drops every point, keeps the registry usable.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl<'a> IntoIterator for &'a PointRegistry {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::to_projected;
    use crate::types::Hemisphere;

    #[test]
    fn appends_in_insertion_order() {
        let mut reg = PointRegistry::new();
        reg.add_point("A", 1.0, 2.0);
        reg.add_point("B", 3.0, 4.0);
        reg.add_point("C", 5.0, 6.0);
        let names: Vec<&str> = reg.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn empty_name_is_ignored_silently() {
        let mut reg = PointRegistry::new();
        reg.add_point("", 1.0, 2.0);
        assert!(reg.is_empty());
        reg.add_point("A", 1.0, 2.0);
        reg.add_point("", 9.0, 9.0);
        assert_eq!(reg.len(), 1);
        // Whitespace is a name; only the truly empty string is ignored.
        reg.add_point(" ", 9.0, 9.0);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn duplicate_names_append_and_find_returns_first() {
        let mut reg = PointRegistry::new();
        reg.add_point("P", 1.0, 1.0);
        reg.add_point("P", 2.0, 2.0);
        assert_eq!(reg.len(), 2);
        let first = reg.find("P").unwrap();
        assert_eq!(first.latitude, 1.0);
        assert!(reg.find("missing").is_none());
        assert_eq!(reg.get(1).unwrap().latitude, 2.0);
        assert!(reg.get(2).is_none());
    }

    #[test]
    fn out_of_range_coordinates_are_stored_as_given() {
        let mut reg = PointRegistry::new();
        reg.add_point("odd", 123.0, 456.0);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.find("odd").unwrap().latitude, 123.0);
    }

    #[test]
    fn projected_entry_round_trips() {
        let mut reg = PointRegistry::new();
        let original = GeoPoint::new("Rio", -22.9068, -43.1729);
        let pp = to_projected(&original).unwrap();
        reg.add_projected("Rio", &pp).unwrap();
        let stored = reg.find("Rio").unwrap();
        assert!((stored.latitude - original.latitude).abs() < 1e-9);
        assert!((stored.longitude - original.longitude).abs() < 1e-9);
    }

    #[test]
    fn projected_entry_with_bad_zone_leaves_registry_unchanged() {
        let mut reg = PointRegistry::new();
        let pp = ProjectedPoint::new(500_000.0, 0.0, 99, Hemisphere::North);
        assert!(reg.add_projected("X", &pp).is_err());
        assert!(reg.is_empty());
    }

    #[test]
    fn clear_resets_the_session() {
        let mut reg = PointRegistry::new();
        reg.add_point("A", 1.0, 2.0);
        reg.add_point("B", 3.0, 4.0);
        reg.clear();
        assert!(reg.is_empty());
        reg.add_point("C", 5.0, 6.0);
        assert_eq!(reg.len(), 1);
    }
}
