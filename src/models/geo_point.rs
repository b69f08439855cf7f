//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
///
/// No datum correction is applied; points are treated as lying on a sphere.
///
/// # Examples
///
/// ```
/// use courier_routing::models::GeoPoint;
///
/// let depot = GeoPoint::new(48.8566, 2.3522);
/// assert_eq!(depot.lat(), 48.8566);
/// assert_eq!(depot.lng(), 2.3522);
/// assert!(depot.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Great-circle distance to another point, in kilometres.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        crate::distance::distance(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_new() {
        let p = GeoPoint::new(10.0, -20.0);
        assert_eq!(p.lat(), 10.0);
        assert_eq!(p.lng(), -20.0);
    }

    #[test]
    fn test_geo_point_finite() {
        assert!(GeoPoint::new(0.0, 0.0).is_finite());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_finite());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_geo_point_distance_to() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
        assert!(a.distance_to(&b) > 111.0 && a.distance_to(&b) < 111.4);
    }
}
