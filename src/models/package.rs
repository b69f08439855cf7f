//! Delivery package type.

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// A delivery unit waiting to be routed.
///
/// Packages are owned by the host application; the optimizer only reads them
/// and clones the ones it places into a [`RouteAssignment`](super::RouteAssignment).
///
/// # Examples
///
/// ```
/// use courier_routing::models::{GeoPoint, Package};
///
/// let p = Package::new("P1", GeoPoint::new(0.0, 1.0), 4.0);
/// assert_eq!(p.id(), "P1");
/// assert_eq!(p.weight(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    id: String,
    destination: GeoPoint,
    weight: f64,
}

impl Package {
    /// Creates a package with a destination and a weight in kilograms.
    pub fn new(id: impl Into<String>, destination: GeoPoint, weight: f64) -> Self {
        Self {
            id: id.into(),
            destination,
            weight,
        }
    }

    /// Package identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Delivery destination.
    pub fn destination(&self) -> GeoPoint {
        self.destination
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_new() {
        let p = Package::new("P7", GeoPoint::new(1.5, 2.5), 3.25);
        assert_eq!(p.id(), "P7");
        assert_eq!(p.destination(), GeoPoint::new(1.5, 2.5));
        assert_eq!(p.weight(), 3.25);
    }

    #[test]
    fn test_package_owned_id() {
        let id = String::from("ORD-42");
        let p = Package::new(id, GeoPoint::new(0.0, 0.0), 1.0);
        assert_eq!(p.id(), "ORD-42");
    }
}
