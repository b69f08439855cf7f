//! Per-courier route assignment.

use serde::{Deserialize, Serialize};

use super::{GeoPoint, Package};

/// The ordered packages one courier delivers, starting from the depot.
///
/// Route points, total distance and total weight are kept in step with the
/// package sequence as packages are pushed. The route is open: it ends at the
/// last delivery and does not return to the depot.
///
/// The total weight is summed in ascending-weight order regardless of the
/// visiting order, so it is bit-identical to the load the courier was
/// assigned and does not drift when stops are reordered.
///
/// # Examples
///
/// ```
/// use courier_routing::models::{GeoPoint, Package, RouteAssignment};
///
/// let mut route = RouteAssignment::new("C1", "Alex", GeoPoint::new(0.0, 0.0));
/// route.push_package(Package::new("P1", GeoPoint::new(0.0, 1.0), 4.0));
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.route_points().len(), 2);
/// assert_eq!(route.total_weight(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteAssignment {
    courier_id: String,
    courier_name: String,
    depot: GeoPoint,
    packages: Vec<Package>,
    route_points: Vec<GeoPoint>,
    total_distance: f64,
    total_weight: f64,
}

impl RouteAssignment {
    /// Creates an empty route for a courier starting at `depot`.
    pub fn new(courier_id: impl Into<String>, courier_name: impl Into<String>, depot: GeoPoint) -> Self {
        Self {
            courier_id: courier_id.into(),
            courier_name: courier_name.into(),
            depot,
            packages: Vec::new(),
            route_points: vec![depot],
            total_distance: 0.0,
            total_weight: 0.0,
        }
    }

    /// Appends a package as the next stop.
    pub fn push_package(&mut self, package: Package) {
        let from = self.route_points.last().copied().unwrap_or(self.depot);
        let to = package.destination();
        self.total_distance += crate::distance::distance(from, to);
        self.route_points.push(to);
        self.packages.push(package);
        self.total_weight = ascending_weight_sum(&self.packages);
    }

    /// Returns a route for the same courier and depot visiting `packages` in order.
    pub fn with_packages(&self, packages: impl IntoIterator<Item = Package>) -> Self {
        let mut route = Self::new(self.courier_id.clone(), self.courier_name.clone(), self.depot);
        for package in packages {
            route.push_package(package);
        }
        route
    }

    /// Courier identifier.
    pub fn courier_id(&self) -> &str {
        &self.courier_id
    }

    /// Courier display name.
    pub fn courier_name(&self) -> &str {
        &self.courier_name
    }

    /// Start location of the route.
    pub fn depot(&self) -> GeoPoint {
        self.depot
    }

    /// Packages in visiting order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Package identifiers in visiting order.
    pub fn package_ids(&self) -> Vec<&str> {
        self.packages.iter().map(|p| p.id()).collect()
    }

    /// Depot followed by each destination in visiting order.
    pub fn route_points(&self) -> &[GeoPoint] {
        &self.route_points
    }

    /// Total path length in kilometres.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sum of package weights in kilograms.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of packages on this route.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns `true` if no package is assigned.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

fn ascending_weight_sum(packages: &[Package]) -> f64 {
    let mut weights: Vec<f64> = packages.iter().map(Package::weight).collect();
    weights.sort_by(f64::total_cmp);
    weights.into_iter().fold(0.0, |acc, w| acc + w)
}
