//! Route evaluator that computes path length, load, and capacity feasibility.

use crate::models::{Courier, GeoPoint, Package, RouteAssignment, Violation, ViolationType};

/// Builds route assignments for one courier and checks them against the
/// courier's capacity.
///
/// # Examples
///
/// ```
/// use courier_routing::models::{Courier, GeoPoint, Package};
/// use courier_routing::evaluation::RouteEvaluator;
///
/// let courier = Courier::new("C1", "Alex", 10.0);
/// let evaluator = RouteEvaluator::new(GeoPoint::new(0.0, 0.0), &courier);
///
/// let packages = vec![
///     Package::new("P1", GeoPoint::new(0.0, 1.0), 4.0),
///     Package::new("P2", GeoPoint::new(0.0, 2.0), 4.0),
/// ];
/// let (route, violations) = evaluator.build_assignment(&packages);
/// assert_eq!(route.len(), 2);
/// assert!(violations.is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    depot: GeoPoint,
    courier: &'a Courier,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator for routes of `courier` starting at `depot`.
    pub fn new(depot: GeoPoint, courier: &'a Courier) -> Self {
        Self { depot, courier }
    }

    /// Builds a route visiting `packages` in the given order.
    ///
    /// Returns the constructed route and any constraint violations found.
    pub fn build_assignment<'p>(
        &self,
        packages: impl IntoIterator<Item = &'p Package>,
    ) -> (RouteAssignment, Vec<Violation>) {
        let mut route = RouteAssignment::new(self.courier.id(), self.courier.name(), self.depot);
        for package in packages {
            route.push_package(package.clone());
        }
        let violations = self.check(&route);
        (route, violations)
    }

    /// Checks an existing route against this courier's capacity.
    pub fn check(&self, route: &RouteAssignment) -> Vec<Violation> {
        let mut violations = Vec::new();
        if route.total_weight() > self.courier.capacity() {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                courier_id: self.courier.id().to_string(),
                load: route.total_weight(),
                capacity: self.courier.capacity(),
            }));
        }
        violations
    }
}
