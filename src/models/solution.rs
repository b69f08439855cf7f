//! Solution and violation types.

use serde::{Deserialize, Serialize};

use super::RouteAssignment;

/// A type of constraint violation in a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Courier capacity exceeded.
    CapacityExceeded {
        /// Courier whose route is overloaded.
        courier_id: String,
        /// Load carried by the route.
        load: f64,
        /// Courier capacity.
        capacity: f64,
    },
}

/// A constraint violation in a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// All route assignments produced by one optimization call.
///
/// Assignments follow the input order of active couriers; couriers that
/// received nothing are omitted. Packages that could not be placed under any
/// courier's remaining capacity are listed by id in [`Solution::unassigned`].
///
/// # Examples
///
/// ```
/// use courier_routing::models::{GeoPoint, RouteAssignment, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_assignment(RouteAssignment::new("C1", "Alex", GeoPoint::new(0.0, 0.0)));
/// sol.add_unassigned("P9");
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.num_unassigned(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    assignments: Vec<RouteAssignment>,
    unassigned: Vec<String>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route assignment.
    pub fn add_assignment(&mut self, assignment: RouteAssignment) {
        self.assignments.push(assignment);
    }

    /// Records a package that could not be placed.
    pub fn add_unassigned(&mut self, package_id: impl Into<String>) {
        self.unassigned.push(package_id.into());
    }

    /// Route assignments, one per courier that received packages.
    pub fn assignments(&self) -> &[RouteAssignment] {
        &self.assignments
    }

    /// Ids of packages left out of every route.
    pub fn unassigned(&self) -> &[String] {
        &self.unassigned
    }

    /// Looks up the assignment for a courier.
    pub fn assignment_for(&self, courier_id: &str) -> Option<&RouteAssignment> {
        self.assignments.iter().find(|a| a.courier_id() == courier_id)
    }

    /// Number of routes.
    pub fn num_routes(&self) -> usize {
        self.assignments.len()
    }

    /// Number of packages placed on a route.
    pub fn num_served(&self) -> usize {
        self.assignments.iter().map(|a| a.len()).sum()
    }

    /// Number of packages left out.
    pub fn num_unassigned(&self) -> usize {
        self.unassigned.len()
    }

    /// Total distance across all routes, in kilometres.
    pub fn total_distance(&self) -> f64 {
        self.assignments.iter().map(|a| a.total_distance()).sum()
    }

    /// Returns `true` if there are no routes.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub(crate) fn from_parts(assignments: Vec<RouteAssignment>, unassigned: Vec<String>) -> Self {
        Self {
            assignments,
            unassigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeoPoint, Package};

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new();
        assert!(sol.is_empty());
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.num_served(), 0);
        assert_eq!(sol.num_unassigned(), 0);
        assert_eq!(sol.total_distance(), 0.0);
    }

    #[test]
    fn test_solution_with_routes() {
        let depot = GeoPoint::new(0.0, 0.0);
        let mut r1 = RouteAssignment::new("C1", "Alex", depot);
        r1.push_package(Package::new("P1", GeoPoint::new(0.0, 1.0), 1.0));
        let mut r2 = RouteAssignment::new("C2", "Sam", depot);
        r2.push_package(Package::new("P2", GeoPoint::new(1.0, 0.0), 1.0));
        r2.push_package(Package::new("P3", GeoPoint::new(2.0, 0.0), 1.0));
        let expected = r1.total_distance() + r2.total_distance();

        let mut sol = Solution::new();
        sol.add_assignment(r1);
        sol.add_assignment(r2);
        sol.add_unassigned("P4");

        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.num_served(), 3);
        assert_eq!(sol.unassigned(), &["P4".to_string()]);
        assert!((sol.total_distance() - expected).abs() < 1e-9);
        assert_eq!(sol.assignment_for("C2").map(|a| a.len()), Some(2));
        assert!(sol.assignment_for("C3").is_none());
    }

    #[test]
    fn test_solution_serialized_shape() {
        let mut route = RouteAssignment::new("C1", "Alex", GeoPoint::new(0.0, 0.0));
        route.push_package(Package::new("P1", GeoPoint::new(0.0, 1.0), 2.0));
        let mut sol = Solution::new();
        sol.add_assignment(route);
        sol.add_unassigned("P2");

        let value = serde_json::to_value(&sol).expect("serializable");
        let first = &value["assignments"][0];
        assert_eq!(first["courier_id"], "C1");
        assert_eq!(first["packages"][0]["id"], "P1");
        assert_eq!(first["route_points"][0]["lat"], 0.0);
        assert_eq!(value["unassigned"][0], "P2");

        let back: Solution = serde_json::from_value(value).expect("deserializable");
        assert_eq!(back.num_routes(), 1);
        assert_eq!(back.assignments()[0].package_ids(), vec!["P1"]);
        assert_eq!(back.unassigned(), sol.unassigned());
    }

    #[test]
    fn test_violation_types() {
        let v = Violation::new(ViolationType::CapacityExceeded {
            courier_id: "C1".into(),
            load: 12.0,
            capacity: 10.0,
        });
        assert!(matches!(
            v.kind,
            ViolationType::CapacityExceeded { load, capacity, .. } if load > capacity
        ));
    }

    #[test]
    fn test_violation_serialized_shape() {
        let v = Violation::new(ViolationType::CapacityExceeded {
            courier_id: "C1".into(),
            load: 12.0,
            capacity: 10.0,
        });
        let value = serde_json::to_value(&v).expect("serializable");
        assert_eq!(value["kind"]["CapacityExceeded"]["courier_id"], "C1");
        assert_eq!(value["kind"]["CapacityExceeded"]["load"], 12.0);

        let back: Violation = serde_json::from_value(value).expect("deserializable");
        assert_eq!(back, v);
    }
}
