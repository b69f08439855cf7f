//! Route optimizer facade: assignment, tour construction, and improvement.

use rand::Rng;
use tracing::{debug, instrument, trace, warn};

use super::{validate_input, OptimizerConfig};
use crate::constructive::{assign_to_couriers, nearest_neighbor_tour};
use crate::error::ValidationError;
use crate::evaluation::RouteEvaluator;
use crate::local_search::random_swap_improve;
use crate::models::{Courier, GeoPoint, Package, RouteAssignment, Solution};

/// Builds courier routes and improves them on request.
///
/// The optimizer holds only its configuration; every call reads its
/// arguments and returns fresh output, so one instance can be shared across
/// threads.
///
/// # Examples
///
/// ```
/// use courier_routing::models::{Courier, GeoPoint, Package};
/// use courier_routing::optimizer::RouteOptimizer;
///
/// let depot = GeoPoint::new(0.0, 0.0);
/// let couriers = vec![Courier::new("C1", "Alex", 10.0)];
/// let packages = vec![
///     Package::new("P2", GeoPoint::new(0.0, 2.0), 4.0),
///     Package::new("P1", GeoPoint::new(0.0, 1.0), 4.0),
/// ];
///
/// let optimizer = RouteOptimizer::default();
/// let solution = optimizer.optimize(&packages, &couriers, depot);
/// assert_eq!(solution.num_routes(), 1);
/// assert_eq!(solution.assignments()[0].package_ids(), vec!["P1", "P2"]);
///
/// let improved = optimizer.improve(&solution);
/// assert!(improved.total_distance() <= solution.total_distance());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Assigns packages to active couriers and orders each courier's route.
    ///
    /// Couriers that receive nothing are omitted. Packages that fit no
    /// courier's remaining capacity are left out of every route and listed in
    /// [`Solution::unassigned`].
    #[instrument(level = "debug", skip_all, fields(packages = packages.len(), couriers = couriers.len()))]
    pub fn optimize(&self, packages: &[Package], couriers: &[Courier], depot: GeoPoint) -> Solution {
        let bucketing = assign_to_couriers(packages, couriers);

        let mut assignments = Vec::with_capacity(bucketing.buckets.len());
        for bucket in &bucketing.buckets {
            if bucket.packages.is_empty() {
                continue;
            }

            let (order, length) = nearest_neighbor_tour(depot, &bucket.packages);
            let evaluator = RouteEvaluator::new(depot, bucket.courier);
            let (route, violations) = evaluator.build_assignment(order);
            debug_assert!(violations.is_empty(), "bucket exceeds capacity: {violations:?}");

            trace!(
                courier = bucket.courier.id(),
                stops = route.len(),
                load = bucket.load,
                capacity = bucket.courier.capacity(),
                distance_km = length,
                "courier route built"
            );
            assignments.push(route);
        }

        let unassigned: Vec<String> = bucketing
            .unassigned
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        if !unassigned.is_empty() {
            warn!(
                count = unassigned.len(),
                "packages left unassigned: no active courier had remaining capacity"
            );
        }

        let solution = Solution::from_parts(assignments, unassigned);
        debug!(
            routes = solution.num_routes(),
            served = solution.num_served(),
            unassigned = solution.num_unassigned(),
            distance_km = solution.total_distance(),
            "optimization finished"
        );
        solution
    }

    /// Validates the input, then runs [`optimize`](Self::optimize).
    pub fn optimize_checked(
        &self,
        packages: &[Package],
        couriers: &[Courier],
        depot: GeoPoint,
    ) -> Result<Solution, ValidationError> {
        validate_input(packages, couriers, depot)?;
        Ok(self.optimize(packages, couriers, depot))
    }

    /// Runs one improvement round on a single route with the given random source.
    ///
    /// Returns a strictly shorter route, or a clone of `assignment` if the
    /// round found nothing better.
    pub fn improve_assignment_with<R: Rng>(
        &self,
        assignment: &RouteAssignment,
        rng: &mut R,
    ) -> RouteAssignment {
        match random_swap_improve(assignment, self.config.swap_attempts, rng) {
            Some(better) => {
                trace!(
                    courier = assignment.courier_id(),
                    from_km = assignment.total_distance(),
                    to_km = better.total_distance(),
                    "route improved"
                );
                better
            }
            None => assignment.clone(),
        }
    }

    /// Runs one improvement round on a single route using thread-local entropy.
    pub fn improve_assignment(&self, assignment: &RouteAssignment) -> RouteAssignment {
        self.improve_assignment_with(assignment, &mut rand::rng())
    }

    /// Runs one improvement round on every route of `solution`.
    ///
    /// Each route is improved independently. The unassigned list is carried
    /// over unchanged.
    pub fn improve_with<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Solution {
        let assignments = solution
            .assignments()
            .iter()
            .map(|a| self.improve_assignment_with(a, &mut *rng))
            .collect();
        Solution::from_parts(assignments, solution.unassigned().to_vec())
    }

    /// Runs one improvement round on every route using thread-local entropy.
    pub fn improve(&self, solution: &Solution) -> Solution {
        self.improve_with(solution, &mut rand::rng())
    }

    /// Applies `rounds` improvement rounds in sequence, feeding each result
    /// into the next.
    pub fn refine_with<R: Rng>(&self, solution: &Solution, rounds: usize, rng: &mut R) -> Solution {
        let mut current = solution.clone();
        for _ in 0..rounds {
            current = self.improve_with(&current, &mut *rng);
        }
        debug!(
            rounds,
            from_km = solution.total_distance(),
            to_km = current.total_distance(),
            "refinement finished"
        );
        current
    }
}
