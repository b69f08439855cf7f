//! Randomized pairwise-swap improvement.
//!
//! # Algorithm
//!
//! Starting from the current visiting order, draw two positions uniformly at
//! random and swap them, `attempts` times in a row. A draw that picks the same
//! position twice does nothing. The perturbed order is kept only if its path
//! length is strictly shorter than the current one.
//!
//! This is a single round with no adjacency awareness (unlike 2-opt), so many
//! rounds return nothing. Callers invoke it repeatedly and keep the best
//! route seen.
//!
//! # Complexity
//!
//! O(attempts + n) per round, n = packages on the route.

use rand::Rng;

use crate::distance::route_length;
use crate::models::{GeoPoint, Package, RouteAssignment};

/// Number of random swaps drawn per improvement round.
pub const DEFAULT_SWAP_ATTEMPTS: usize = 10;

/// Runs one round of random swaps on `assignment`.
///
/// Returns the perturbed route if it is strictly shorter, or `None` if the
/// round found no improvement. Routes with fewer than two packages cannot be
/// perturbed and always return `None`.
///
/// # Examples
///
/// ```
/// use courier_routing::models::{GeoPoint, Package, RouteAssignment};
/// use courier_routing::local_search::random_swap_improve;
/// use rand::SeedableRng;
///
/// let mut route = RouteAssignment::new("C1", "Alex", GeoPoint::new(0.0, 0.0));
/// route.push_package(Package::new("far", GeoPoint::new(0.0, 2.0), 1.0));
/// route.push_package(Package::new("near", GeoPoint::new(0.0, 1.0), 1.0));
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// if let Some(better) = random_swap_improve(&route, 10, &mut rng) {
///     assert!(better.total_distance() < route.total_distance());
/// }
/// ```
pub fn random_swap_improve<R: Rng>(
    assignment: &RouteAssignment,
    attempts: usize,
    rng: &mut R,
) -> Option<RouteAssignment> {
    let n = assignment.len();
    if n < 2 {
        return None;
    }

    let mut order: Vec<&Package> = assignment.packages().iter().collect();
    for _ in 0..attempts {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        if i != j {
            order.swap(i, j);
        }
    }

    let stops: Vec<GeoPoint> = order.iter().map(|p| p.destination()).collect();
    let length = route_length(assignment.depot(), &stops);
    if length < assignment.total_distance() {
        Some(assignment.with_packages(order.into_iter().cloned()))
    } else {
        None
    }
}
