//! Capacity-aware load-balancing assignment.
//!
//! # Algorithm
//!
//! Packages are taken lightest first (stable sort, so equal weights keep their
//! input order). Each package goes to the least-loaded active courier that can
//! still take it without exceeding capacity; ties on load go to the courier
//! listed first. A package that fits no courier is left unassigned.
//!
//! This is a greedy bin-assignment, not an optimal bin packing. The sort
//! stability and tie-break rules decide which courier receives marginal
//! packages, so they are kept exactly as described.
//!
//! # Complexity
//!
//! O(n log n + n·m) where n = packages, m = active couriers.

use crate::models::{Courier, Package};

/// The packages greedily assigned to one courier, before tour ordering.
#[derive(Debug, Clone)]
pub struct CourierBucket<'a> {
    /// Courier receiving the packages.
    pub courier: &'a Courier,
    /// Packages in assignment order (ascending weight).
    pub packages: Vec<&'a Package>,
    /// Sum of assigned package weights.
    pub load: f64,
}

/// Result of distributing packages across couriers.
#[derive(Debug, Clone, Default)]
pub struct Bucketing<'a> {
    /// One bucket per active courier, in courier input order. Buckets may be empty.
    pub buckets: Vec<CourierBucket<'a>>,
    /// Packages no courier could take, in the order they were considered.
    pub unassigned: Vec<&'a Package>,
}

/// Distributes packages across active couriers without exceeding capacity.
///
/// Inactive couriers are skipped. With no active couriers, every package is
/// returned as unassigned.
///
/// # Examples
///
/// ```
/// use courier_routing::models::{Courier, GeoPoint, Package};
/// use courier_routing::constructive::assign_to_couriers;
///
/// let couriers = vec![Courier::new("C1", "Alex", 5.0), Courier::new("C2", "Sam", 5.0)];
/// let packages = vec![
///     Package::new("P1", GeoPoint::new(0.0, 1.0), 3.0),
///     Package::new("P2", GeoPoint::new(0.0, 2.0), 3.0),
/// ];
///
/// let result = assign_to_couriers(&packages, &couriers);
/// assert_eq!(result.buckets[0].packages[0].id(), "P1");
/// assert_eq!(result.buckets[1].packages[0].id(), "P2");
/// assert!(result.unassigned.is_empty());
/// ```
pub fn assign_to_couriers<'a>(packages: &'a [Package], couriers: &'a [Courier]) -> Bucketing<'a> {
    let mut buckets: Vec<CourierBucket<'a>> = couriers
        .iter()
        .filter(|c| c.is_active())
        .map(|courier| CourierBucket {
            courier,
            packages: Vec::new(),
            load: 0.0,
        })
        .collect();

    let mut sorted: Vec<&'a Package> = packages.iter().collect();
    sorted.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

    let mut unassigned = Vec::new();
    for package in sorted {
        // Least-loaded courier with room; first seen wins on equal load
        let mut best: Option<usize> = None;
        for (i, bucket) in buckets.iter().enumerate() {
            if bucket.load + package.weight() > bucket.courier.capacity() {
                continue;
            }
            if best.is_none_or(|b| bucket.load < buckets[b].load) {
                best = Some(i);
            }
        }

        match best {
            Some(i) => {
                buckets[i].packages.push(package);
                buckets[i].load += package.weight();
            }
            None => unassigned.push(package),
        }
    }

    Bucketing {
        buckets,
        unassigned,
    }
}
