//! Nearest-neighbor tour construction.
//!
//! Orders one courier's bucket greedily: starting from the depot, always visit
//! the nearest unvisited package destination.
//!
//! # Complexity
//!
//! O(n²) where n = packages in the bucket. Buckets hold dozens of packages at
//! most, so the quadratic scan is kept instead of a spatial index; a faster
//! search would have to reproduce the same tie-break to keep output stable.

use crate::distance::distance;
use crate::models::{GeoPoint, Package};

/// Orders `bucket` by repeated nearest-neighbor selection from `depot`.
///
/// On exact distance ties the package appearing earlier in `bucket` is taken.
/// Returns the visiting order and its open path length in kilometres.
///
/// # Examples
///
/// ```
/// use courier_routing::models::{GeoPoint, Package};
/// use courier_routing::constructive::nearest_neighbor_tour;
///
/// let far = Package::new("far", GeoPoint::new(0.0, 2.0), 1.0);
/// let near = Package::new("near", GeoPoint::new(0.0, 1.0), 1.0);
///
/// let (order, length) = nearest_neighbor_tour(GeoPoint::new(0.0, 0.0), &[&far, &near]);
/// assert_eq!(order[0].id(), "near");
/// assert_eq!(order[1].id(), "far");
/// assert!(length > 0.0);
/// ```
pub fn nearest_neighbor_tour<'a>(depot: GeoPoint, bucket: &[&'a Package]) -> (Vec<&'a Package>, f64) {
    let n = bucket.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = depot;
    let mut length = 0.0;

    loop {
        let mut best: Option<(usize, f64)> = None;
        for (i, package) in bucket.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = distance(current, package.destination());
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }

        match best {
            Some((next, d)) => {
                visited[next] = true;
                order.push(bucket[next]);
                length += d;
                current = bucket[next].destination();
            }
            None => break,
        }
    }

    (order, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::route_length;

    fn line_packages() -> Vec<Package> {
        vec![
            Package::new("P3", GeoPoint::new(0.0, 3.0), 1.0),
            Package::new("P1", GeoPoint::new(0.0, 1.0), 1.0),
            Package::new("P2", GeoPoint::new(0.0, 2.0), 1.0),
        ]
    }

    #[test]
    fn test_nn_follows_line() {
        let packages = line_packages();
        let bucket: Vec<&Package> = packages.iter().collect();
        let (order, _) = nearest_neighbor_tour(GeoPoint::new(0.0, 0.0), &bucket);
        let ids: Vec<&str> = order.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_nn_length_matches_route_length() {
        let depot = GeoPoint::new(0.0, 0.0);
        let packages = line_packages();
        let bucket: Vec<&Package> = packages.iter().collect();
        let (order, length) = nearest_neighbor_tour(depot, &bucket);
        let stops: Vec<GeoPoint> = order.iter().map(|p| p.destination()).collect();
        assert_eq!(length, route_length(depot, &stops));
    }

    #[test]
    fn test_nn_empty() {
        let (order, length) = nearest_neighbor_tour(GeoPoint::new(0.0, 0.0), &[]);
        assert!(order.is_empty());
        assert_eq!(length, 0.0);
    }

    #[test]
    fn test_nn_tie_prefers_earlier_in_bucket() {
        let east = Package::new("east", GeoPoint::new(0.0, 1.0), 1.0);
        let west = Package::new("west", GeoPoint::new(0.0, -1.0), 1.0);
        let depot = GeoPoint::new(0.0, 0.0);

        let (order, _) = nearest_neighbor_tour(depot, &[&east, &west]);
        assert_eq!(order[0].id(), "east");

        let (order, _) = nearest_neighbor_tour(depot, &[&west, &east]);
        assert_eq!(order[0].id(), "west");
    }

    #[test]
    fn test_nn_same_destination_keeps_input_order() {
        let spot = GeoPoint::new(0.5, 0.5);
        let a = Package::new("a", spot, 1.0);
        let b = Package::new("b", spot, 1.0);
        let (order, _) = nearest_neighbor_tour(GeoPoint::new(0.0, 0.0), &[&a, &b]);
        assert_eq!(order[0].id(), "a");
        assert_eq!(order[1].id(), "b");
    }

    #[test]
    fn test_nn_moves_from_current_position() {
        // From the depot, A is nearest; from A, C is nearer than B
        let depot = GeoPoint::new(0.0, 0.0);
        let a = Package::new("A", GeoPoint::new(0.0, 1.0), 1.0);
        let b = Package::new("B", GeoPoint::new(0.0, -1.5), 1.0);
        let c = Package::new("C", GeoPoint::new(0.0, 2.0), 1.0);
        let (order, _) = nearest_neighbor_tour(depot, &[&b, &c, &a]);
        let ids: Vec<&str> = order.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["A", "C", "B"]);
    }
}
