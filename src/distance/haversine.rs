//! Haversine distance and path length.

use crate::models::GeoPoint;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometres.
///
/// Uses the haversine formula. The result is symmetric and zero for
/// identical points.
///
/// # Examples
///
/// ```
/// use courier_routing::models::GeoPoint;
/// use courier_routing::distance::distance;
///
/// let a = GeoPoint::new(0.0, 0.0);
/// let b = GeoPoint::new(0.0, 1.0);
/// // One degree of longitude on the equator is ~111.19 km
/// assert!((distance(a, b) - 111.19).abs() < 0.01);
/// assert_eq!(distance(a, a), 0.0);
/// ```
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let dlat = (b.lat() - a.lat()).to_radians();
    let dlng = (b.lng() - a.lng()).to_radians();

    let sin_lat = (dlat / 2.0).sin();
    let sin_lng = (dlng / 2.0).sin();
    let h = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng;

    // Rounding can push h marginally above 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * h.min(1.0).sqrt().asin()
}

/// Length of the open path `depot → stops[0] → … → stops[n-1]`, in kilometres.
///
/// Returns 0 for an empty sequence.
///
/// # Examples
///
/// ```
/// use courier_routing::models::GeoPoint;
/// use courier_routing::distance::{distance, route_length};
///
/// let depot = GeoPoint::new(0.0, 0.0);
/// let stops = [GeoPoint::new(0.0, 1.0), GeoPoint::new(0.0, 2.0)];
/// let expected = distance(depot, stops[0]) + distance(stops[0], stops[1]);
/// assert!((route_length(depot, &stops) - expected).abs() < 1e-9);
/// assert_eq!(route_length(depot, &[]), 0.0);
/// ```
pub fn route_length(depot: GeoPoint, stops: &[GeoPoint]) -> f64 {
    let mut total = 0.0;
    let mut prev = depot;
    for &stop in stops {
        total += distance(prev, stop);
        prev = stop;
    }
    total
}
