//! Great-circle distance model.
//!
//! Straight-line distance on a spherical Earth is used as a proxy for road
//! distance. Routes are open paths starting at the depot.

mod haversine;

pub use haversine::{distance, route_length, EARTH_RADIUS_KM};
