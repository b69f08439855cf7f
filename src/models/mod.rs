//! Domain model types for courier routing.
//!
//! Provides geographic points, packages with weights, couriers with
//! capacities, per-courier route assignments, and the solution that groups
//! them together with the packages nobody could take.

mod courier;
mod geo_point;
mod package;
mod route;
mod solution;

pub use courier::Courier;
pub use geo_point::GeoPoint;
pub use package::Package;
pub use route::RouteAssignment;
pub use solution::{Solution, Violation, ViolationType};
