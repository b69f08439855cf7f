//! # courier-routing
//!
//! Route assignment and ordering for delivery couriers: a simplified
//! capacity-constrained vehicle routing solver built from a greedy
//! load-balancing assignment, nearest-neighbor tours from a fixed depot, and a
//! randomized swap improvement step the caller can repeat.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (GeoPoint, Package, Courier, RouteAssignment, Solution)
//! - [`distance`] — Haversine distance and open path length
//! - [`evaluation`] — Route building and capacity checking
//! - [`constructive`] — Greedy courier assignment and nearest-neighbor tours
//! - [`local_search`] — Randomized pairwise-swap improvement
//! - [`optimizer`] — `optimize` / `improve` facade and configuration
//!
//! The crate performs no I/O. Diagnostics are emitted through `tracing`; the
//! host application decides whether and how to collect them.

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod optimizer;

pub use error::ValidationError;
