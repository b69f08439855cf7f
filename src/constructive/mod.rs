//! Constructive heuristics for building initial courier routes.
//!
//! - [`assign_to_couriers`] — Greedy least-loaded bin assignment, O(n log n + n·m)
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor visiting order, O(n²)

mod load_balance;
mod nearest_neighbor;

pub use load_balance::{assign_to_couriers, Bucketing, CourierBucket};
pub use nearest_neighbor::nearest_neighbor_tour;
