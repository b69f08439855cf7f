//! Public entry point: build courier routes, then improve them round by round.
//!
//! - [`RouteOptimizer`] — `optimize` / `improve` facade over the heuristics
//! - [`OptimizerConfig`] — Tunables (swap attempts per improvement round)
//! - [`validate_input`] — Optional input checks used by `optimize_checked`

mod config;
mod engine;
mod validate;

pub use config::OptimizerConfig;
pub use engine::RouteOptimizer;
pub use validate::validate_input;
