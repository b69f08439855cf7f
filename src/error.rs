use thiserror::Error;

/// Input rejected by [`RouteOptimizer::optimize_checked`](crate::optimizer::RouteOptimizer::optimize_checked).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Depot coordinate is not finite")]
    NonFiniteDepot,
    #[error("Package {package_id} has a non-finite destination")]
    NonFiniteDestination { package_id: String },
    #[error("Package {package_id} has invalid weight {weight}")]
    InvalidWeight { package_id: String, weight: f64 },
    #[error("Courier {courier_id} has invalid capacity {capacity}")]
    InvalidCapacity { courier_id: String, capacity: f64 },
    #[error("Package {package_id} appears more than once")]
    DuplicatePackage { package_id: String },
    #[error("Courier {courier_id} appears more than once")]
    DuplicateCourier { courier_id: String },
}
