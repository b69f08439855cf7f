//! Input validation for the checked optimizer entry point.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::models::{Courier, GeoPoint, Package};

/// Checks that all coordinates are finite, weights and capacities are
/// positive, and package and courier ids are unique.
///
/// Inactive couriers are validated too. Returns the first problem found.
pub fn validate_input(
    packages: &[Package],
    couriers: &[Courier],
    depot: GeoPoint,
) -> Result<(), ValidationError> {
    if !depot.is_finite() {
        return Err(ValidationError::NonFiniteDepot);
    }

    let mut package_ids = HashSet::new();
    for package in packages {
        if !package.destination().is_finite() {
            return Err(ValidationError::NonFiniteDestination {
                package_id: package.id().to_string(),
            });
        }
        let weight = package.weight();
        if !weight.is_finite() || weight <= 0.0 {
            return Err(ValidationError::InvalidWeight {
                package_id: package.id().to_string(),
                weight,
            });
        }
        if !package_ids.insert(package.id()) {
            return Err(ValidationError::DuplicatePackage {
                package_id: package.id().to_string(),
            });
        }
    }

    let mut courier_ids = HashSet::new();
    for courier in couriers {
        let capacity = courier.capacity();
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(ValidationError::InvalidCapacity {
                courier_id: courier.id().to_string(),
                capacity,
            });
        }
        if !courier_ids.insert(courier.id()) {
            return Err(ValidationError::DuplicateCourier {
                courier_id: courier.id().to_string(),
            });
        }
    }

    Ok(())
}
