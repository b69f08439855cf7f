//! Courier type with weight capacity.

use serde::{Deserialize, Serialize};

/// A courier that can carry packages up to a weight capacity.
///
/// Only active couriers take part in assignment.
///
/// # Examples
///
/// ```
/// use courier_routing::models::Courier;
///
/// let c = Courier::new("C1", "Alex", 25.0);
/// assert_eq!(c.id(), "C1");
/// assert_eq!(c.capacity(), 25.0);
/// assert!(c.is_active());
///
/// let off_duty = c.with_active(false);
/// assert!(!off_duty.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    id: String,
    name: String,
    capacity: f64,
    active: bool,
}

impl Courier {
    /// Creates an active courier with the given capacity in kilograms.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            active: true,
        }
    }

    /// Sets whether this courier is on duty.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Courier identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum load in kilograms.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Whether this courier participates in assignment.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courier_new() {
        let c = Courier::new("C1", "Sam", 10.0);
        assert_eq!(c.id(), "C1");
        assert_eq!(c.name(), "Sam");
        assert_eq!(c.capacity(), 10.0);
        assert!(c.is_active());
    }

    #[test]
    fn test_courier_builder() {
        let c = Courier::new("C2", "Robin", 30.0).with_active(false);
        assert!(!c.is_active());
        let c = c.with_active(true);
        assert!(c.is_active());
    }
}
