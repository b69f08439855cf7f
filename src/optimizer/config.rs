//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::local_search::DEFAULT_SWAP_ATTEMPTS;

/// Configuration for [`RouteOptimizer`](super::RouteOptimizer).
///
/// # Examples
///
/// ```
/// use courier_routing::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default();
/// assert_eq!(config.swap_attempts, 10);
///
/// let config = OptimizerConfig::default().with_swap_attempts(25);
/// assert_eq!(config.swap_attempts, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Random swaps drawn per improvement round.
    pub swap_attempts: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            swap_attempts: DEFAULT_SWAP_ATTEMPTS,
        }
    }
}

impl OptimizerConfig {
    /// Sets the number of random swaps drawn per improvement round.
    pub fn with_swap_attempts(mut self, n: usize) -> Self {
        self.swap_attempts = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        assert_eq!(OptimizerConfig::default().swap_attempts, 10);
    }

    #[test]
    fn test_config_deserialize_fills_defaults() {
        let config: OptimizerConfig = serde_json::from_str("{}").expect("valid json");
        assert_eq!(config, OptimizerConfig::default());

        let config: OptimizerConfig =
            serde_json::from_str(r#"{"swap_attempts": 3}"#).expect("valid json");
        assert_eq!(config.swap_attempts, 3);
    }
}
