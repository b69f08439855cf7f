//! Local search operators for improving courier routes.
//!
//! - [`random_swap_improve`] — One round of randomized pairwise position swaps

mod random_swap;

pub use random_swap::{random_swap_improve, DEFAULT_SWAP_ATTEMPTS};
