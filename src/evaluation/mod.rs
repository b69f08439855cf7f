//! Route construction from ordered packages and capacity checking.

mod evaluator;

pub use evaluator::RouteEvaluator;
