//! Decision policies for driving the Estate Gym environment.
//!
//! The environment itself is policy-agnostic; this crate provides the
//! [`Policy`] trait plus two simple baselines the demo driver uses:
//! a uniform-random policy and a buy-cheap/sell-dear threshold heuristic.

mod random;
mod threshold;
mod traits;

pub use random::RandomPolicy;
pub use threshold::{ThresholdConfig, ThresholdPolicy};
pub use traits::Policy;
