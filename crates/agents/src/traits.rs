//! The policy trait all decision-makers implement.

use types::{Action, ActionOutcome, Observation};

/// A decision-making policy over the environment's observation space.
///
/// Policies receive the current observation and pick one of the three
/// discrete actions. They may keep internal state (an RNG, running
/// statistics) but cannot see the environment beyond the observation.
pub trait Policy {
    /// Pick an action for the current observation.
    fn decide(&mut self, observation: &Observation) -> Action;

    /// Hear back what the environment actually did with the last decision.
    ///
    /// The observation carries no holdings information, so stateful policies
    /// use this to track confirmed buys and sells. Default: ignore it.
    fn observe_outcome(&mut self, _outcome: &ActionOutcome) {}

    /// Human-readable policy name for logs and reports.
    fn name(&self) -> &'static str;
}
