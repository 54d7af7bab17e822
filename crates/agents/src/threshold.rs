//! Buy-cheap / sell-dear threshold heuristic.

use types::{Action, ActionOutcome, Observation};

use crate::traits::Policy;

/// Tuning for [`ThresholdPolicy`], in normalized observation units.
#[derive(Debug, Clone)]
pub struct ThresholdConfig {
    /// Buy when the normalized price is at or below this level.
    pub buy_below: f64,
    /// Sell a holding when the listing under the cursor is at or above this
    /// level (a proxy for a hot market).
    pub sell_above: f64,
    /// Skip listings in neighborhoods below this quality index.
    pub min_quality: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            // PRICE_NORM is 5M, so 0.04 targets listings under 200k: the
            // break-even point of the purchase reward.
            buy_below: 0.04,
            sell_above: 0.2,
            min_quality: 0.75,
        }
    }
}

/// Buys affordable, decent-quality listings and sells into expensive markets.
///
/// Tracks whether it is holding anything so it does not spam Sell while
/// empty; the environment would tolerate that, but the tag noise is useless.
pub struct ThresholdPolicy {
    config: ThresholdConfig,
    held: usize,
}

impl ThresholdPolicy {
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config, held: 0 }
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new(ThresholdConfig::default())
    }
}

impl Policy for ThresholdPolicy {
    fn decide(&mut self, observation: &Observation) -> Action {
        // PRICE_NORM is 5x CASH_NORM, so rescale before comparing.
        let affordable = observation.price * 5.0 <= observation.cash;
        if observation.price <= self.config.buy_below
            && observation.quality >= self.config.min_quality
            && affordable
        {
            return Action::Buy;
        }
        if self.held > 0 && observation.price >= self.config.sell_above {
            return Action::Sell;
        }
        Action::Wait
    }

    fn name(&self) -> &'static str {
        "threshold"
    }

    fn observe_outcome(&mut self, outcome: &ActionOutcome) {
        match outcome {
            ActionOutcome::Bought => self.held += 1,
            ActionOutcome::Sold => self.held = self.held.saturating_sub(1),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(price: f64, quality: f64, cash: f64) -> Observation {
        Observation {
            price,
            demand: 0.5,
            quality,
            crime: 0.5,
            infrastructure: 0.5,
            cash,
        }
    }

    #[test]
    fn test_buys_cheap_quality_listings() {
        let mut policy = ThresholdPolicy::default();
        // price 0.03 of 5M = 150k, cash 0.2 of 1M = 200k
        assert_eq!(policy.decide(&obs(0.03, 0.9, 0.2)), Action::Buy);
    }

    #[test]
    fn test_skips_low_quality() {
        let mut policy = ThresholdPolicy::default();
        assert_eq!(policy.decide(&obs(0.03, 0.7, 0.2)), Action::Wait);
    }

    #[test]
    fn test_sells_only_while_holding() {
        let mut policy = ThresholdPolicy::default();
        let hot = obs(0.5, 0.9, 0.1);
        assert_eq!(policy.decide(&hot), Action::Wait);

        policy.observe_outcome(&ActionOutcome::Bought);
        assert_eq!(policy.decide(&hot), Action::Sell);

        policy.observe_outcome(&ActionOutcome::Sold);
        assert_eq!(policy.decide(&hot), Action::Wait);
    }

    #[test]
    fn test_waits_when_unaffordable() {
        let mut policy = ThresholdPolicy::default();
        // price 0.03 of 5M = 150k, cash 0.02 of 1M = 20k
        assert_eq!(policy.decide(&obs(0.03, 0.9, 0.02)), Action::Wait);
    }
}
