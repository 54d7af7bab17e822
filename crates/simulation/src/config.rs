//! Central configuration for the Estate Gym environment.

use serde::{Deserialize, Serialize};

use market::sao_paulo_districts;
use types::Neighborhood;

use crate::error::{EnvError, Result};

/// Configuration for one [`crate::MarketSimulator`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Agent starting balance, restored on every reset.
    pub initial_cash: f64,
    /// Listings generated per episode.
    pub listing_count: usize,
    /// Neighborhood quality mapping sampled by the generator.
    pub neighborhoods: Vec<Neighborhood>,
    /// A market event fires whenever `step_cursor % event_interval == 0`.
    pub event_interval: u64,
    /// Consecutive waits before the next action is forced to Buy.
    pub max_wait_steps: u32,
    /// Holdings older than this many steps on the market sell at a markdown.
    pub stale_after: u32,
    /// Multiplier applied to the sale price of a stale holding.
    pub stale_markdown: f64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            initial_cash: 100_000.0,
            listing_count: 100_000,
            neighborhoods: sao_paulo_districts(),
            event_interval: 10,
            max_wait_steps: 20,
            stale_after: 10,
            stale_markdown: 0.9,
        }
    }
}

impl EnvConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-episode listing count.
    pub fn with_listing_count(mut self, count: usize) -> Self {
        self.listing_count = count;
        self
    }

    /// Set the agent's starting balance.
    pub fn with_initial_cash(mut self, cash: f64) -> Self {
        self.initial_cash = cash;
        self
    }

    /// Replace the neighborhood mapping.
    pub fn with_neighborhoods(mut self, neighborhoods: Vec<Neighborhood>) -> Self {
        self.neighborhoods = neighborhoods;
        self
    }

    /// Set the market event interval.
    pub fn with_event_interval(mut self, interval: u64) -> Self {
        self.event_interval = interval;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.neighborhoods.is_empty() {
            return Err(EnvError::EmptyNeighborhoods);
        }
        if self.listing_count < 2 {
            return Err(EnvError::InventoryTooSmall(self.listing_count));
        }
        if self.event_interval == 0 {
            return Err(EnvError::ZeroEventInterval);
        }
        if self.initial_cash < 0.0 {
            return Err(EnvError::NegativeInitialCash);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EnvConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_neighborhoods() {
        let config = EnvConfig::default().with_neighborhoods(Vec::new());
        assert_eq!(config.validate(), Err(EnvError::EmptyNeighborhoods));
    }

    #[test]
    fn test_rejects_tiny_inventory() {
        let config = EnvConfig::default().with_listing_count(1);
        assert_eq!(config.validate(), Err(EnvError::InventoryTooSmall(1)));
    }

    #[test]
    fn test_rejects_zero_event_interval() {
        let config = EnvConfig::default().with_event_interval(0);
        assert_eq!(config.validate(), Err(EnvError::ZeroEventInterval));
    }
}
