//! Driver configuration for the Estate Gym binary.

use clap::ValueEnum;

/// Which baseline policy drives the episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Uniform-random actions.
    Random,
    /// Buy-cheap / sell-dear threshold heuristic.
    Threshold,
}

/// Resolved settings for one driver run.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Steps to run per episode (episodes can end earlier at inventory end).
    pub steps: u64,
    /// Episodes to run back to back.
    pub episodes: u32,
    /// Master seed for environment and policy.
    pub seed: u64,
    /// Listings generated per episode.
    pub listings: usize,
    /// Agent starting balance.
    pub initial_cash: f64,
    /// Steps between progress log lines.
    pub report_interval: u64,
    /// Decision policy.
    pub policy: PolicyKind,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            steps: 500,
            episodes: 1,
            seed: 42,
            listings: 100_000,
            initial_cash: 100_000.0,
            report_interval: 50,
            policy: PolicyKind::Random,
        }
    }
}
