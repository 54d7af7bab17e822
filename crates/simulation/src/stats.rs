//! Per-episode statistics.

use events::MarketEvent;

/// Counters accumulated over one episode, reset with the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpisodeStats {
    /// Steps taken (terminal early-returns excluded).
    pub steps: u64,
    /// Successful purchases.
    pub buys: u64,
    /// Successful sales.
    pub sells: u64,
    /// Wait actions taken.
    pub waits: u64,
    /// Buys rejected for insufficient funds.
    pub rejected_buys: u64,
    /// Sells rejected for empty holdings.
    pub rejected_sells: u64,
    /// Actions overridden by the anti-stalling rule.
    pub forced_buys: u64,
    /// Event ticks by kind.
    pub crisis_ticks: u64,
    pub metro_ticks: u64,
    pub shopping_ticks: u64,
    pub crime_wave_ticks: u64,
    pub neutral_ticks: u64,
}

impl EpisodeStats {
    /// Record one applied market event.
    pub(crate) fn record_event(&mut self, event: MarketEvent) {
        match event {
            MarketEvent::Crisis => self.crisis_ticks += 1,
            MarketEvent::Metro => self.metro_ticks += 1,
            MarketEvent::Shopping => self.shopping_ticks += 1,
            MarketEvent::CrimeWave => self.crime_wave_ticks += 1,
            MarketEvent::Neutral => self.neutral_ticks += 1,
        }
    }

    /// Total event ticks of any kind.
    pub fn event_ticks(&self) -> u64 {
        self.crisis_ticks
            + self.metro_ticks
            + self.shopping_ticks
            + self.crime_wave_ticks
            + self.neutral_ticks
    }

    /// Total actions that degraded to no-ops.
    pub fn rejected(&self) -> u64 {
        self.rejected_buys + self.rejected_sells
    }
}
