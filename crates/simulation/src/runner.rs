//! The market simulator environment.
//!
//! [`MarketSimulator`] owns the inventory arena and the agent's state (cash,
//! holdings, step cursor, wait counter) and exposes the
//! `reset` / `observe` / `step` / `portfolio_value` surface an external
//! decision-making agent drives.
//!
//! # Holdings and the arena
//!
//! Holdings are FIFO indices into the inventory arena rather than copies.
//! Market events keep mutating held listings' prices in place, so a sale
//! settles against the *current* market price, and `portfolio_value` marks
//! holdings to the live market. Sold listings stay in the arena; the cursor
//! has already moved past them.
//!
//! # Failure semantics
//!
//! `step` never fails. Inapplicable actions keep the original no-op semantics
//! (zero reward, no state change) and report a tagged
//! [`ActionOutcome::Rejected`] so callers can tell why.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use market::{GeneratorConfig, MarketGenerator};
use types::{
    Action, ActionOutcome, Listing, Observation, RejectReason, Transaction, TransactionKind,
};

use crate::config::EnvConfig;
use crate::error::Result;
use crate::stats::EpisodeStats;

/// Result of one `step` call.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Post-mutation observation of the listing under the cursor.
    pub observation: Observation,
    /// Reward earned this step.
    pub reward: f64,
    /// Whether the episode has ended.
    pub terminal: bool,
    /// What the step actually did.
    pub outcome: ActionOutcome,
}

/// The real-estate market environment.
pub struct MarketSimulator {
    config: EnvConfig,
    rng: StdRng,
    /// Owned, contiguous arena of listings; the episode's market stream.
    inventory: Vec<Listing>,
    cash: f64,
    /// FIFO indices into the arena for currently-owned listings.
    holdings: VecDeque<usize>,
    step_cursor: usize,
    wait_counter: u32,
    last_transaction: Option<Transaction>,
    stats: EpisodeStats,
}

impl MarketSimulator {
    /// Build a simulator and generate its first inventory.
    ///
    /// Deterministic given the same config and seed.
    pub fn new(config: EnvConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut sim = Self {
            rng: StdRng::seed_from_u64(seed),
            inventory: Vec::new(),
            cash: config.initial_cash,
            holdings: VecDeque::new(),
            step_cursor: 0,
            wait_counter: 0,
            last_transaction: None,
            stats: EpisodeStats::default(),
            config,
        };
        sim.regenerate_inventory();
        Ok(sim)
    }

    /// Start a fresh episode: new inventory, initial cash, empty holdings.
    ///
    /// Returns the initial observation.
    pub fn reset(&mut self) -> Observation {
        self.regenerate_inventory();
        self.cash = self.config.initial_cash;
        self.holdings.clear();
        self.step_cursor = 0;
        self.wait_counter = 0;
        self.last_transaction = None;
        self.stats = EpisodeStats::default();
        debug!(listings = self.inventory.len(), "episode reset");
        self.observe()
    }

    /// Observation for the listing under the cursor, or all zeros once the
    /// cursor has run past the inventory.
    pub fn observe(&self) -> Observation {
        match self.inventory.get(self.step_cursor) {
            Some(listing) => Observation::from_listing(listing, self.cash),
            None => Observation::zeroed(),
        }
    }

    /// Execute one action and advance the market by one step.
    pub fn step(&mut self, action: Action) -> StepResult {
        // The last listing is never offered; reaching it ends the episode.
        if self.step_cursor >= self.inventory.len() - 1 {
            return StepResult {
                observation: self.observe(),
                reward: 0.0,
                terminal: true,
                outcome: ActionOutcome::Terminal,
            };
        }

        let action = if self.wait_counter >= self.config.max_wait_steps {
            self.stats.forced_buys += 1;
            debug!(
                wait_counter = self.wait_counter,
                "anti-stalling override: forcing buy"
            );
            Action::Buy
        } else {
            action
        };

        let (reward, outcome) = match action {
            Action::Buy => self.try_buy(),
            Action::Sell => self.try_sell(),
            Action::Wait => {
                self.wait_counter += 1;
                self.stats.waits += 1;
                (0.0, ActionOutcome::Waited)
            }
        };

        if self.step_cursor as u64 % self.config.event_interval == 0 {
            let event = events::apply_random_event(&mut self.rng, &mut self.inventory);
            self.stats.record_event(event);
            debug!(%event, step = self.step_cursor, "market event tick");
        }

        self.step_cursor += 1;
        self.stats.steps += 1;

        StepResult {
            observation: self.observe(),
            reward,
            terminal: false,
            outcome,
        }
    }

    /// Noisy mark-to-market estimate of the holdings' total value.
    ///
    /// Re-drawn on every call; for reporting net worth, not for decisions.
    pub fn portfolio_value(&mut self) -> f64 {
        let mut total = 0.0;
        for &idx in &self.holdings {
            total += self.inventory[idx].price.to_float() * self.rng.random_range(0.9..1.3);
        }
        total
    }

    /// Cash plus the noisy portfolio estimate.
    pub fn net_worth(&mut self) -> f64 {
        self.cash + self.portfolio_value()
    }

    // =========================================================================
    // Read access for drivers and renderers
    // =========================================================================

    /// Agent's available cash.
    pub fn cash(&self) -> f64 {
        self.cash
    }

    /// Currently-owned listings, oldest first.
    pub fn holdings(&self) -> Vec<&Listing> {
        self.holdings.iter().map(|&idx| &self.inventory[idx]).collect()
    }

    /// Number of currently-owned listings.
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Current position in the market stream.
    pub fn step_cursor(&self) -> usize {
        self.step_cursor
    }

    /// Steps since the last successful buy or sell.
    pub fn wait_counter(&self) -> u32 {
        self.wait_counter
    }

    /// The full inventory arena.
    pub fn inventory(&self) -> &[Listing] {
        &self.inventory
    }

    /// The listing currently under the cursor, if any.
    pub fn current_listing(&self) -> Option<&Listing> {
        self.inventory.get(self.step_cursor)
    }

    /// The most recent completed buy or sell this episode.
    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.last_transaction.as_ref()
    }

    /// Statistics for the current episode.
    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    /// The environment configuration.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn regenerate_inventory(&mut self) {
        let gen_config = GeneratorConfig {
            listing_count: self.config.listing_count,
            neighborhoods: self.config.neighborhoods.clone(),
        };
        // Chain the generator off the environment RNG so an episode is one
        // deterministic stream.
        let gen_seed = self.rng.random();
        self.inventory = MarketGenerator::new(gen_config, gen_seed).generate();
    }

    fn try_buy(&mut self) -> (f64, ActionOutcome) {
        let listing = &self.inventory[self.step_cursor];
        let price = listing.price.to_float();

        if self.cash < price {
            self.stats.rejected_buys += 1;
            debug!(price, cash = self.cash, "buy rejected: insufficient funds");
            return (0.0, ActionOutcome::Rejected(RejectReason::InsufficientFunds));
        }

        self.last_transaction = Some(Transaction {
            kind: TransactionKind::Bought,
            listing: listing.clone(),
            amount: price,
            tick: self.step_cursor as u64,
        });
        self.holdings.push_back(self.step_cursor);
        self.cash -= price;
        self.wait_counter = 0;
        self.stats.buys += 1;

        // Cheaper purchases reward more; expensive ones can go negative.
        let reward = 1.0 + (200_000.0 - price) / 50_000.0;
        (reward, ActionOutcome::Bought)
    }

    fn try_sell(&mut self) -> (f64, ActionOutcome) {
        let Some(idx) = self.holdings.pop_front() else {
            self.stats.rejected_sells += 1;
            debug!("sell rejected: no holdings");
            return (0.0, ActionOutcome::Rejected(RejectReason::NoHoldings));
        };

        let held = self.inventory[idx].clone();
        let basis = held.price.to_float();
        let mut sell_price = basis * self.rng.random_range(0.7..1.5);

        // TODO: nothing advances time_on_market yet, so this markdown never
        // fires; wiring up listing aging would change reward dynamics.
        if held.time_on_market > self.config.stale_after {
            sell_price *= self.config.stale_markdown;
        }

        let reward = (sell_price - basis) / 10_000.0;
        self.cash += sell_price;
        self.wait_counter = 0;
        self.stats.sells += 1;
        self.last_transaction = Some(Transaction {
            kind: TransactionKind::Sold,
            listing: held,
            amount: sell_price,
            tick: self.step_cursor as u64,
        });

        (reward, ActionOutcome::Sold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Money;

    fn test_env(listing_count: usize, seed: u64) -> MarketSimulator {
        let config = EnvConfig::default().with_listing_count(listing_count);
        MarketSimulator::new(config, seed).expect("valid test config")
    }

    #[test]
    fn test_buy_scenario_reward_and_balances() {
        let mut env = test_env(50, 42);
        env.inventory[0].price = Money(90_000);

        let result = env.step(Action::Buy);

        assert_eq!(result.outcome, ActionOutcome::Bought);
        assert!((result.reward - 3.2).abs() < 1e-12, "reward {}", result.reward);
        assert_eq!(env.cash(), 10_000.0);
        assert_eq!(env.holding_count(), 1);
        assert_eq!(env.wait_counter(), 0);
        assert!(!result.terminal);

        let tx = env.last_transaction().expect("buy recorded");
        assert_eq!(tx.kind, TransactionKind::Bought);
        assert_eq!(tx.amount, 90_000.0);
    }

    #[test]
    fn test_buy_insufficient_funds_is_tagged_noop() {
        let config = EnvConfig::default()
            .with_listing_count(50)
            .with_initial_cash(0.0);
        let mut env = MarketSimulator::new(config, 42).unwrap();

        let result = env.step(Action::Buy);

        assert_eq!(
            result.outcome,
            ActionOutcome::Rejected(RejectReason::InsufficientFunds)
        );
        assert_eq!(result.reward, 0.0);
        assert_eq!(env.cash(), 0.0);
        assert_eq!(env.holding_count(), 0);
        assert!(env.last_transaction().is_none());
        // Cursor still advances: the listing stream moves on.
        assert_eq!(env.step_cursor(), 1);
    }

    #[test]
    fn test_sell_empty_holdings_is_tagged_noop() {
        let mut env = test_env(50, 42);
        let cash_before = env.cash();

        let result = env.step(Action::Sell);

        assert_eq!(
            result.outcome,
            ActionOutcome::Rejected(RejectReason::NoHoldings)
        );
        assert_eq!(result.reward, 0.0);
        assert_eq!(env.cash(), cash_before);
    }

    #[test]
    fn test_sell_settles_at_current_market_price() {
        let mut env = test_env(50, 7);
        env.inventory[0].price = Money(50_000);
        env.step(Action::Buy);

        // The event tick at step 0 may have moved the held listing's price;
        // sales settle against whatever the arena says now.
        let basis = env.inventory[0].price.to_float();
        let result = env.step(Action::Sell);

        assert_eq!(result.outcome, ActionOutcome::Sold);
        let tx = env.last_transaction().expect("sale recorded");
        assert_eq!(tx.kind, TransactionKind::Sold);
        assert!(tx.amount >= basis * 0.7 && tx.amount < basis * 1.5);
        assert!((result.reward - (tx.amount - basis) / 10_000.0).abs() < 1e-9);
        assert_eq!(env.holding_count(), 0);
    }

    #[test]
    fn test_forced_buy_after_max_waits() {
        let mut env = test_env(200, 42);
        // Keep everything affordable so the forced buy succeeds.
        for listing in &mut env.inventory {
            listing.price = Money(1_000);
        }

        for _ in 0..20 {
            let result = env.step(Action::Wait);
            assert_eq!(result.outcome, ActionOutcome::Waited);
        }
        assert_eq!(env.wait_counter(), 20);

        // Requesting Sell: the anti-stalling rule overrides it with a Buy.
        let result = env.step(Action::Sell);
        assert_eq!(result.outcome, ActionOutcome::Bought);
        assert_eq!(env.wait_counter(), 0);
        assert_eq!(env.holding_count(), 1);
        assert_eq!(env.stats().forced_buys, 1);
    }

    #[test]
    fn test_terminal_step_mutates_nothing() {
        let mut env = test_env(3, 42);
        env.step(Action::Wait);
        env.step(Action::Wait);
        assert_eq!(env.step_cursor(), 2); // inventory.len() - 1

        let cash_before = env.cash();
        let inventory_before = env.inventory().to_vec();
        let steps_before = env.stats().steps;

        for action in Action::ALL {
            let result = env.step(action);
            assert!(result.terminal);
            assert_eq!(result.reward, 0.0);
            assert_eq!(result.outcome, ActionOutcome::Terminal);
        }

        assert_eq!(env.cash(), cash_before);
        assert_eq!(env.inventory(), &inventory_before[..]);
        assert_eq!(env.stats().steps, steps_before);
        assert_eq!(env.step_cursor(), 2);
    }

    #[test]
    fn test_portfolio_value_brackets_held_prices() {
        let mut env = test_env(50, 42);
        env.inventory[0].price = Money(80_000);
        env.step(Action::Buy);

        let held_price = env.inventory()[0].price.to_float();
        for _ in 0..20 {
            let value = env.portfolio_value();
            assert!(value >= held_price * 0.9 && value < held_price * 1.3);
        }
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut env = test_env(100, 42);
        env.inventory[0].price = Money(10_000);
        env.step(Action::Buy);
        env.step(Action::Wait);
        assert!(env.cash() < 100_000.0);

        let obs = env.reset();

        assert_eq!(env.cash(), 100_000.0);
        assert_eq!(env.holding_count(), 0);
        assert_eq!(env.step_cursor(), 0);
        assert_eq!(env.wait_counter(), 0);
        assert!(env.last_transaction().is_none());
        assert_eq!(env.stats().steps, 0);
        assert_eq!(env.inventory().len(), 100);
        // Initial observation reflects restored cash.
        assert!((obs.cash - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_same_seed_same_episode() {
        let mut a = test_env(200, 9);
        let mut b = test_env(200, 9);
        assert_eq!(a.inventory(), b.inventory());

        for i in 0..50 {
            let action = Action::ALL[i % 3];
            let ra = a.step(action);
            let rb = b.step(action);
            assert_eq!(ra, rb, "diverged at step {i}");
        }
        assert_eq!(a.cash(), b.cash());
    }
}
