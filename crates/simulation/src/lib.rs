//! Simulation crate: the step loop of the Estate Gym.
//!
//! This crate provides [`MarketSimulator`], the sequential-decision
//! environment an external agent drives. One episode:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            MarketSimulator.step()            │
//! │                                              │
//! │  1. Terminal check (cursor at inventory end) │
//! │  2. Anti-stalling override (forced Buy)      │
//! │  3. Resolve Buy / Wait / Sell                │
//! │  4. Market event tick (every Nth step)       │
//! │  5. Advance step cursor                      │
//! │  6. Observe the next listing                 │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The simulator exclusively owns the inventory arena; market events mutate
//! listing prices in place and nothing is shared across instances.
//!
//! # Example
//!
//! ```ignore
//! use simulation::{EnvConfig, MarketSimulator};
//! use types::Action;
//!
//! let mut env = MarketSimulator::new(EnvConfig::default(), 42)?;
//! let mut obs = env.reset();
//! loop {
//!     let result = env.step(Action::Buy);
//!     if result.terminal {
//!         break;
//!     }
//!     obs = result.observation;
//! }
//! ```

pub mod config;
mod error;
mod runner;
mod stats;

pub use config::EnvConfig;
pub use error::{EnvError, Result};
pub use runner::{MarketSimulator, StepResult};
pub use stats::EpisodeStats;
