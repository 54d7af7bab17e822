//! Core types for the Estate Gym simulation.
//!
//! This crate provides all shared data types used across the environment:
//! listings and neighborhoods, agent actions, observations, and the
//! integer monetary type.

mod action;
mod listing;
mod money;
mod observation;

pub use action::{Action, ActionOutcome, RejectReason};
pub use listing::{Listing, Neighborhood, PropertyType, Transaction, TransactionKind};
pub use money::Money;
pub use observation::Observation;

/// Simulation step number (discrete time step).
pub type Tick = u64;
