//! Error types for environment construction.
//!
//! Stepping never fails: invalid actions degrade to tagged no-ops. Errors
//! only arise from invalid configuration at construction time.

use std::fmt;

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, EnvError>;

/// Errors raised when building a [`crate::MarketSimulator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// No neighborhoods were supplied to sample listings from.
    EmptyNeighborhoods,
    /// Inventory too small for an episode (needs at least two listings).
    InventoryTooSmall(usize),
    /// The event interval must be at least one step.
    ZeroEventInterval,
    /// Initial cash cannot be negative.
    NegativeInitialCash,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvError::EmptyNeighborhoods => write!(f, "neighborhood mapping is empty"),
            EnvError::InventoryTooSmall(n) => {
                write!(f, "inventory of {} listings is too small (minimum 2)", n)
            }
            EnvError::ZeroEventInterval => write!(f, "event interval must be positive"),
            EnvError::NegativeInitialCash => write!(f, "initial cash cannot be negative"),
        }
    }
}

impl std::error::Error for EnvError {}
