//! Agent actions and step outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Action an agent can take on the listing under the cursor.
///
/// The discriminants match the original discrete action space
/// (0 = Buy, 1 = Wait, 2 = Sell) so external drivers can map indices directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Action {
    Buy = 0,
    Wait = 1,
    Sell = 2,
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; 3] = [Action::Buy, Action::Wait, Action::Sell];

    /// Decode an action index, if valid.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Action::Buy),
            1 => Some(Action::Wait),
            2 => Some(Action::Sell),
            _ => None,
        }
    }

    /// The action's index in the discrete action space.
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Buy => write!(f, "BUY"),
            Action::Wait => write!(f, "WAIT"),
            Action::Sell => write!(f, "SELL"),
        }
    }
}

/// Why an action was rejected as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Buy attempted with less cash than the listing price.
    InsufficientFunds,
    /// Sell attempted with an empty portfolio.
    NoHoldings,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::InsufficientFunds => write!(f, "insufficient funds"),
            RejectReason::NoHoldings => write!(f, "no holdings to sell"),
        }
    }
}

/// What a `step` call actually did.
///
/// Rejected actions keep the original no-op reward and state semantics; the
/// tag exists so callers can assert on intent instead of numeric side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// A listing was purchased and appended to holdings.
    Bought,
    /// The oldest holding was sold.
    Sold,
    /// The agent waited; the wait counter advanced.
    Waited,
    /// The action degraded to a no-op with zero reward.
    Rejected(RejectReason),
    /// The episode had already ended; nothing happened.
    Terminal,
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Bought => write!(f, "bought"),
            ActionOutcome::Sold => write!(f, "sold"),
            ActionOutcome::Waited => write!(f, "waited"),
            ActionOutcome::Rejected(reason) => write!(f, "rejected: {}", reason),
            ActionOutcome::Terminal => write!(f, "terminal"),
        }
    }
}
