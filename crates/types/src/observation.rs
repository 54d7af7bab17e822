//! Observation vector exposed to decision-making agents.

use serde::{Deserialize, Serialize};

use crate::Listing;

/// Normalization denominator for listing prices.
pub const PRICE_NORM: f64 = 5_000_000.0;
/// Normalization denominator for demand.
pub const DEMAND_NORM: f64 = 1_000.0;
/// Normalization denominator for agent cash.
pub const CASH_NORM: f64 = 1_000_000.0;

/// Fixed-size feature vector for the listing under the cursor.
///
/// Values are normalized by fixed denominators but not clamped: price and
/// cash features may exceed 1.0 and agents must tolerate that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Observation {
    /// Listing price / 5,000,000.
    pub price: f64,
    /// Listing demand / 1,000.
    pub demand: f64,
    /// Neighborhood quality index, already in `[0, 1]`.
    pub quality: f64,
    /// Crime rate in `[0, 1]`.
    pub crime: f64,
    /// Infrastructure score in `[0, 1]`.
    pub infrastructure: f64,
    /// Agent cash / 1,000,000.
    pub cash: f64,
}

impl Observation {
    /// Number of features in the vector.
    pub const DIM: usize = 6;

    /// Build the observation for a listing and the agent's current cash.
    pub fn from_listing(listing: &Listing, cash: f64) -> Self {
        Self {
            price: listing.price.to_float() / PRICE_NORM,
            demand: listing.demand as f64 / DEMAND_NORM,
            quality: listing.quality_index,
            crime: listing.crime_rate,
            infrastructure: listing.infrastructure_score,
            cash: cash / CASH_NORM,
        }
    }

    /// All-zero observation, returned once the cursor runs past the inventory.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// The features as a flat array, in declaration order.
    pub fn to_array(self) -> [f64; Self::DIM] {
        [
            self.price,
            self.demand,
            self.quality,
            self.crime,
            self.infrastructure,
            self.cash,
        ]
    }
}
