//! Listings, neighborhoods, and transaction records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::{Money, Tick};

/// Static reference data: a named neighborhood with its quality index.
///
/// The quality index is a socio-economic development score in `[0, 1]` that
/// drives every derived listing attribute. Immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub name: String,
    pub quality_index: f64,
}

impl Neighborhood {
    pub fn new(name: impl Into<String>, quality_index: f64) -> Self {
        Self {
            name: name.into(),
            quality_index,
        }
    }
}

/// Category of property unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    PopularHouse,
    StandardApartment,
    LuxuryHouse,
    Penthouse,
}

impl PropertyType {
    /// Floor area range in square metres for this type.
    pub fn area_range(self) -> RangeInclusive<u32> {
        match self {
            PropertyType::PopularHouse => 80..=150,
            PropertyType::StandardApartment => 50..=100,
            PropertyType::LuxuryHouse => 200..=500,
            PropertyType::Penthouse => 150..=400,
        }
    }

    /// Bounds of the uniform price multiplier applied on top of
    /// `area * base price per m2`.
    pub fn price_multiplier_bounds(self) -> (f64, f64) {
        match self {
            PropertyType::PopularHouse => (0.9, 1.1),
            PropertyType::StandardApartment => (0.9, 1.2),
            PropertyType::LuxuryHouse => (1.0, 1.3),
            PropertyType::Penthouse => (1.2, 1.5),
        }
    }

    /// Monthly condo fee range. Houses carry no fee.
    pub fn condo_fee_range(self) -> Option<RangeInclusive<i64>> {
        match self {
            PropertyType::PopularHouse | PropertyType::LuxuryHouse => None,
            PropertyType::StandardApartment => Some(500..=1500),
            PropertyType::Penthouse => Some(2000..=5000),
        }
    }

    /// Whether this type is a free-standing house.
    pub fn is_house(self) -> bool {
        matches!(self, PropertyType::PopularHouse | PropertyType::LuxuryHouse)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyType::PopularHouse => "popular house",
            PropertyType::StandardApartment => "standard apartment",
            PropertyType::LuxuryHouse => "luxury house",
            PropertyType::Penthouse => "penthouse",
        };
        write!(f, "{}", name)
    }
}

/// One synthetic property unit in the market inventory.
///
/// Every derived field is a deterministic function of the neighborhood's
/// quality index plus bounded random noise. `price` stays positive for the
/// listing's lifetime; market events mutate it in place, nothing else does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub property_type: PropertyType,
    /// Name of the neighborhood this listing belongs to.
    pub neighborhood: String,
    /// Quality index copied from the neighborhood at creation.
    pub quality_index: f64,
    /// Floor area in square metres.
    pub area_m2: u32,
    /// Asking price in whole currency units.
    pub price: Money,
    /// Monthly condo fee; zero for houses.
    pub condo_fee: Money,
    /// Crime rate in `[0, 1]`, inversely related to quality.
    pub crime_rate: f64,
    /// Infrastructure score in `[0, 1]`, directly related to quality.
    pub infrastructure_score: f64,
    /// Market demand indicator, directly related to quality with noise.
    pub demand: u32,
    /// Steps the listing has been on the market. Nothing advances this
    /// counter yet; the sell-side stale markdown reads it regardless.
    pub time_on_market: u32,
}

/// What a completed transaction did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Bought,
    Sold,
}

/// Record of the most recent buy or sell, kept for drivers and renderers.
///
/// Replaces the original design's conditionally-present "last sold" marker
/// with an always-present optional field on the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    /// Snapshot of the listing at transaction time.
    pub listing: Listing,
    /// Cash that changed hands: price paid on a buy, proceeds on a sell.
    pub amount: f64,
    /// Step at which the transaction happened.
    pub tick: Tick,
}
