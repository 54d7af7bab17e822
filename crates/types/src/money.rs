//! Integer monetary type.

use derive_more::{Add, AddAssign, From, Into, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole currency units (no cents).
///
/// Listing prices and condo fees are integer amounts; fractional values only
/// appear transiently (sale proceeds, mark-to-market estimates) and stay `f64`.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Create from a floating-point amount, rounding to the nearest unit.
    #[inline]
    pub fn from_float(v: f64) -> Self {
        Self(v.round() as i64)
    }

    /// Create from a floating-point amount, truncating toward zero.
    #[inline]
    pub fn from_float_truncated(v: f64) -> Self {
        Self(v as i64)
    }

    /// Convert to floating-point for reward and normalization math.
    #[inline]
    pub fn to_float(self) -> f64 {
        self.0 as f64
    }

    /// Raw internal value.
    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }

    /// Check if the amount is positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Multiply by a factor, rounding the result to the nearest unit.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self::from_float(self.to_float() * factor)
    }

    /// Maximum of two amounts.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({})", self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Allow `price == 90_000` comparisons in tests and callers.
impl PartialEq<i64> for Money {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_float_rounds() {
        assert_eq!(Money::from_float(99.4), Money(99));
        assert_eq!(Money::from_float(99.5), Money(100));
        assert_eq!(Money::from_float_truncated(99.9), Money(99));
    }

    #[test]
    fn test_scaled_rounds_to_nearest() {
        assert_eq!(Money(100).scaled(1.25), Money(125));
        assert_eq!(Money(3).scaled(0.5), Money(2)); // 1.5 rounds up
    }

    #[test]
    fn test_arithmetic() {
        let a = Money(100_000);
        let b = Money(90_000);
        assert_eq!(a - b, Money(10_000));
        assert_eq!((a + b).raw(), 190_000);
        assert!(a.is_positive());
    }
}
