//! Event kinds, sampling, and inventory-wide application.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use types::{Listing, Money};

/// A global market shock applied uniformly across the inventory.
///
/// Sampling weights: Crisis 0.15, Metro 0.20, Shopping 0.20,
/// CrimeWave 0.15, Neutral 0.30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketEvent {
    /// Economy-wide downturn; every listing loses value.
    Crisis,
    /// New metro line; well-served areas appreciate.
    Metro,
    /// New shopping mall; high-demand areas appreciate.
    Shopping,
    /// Crime wave; dangerous areas depreciate.
    CrimeWave,
    /// Nothing happens this tick.
    Neutral,
}

impl MarketEvent {
    /// All events with their sampling weights, in draw order.
    const WEIGHTED: [(MarketEvent, f64); 5] = [
        (MarketEvent::Crisis, 0.15),
        (MarketEvent::Metro, 0.20),
        (MarketEvent::Shopping, 0.20),
        (MarketEvent::CrimeWave, 0.15),
        (MarketEvent::Neutral, 0.30),
    ];

    /// Draw one event from the weighted distribution.
    pub fn sample(rng: &mut impl Rng) -> Self {
        let roll: f64 = rng.random();
        let mut cumulative = 0.0;
        for (event, weight) in Self::WEIGHTED {
            cumulative += weight;
            if roll < cumulative {
                return event;
            }
        }
        // Floating-point slack on the final boundary.
        MarketEvent::Neutral
    }

    /// Whether this event touches the given listing.
    pub fn applies_to(self, listing: &Listing) -> bool {
        match self {
            MarketEvent::Crisis => true,
            MarketEvent::Metro => listing.infrastructure_score > 0.8,
            MarketEvent::Shopping => listing.demand > 500,
            MarketEvent::CrimeWave => listing.crime_rate > 0.7,
            MarketEvent::Neutral => false,
        }
    }

    /// Bounds of the per-listing price multiplier, if the event moves prices.
    pub fn multiplier_bounds(self) -> Option<(f64, f64)> {
        match self {
            MarketEvent::Crisis => Some((0.85, 0.95)),
            MarketEvent::Metro => Some((1.1, 1.3)),
            MarketEvent::Shopping => Some((1.05, 1.2)),
            MarketEvent::CrimeWave => Some((0.7, 0.9)),
            MarketEvent::Neutral => None,
        }
    }

    /// Whether the event can only raise prices.
    pub fn is_appreciation(self) -> bool {
        matches!(self, MarketEvent::Metro | MarketEvent::Shopping)
    }

    /// Apply this event across the inventory in a single pass.
    ///
    /// Each affected listing's price is multiplied by a fresh uniform draw
    /// within the event's bounds, rounded to whole units, floored at 1 so
    /// prices stay positive.
    pub fn apply(self, rng: &mut impl Rng, inventory: &mut [Listing]) {
        let Some((lo, hi)) = self.multiplier_bounds() else {
            return;
        };
        for listing in inventory.iter_mut().filter(|l| self.applies_to(l)) {
            let multiplier = rng.random_range(lo..hi);
            listing.price = listing.price.scaled(multiplier).max(Money(1));
        }
    }
}

impl fmt::Display for MarketEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarketEvent::Crisis => "crisis",
            MarketEvent::Metro => "metro",
            MarketEvent::Shopping => "shopping",
            MarketEvent::CrimeWave => "crime wave",
            MarketEvent::Neutral => "neutral",
        };
        write!(f, "{}", name)
    }
}

/// Sample one event and apply it to the whole inventory, returning the kind.
pub fn apply_random_event(rng: &mut impl Rng, inventory: &mut [Listing]) -> MarketEvent {
    let event = MarketEvent::sample(rng);
    event.apply(rng, inventory);
    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use market::{GeneratorConfig, MarketGenerator};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_inventory() -> Vec<Listing> {
        MarketGenerator::new(GeneratorConfig::with_listing_count(500), 42).generate()
    }

    #[test]
    fn test_sampling_covers_all_kinds() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut counts = [0u32; 5];
        for _ in 0..10_000 {
            let idx = match MarketEvent::sample(&mut rng) {
                MarketEvent::Crisis => 0,
                MarketEvent::Metro => 1,
                MarketEvent::Shopping => 2,
                MarketEvent::CrimeWave => 3,
                MarketEvent::Neutral => 4,
            };
            counts[idx] += 1;
        }
        for (i, count) in counts.iter().enumerate() {
            assert!(*count > 0, "event kind {i} never sampled");
        }
        // Neutral carries the largest weight.
        assert!(counts[4] > counts[0]);
    }

    #[test]
    fn test_crisis_lowers_every_price() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut inventory = test_inventory();
        let before: Vec<Money> = inventory.iter().map(|l| l.price).collect();

        MarketEvent::Crisis.apply(&mut rng, &mut inventory);

        for (listing, old) in inventory.iter().zip(before) {
            assert!(listing.price <= old, "crisis must not raise prices");
            assert!(listing.price.is_positive());
        }
    }

    #[test]
    fn test_metro_only_touches_well_served_listings() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut inventory = test_inventory();
        let before: Vec<Money> = inventory.iter().map(|l| l.price).collect();

        MarketEvent::Metro.apply(&mut rng, &mut inventory);

        for (listing, old) in inventory.iter().zip(before) {
            if listing.infrastructure_score > 0.8 {
                assert!(listing.price >= old);
            } else {
                assert_eq!(listing.price, old);
            }
        }
    }

    #[test]
    fn test_crime_wave_only_touches_dangerous_listings() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut inventory = test_inventory();
        let before: Vec<Money> = inventory.iter().map(|l| l.price).collect();

        MarketEvent::CrimeWave.apply(&mut rng, &mut inventory);

        for (listing, old) in inventory.iter().zip(before) {
            if listing.crime_rate > 0.7 {
                assert!(listing.price <= old);
            } else {
                assert_eq!(listing.price, old);
            }
        }
    }

    #[test]
    fn test_neutral_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut inventory = test_inventory();
        let before = inventory.clone();

        MarketEvent::Neutral.apply(&mut rng, &mut inventory);

        assert_eq!(inventory, before);
    }

    #[test]
    fn test_prices_stay_positive_under_repeated_shocks() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut inventory = test_inventory();
        for _ in 0..200 {
            apply_random_event(&mut rng, &mut inventory);
        }
        for listing in &inventory {
            assert!(listing.price.is_positive());
        }
    }
}
