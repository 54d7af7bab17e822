//! Listing inventory generation.
//!
//! [`MarketGenerator`] produces one episode's worth of synthetic listings.
//! Each listing is derived from a uniformly-sampled neighborhood: the
//! neighborhood's quality index selects a property-type distribution tier and
//! drives price, crime, infrastructure, and demand through clamped linear
//! interpolation plus bounded uniform noise.
//!
//! The generator is deterministic given the same seed, enabling reproducible
//! episodes for testing and debugging.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{SeedableRng, rng};
use serde::{Deserialize, Serialize};

use types::{Listing, Money, Neighborhood, PropertyType};

use crate::interp::interp;
use crate::neighborhoods::{DEFAULT_QUALITY, sao_paulo_districts};

/// Quality-index domain used by every interpolated attribute.
const QUALITY_DOMAIN: (f64, f64) = (0.70, 0.95);
/// Base price per square metre across the quality domain.
const PRICE_PER_M2_RANGE: (f64, f64) = (2_000.0, 15_000.0);
/// Infrastructure score across the quality domain.
const INFRASTRUCTURE_RANGE: (f64, f64) = (0.3, 1.0);
/// Crime rate across the quality domain (inverted: quality suppresses crime).
const CRIME_RANGE: (f64, f64) = (1.0, 0.2);
/// Demand across the quality domain, before noise.
const DEMAND_RANGE: (f64, f64) = (300.0, 1_000.0);

/// Configuration for market generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of listings per episode.
    pub listing_count: usize,
    /// Neighborhood reference data sampled uniformly per listing.
    pub neighborhoods: Vec<Neighborhood>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            listing_count: 100_000,
            neighborhoods: sao_paulo_districts(),
        }
    }
}

impl GeneratorConfig {
    /// Config with a custom listing count and the default district fixture.
    pub fn with_listing_count(count: usize) -> Self {
        Self {
            listing_count: count,
            ..Default::default()
        }
    }
}

/// Generates the synthetic listing inventory.
pub struct MarketGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl MarketGenerator {
    /// Create a generator with a fixed seed.
    pub fn new(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the thread RNG.
    pub fn from_entropy(config: GeneratorConfig) -> Self {
        let seed = rng().random();
        Self::new(config, seed)
    }

    /// Generate a full inventory.
    ///
    /// The result ordering is the generation order and becomes the
    /// consumption order for the simulator's step cursor.
    pub fn generate(&mut self) -> Vec<Listing> {
        (0..self.config.listing_count)
            .map(|_| self.generate_listing())
            .collect()
    }

    /// Current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn generate_listing(&mut self) -> Listing {
        let (name, quality_index) = match self.config.neighborhoods.choose(&mut self.rng) {
            Some(n) => (n.name.clone(), n.quality_index),
            None => (String::new(), DEFAULT_QUALITY),
        };

        let property_type = self.sample_property_type(quality_index);
        let base_price_per_m2 = interp(quality_index, QUALITY_DOMAIN, PRICE_PER_M2_RANGE);

        let area_m2 = {
            let range = property_type.area_range();
            self.rng.random_range(range)
        };
        let (mult_lo, mult_hi) = property_type.price_multiplier_bounds();
        let multiplier = self.rng.random_range(mult_lo..mult_hi);
        let price =
            Money::from_float_truncated(area_m2 as f64 * base_price_per_m2 * multiplier);

        let condo_fee = match property_type.condo_fee_range() {
            Some(range) => Money(self.rng.random_range(range)),
            None => Money::ZERO,
        };

        let infrastructure_score = interp(quality_index, QUALITY_DOMAIN, INFRASTRUCTURE_RANGE);
        let crime_rate = interp(quality_index, QUALITY_DOMAIN, CRIME_RANGE);
        let demand =
            (interp(quality_index, QUALITY_DOMAIN, DEMAND_RANGE) * self.rng.random_range(0.8..1.2))
                as u32;

        Listing {
            property_type,
            neighborhood: name,
            quality_index,
            area_m2,
            price,
            condo_fee,
            crime_rate,
            infrastructure_score,
            demand,
            time_on_market: 0,
        }
    }

    /// Pick a property type from the quality-conditioned tier distribution.
    fn sample_property_type(&mut self, quality_index: f64) -> PropertyType {
        let roll: f64 = self.rng.random();
        if quality_index > 0.85 {
            // Wealthy tier: {apartment 0.5, luxury house 0.3, penthouse 0.2}
            if roll < 0.5 {
                PropertyType::StandardApartment
            } else if roll < 0.8 {
                PropertyType::LuxuryHouse
            } else {
                PropertyType::Penthouse
            }
        } else if quality_index > 0.75 {
            // Middle tier: {popular house 0.3, apartment 0.5, luxury house 0.2}
            if roll < 0.3 {
                PropertyType::PopularHouse
            } else if roll < 0.8 {
                PropertyType::StandardApartment
            } else {
                PropertyType::LuxuryHouse
            }
        } else {
            // Lower tier: {popular house 0.7, apartment 0.3}
            if roll < 0.7 {
                PropertyType::PopularHouse
            } else {
                PropertyType::StandardApartment
            }
        }
    }
}
