//! Uniform-random baseline policy.

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use types::{Action, Observation};

use crate::traits::Policy;

/// Samples uniformly from the action space, ignoring the observation.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Create a random policy with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn decide(&mut self, _observation: &Observation) -> Action {
        Action::ALL[self.rng.random_range(0..Action::ALL.len())]
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_all_actions() {
        let mut policy = RandomPolicy::new(42);
        let obs = Observation::zeroed();
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[policy.decide(&obs).index() as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let obs = Observation::zeroed();
        let mut a = RandomPolicy::new(7);
        let mut b = RandomPolicy::new(7);
        for _ in 0..50 {
            assert_eq!(a.decide(&obs), b.decide(&obs));
        }
    }
}
