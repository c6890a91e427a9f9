//! Randomness provider for round generation
//!
//! All random choices (odd index, rule, odd color) go through [`RandomSource`]
//! so a run is reproducible from its seed and tests can script exact rounds.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::RuleType;

/// Source of the random choices a round needs
pub trait RandomSource {
    /// Uniform index in `0..n`
    fn odd_index(&mut self, n: usize) -> usize;
    /// Uniform choice between the rules
    fn rule(&mut self) -> RuleType;
    /// Uniform value in `[0, 1)`
    fn unit(&mut self) -> f32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn odd_index(&mut self, n: usize) -> usize {
        (**self).odd_index(n)
    }

    fn rule(&mut self) -> RuleType {
        (**self).rule()
    }

    fn unit(&mut self) -> f32 {
        (**self).unit()
    }
}

/// Seeded PCG-backed provider
#[derive(Debug, Clone)]
pub struct PcgRandom {
    seed: u64,
    rng: Pcg32,
}

impl PcgRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this provider was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for PcgRandom {
    fn odd_index(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    fn rule(&mut self) -> RuleType {
        RuleType::ALL[self.rng.random_range(0..RuleType::ALL.len())]
    }

    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}
