// galaxy_core/src/random/chacha.rs

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::RandomSource;

/// A newtype wrapper around `ChaCha8Rng` that yields unit floats.
#[derive(Debug, Clone)]
pub struct ChaChaSource(pub ChaCha8Rng);

impl ChaChaSource {
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSource for ChaChaSource {
    fn next_unit(&mut self) -> f64 {
        // The standard distribution for f64 samples the half-open [0, 1).
        self.0.gen::<f64>()
    }
}
