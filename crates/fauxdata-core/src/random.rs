use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};

/// Source of bounded random integers and fair coin flips.
///
/// Implementations are expected to be confined to one thread; callers that
/// need randomness on several threads create one source per thread.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. A zero bound is rejected.
    fn next_int(&mut self, bound: usize) -> Result<usize>;

    /// `true` or `false` with equal probability.
    fn next_bool(&mut self) -> bool;
}

/// ChaCha-backed random source; reproducible when built from a seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Independent stream for `label`, reproducible for a given `seed`.
    pub fn derive(seed: u64, label: &str) -> Self {
        Self::new(hash_seed(seed, label))
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(Error::InvalidArgument(
                "random bound must be positive".to_string(),
            ));
        }
        Ok(self.rng.random_range(0..bound))
    }

    fn next_bool(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
