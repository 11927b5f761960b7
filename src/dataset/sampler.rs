// src/dataset/sampler.rs
//! Strategies for picking how much of the source list becomes the dataset.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Default upper bound on the sampled dataset length.
pub const DEFAULT_MAX_SAMPLE_LEN: usize = 1000;

/// Chooses the dataset length for a source of `source_len` records.
/// Implementations must return a value in `0..=source_len`.
pub trait PrefixSampler: Send + Sync {
    fn sample_len(&mut self, source_len: usize) -> usize;
}

/// Picks a length uniformly from `[1, min(max_len, source_len)]`.
/// An empty source always yields 0.
#[derive(Debug, Clone)]
pub struct RandomPrefixSampler {
    max_len: usize,
    rng: StdRng,
}

impl RandomPrefixSampler {
    pub fn new(max_len: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { max_len: max_len.max(1), rng }
    }
}

impl PrefixSampler for RandomPrefixSampler {
    fn sample_len(&mut self, source_len: usize) -> usize {
        let upper = source_len.min(self.max_len);
        if upper == 0 {
            return 0;
        }
        self.rng.random_range(1..=upper)
    }
}

/// Keeps the whole source.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullSourceSampler;

impl PrefixSampler for FullSourceSampler {
    fn sample_len(&mut self, source_len: usize) -> usize {
        source_len
    }
}

/// Always returns `len` (clamped to the source).
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedLengthSampler(pub usize);

#[cfg(test)]
impl PrefixSampler for FixedLengthSampler {
    fn sample_len(&mut self, source_len: usize) -> usize {
        self.0.min(source_len)
    }
}
