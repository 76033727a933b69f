//! Random bar-height generation.

use rand::prelude::*;

use super::VisualizerConfig;

/// Random number generator wrapper for sequence generation.
pub struct SequenceGenerator {
    rng: StdRng,
    min_value: u32,
    max_value: u32,
}

impl SequenceGenerator {
    /// Create from seed. Values are drawn from `[min_value, max_value)`.
    pub fn new(seed: u64, min_value: u32, max_value: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min_value,
            max_value: max_value.max(min_value.saturating_add(1)),
        }
    }

    /// Create with random seed.
    pub fn random(min_value: u32, max_value: u32) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            min_value,
            max_value: max_value.max(min_value.saturating_add(1)),
        }
    }

    /// Create from configuration, honoring its fixed seed if present.
    pub fn from_config(config: &VisualizerConfig) -> Self {
        match config.seed {
            Some(seed) => Self::new(seed, config.min_value, config.max_value),
            None => Self::random(config.min_value, config.max_value),
        }
    }

    /// Generate `len` bar heights.
    pub fn generate(&mut self, len: usize) -> Vec<u32> {
        (0..len)
            .map(|_| self.rng.gen_range(self.min_value..self.max_value))
            .collect()
    }

    /// Value range as `(min inclusive, max exclusive)`.
    pub fn range(&self) -> (u32, u32) {
        (self.min_value, self.max_value)
    }
}
