// Random picker adapter - Uniform selection backed by rand

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::VideoPicker;

/// Uniform picker. Seeded pickers repeat the same sequence across runs.
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Picker seeded from the thread-local generator
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic picker
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is configured, otherwise random
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
