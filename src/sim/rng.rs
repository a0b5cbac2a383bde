//! Seeded random range sampling shared by every spawner

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::tuning::Span;

/// Uniform sampling over numeric ranges, reproducible from a seed
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in `[min, max)`; collapses to `min` for an empty range
    pub fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..max)
    }

    pub fn sample(&mut self, span: Span) -> f32 {
        self.uniform(span.min, span.max)
    }

    /// Uniform integer in `[min, max]`
    pub fn int_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
