//! Interval timers that decide when new clouds and masks enter the field

use serde::Serialize;

use super::rng::SimRng;
use crate::tuning::{Span, SpawnTuning};

/// Timer that fires after a randomized interval, then picks a new one
#[derive(Debug, Clone, Serialize)]
pub struct SpawnTimer {
    pub elapsed: f32,
    pub interval: f32,
    range: Span,
}

impl SpawnTimer {
    pub fn new(range: Span, rng: &mut SimRng) -> Self {
        Self {
            elapsed: 0.0,
            interval: rng.sample(range),
            range,
        }
    }

    /// Advance by `dt`; on firing, reset to zero and resample the interval
    pub fn advance(&mut self, dt: f32, rng: &mut SimRng) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            self.interval = rng.sample(self.range);
            true
        } else {
            false
        }
    }
}

/// Which entities are due this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnDue {
    pub hazard: bool,
    pub mask: bool,
}

/// Two independent timers: clouds and masks
#[derive(Debug, Clone, Serialize)]
pub struct SpawnScheduler {
    pub hazard: SpawnTimer,
    pub mask: SpawnTimer,
}

impl SpawnScheduler {
    pub fn new(tuning: &SpawnTuning, rng: &mut SimRng) -> Self {
        Self {
            hazard: SpawnTimer::new(tuning.hazard_interval, rng),
            mask: SpawnTimer::new(tuning.mask_interval, rng),
        }
    }

    pub fn advance(&mut self, dt: f32, rng: &mut SimRng) -> SpawnDue {
        SpawnDue {
            hazard: self.hazard.advance(dt, rng),
            mask: self.mask.advance(dt, rng),
        }
    }
}
