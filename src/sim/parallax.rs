//! Looping background scroll offsets

use serde::Serialize;

use crate::tuning::ParallaxTuning;

/// One looping layer; offset always stays in `[0, pattern_width)`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScrollLayer {
    pub offset: f32,
    pub speed: f32,
    pub pattern_width: f32,
}

impl ScrollLayer {
    pub fn new(speed: f32, pattern_width: f32) -> Self {
        Self {
            offset: 0.0,
            speed,
            pattern_width,
        }
    }

    /// Wrap by subtraction so motion stays continuous across the seam
    pub fn advance(&mut self, dt: f32, rate: f32) {
        self.offset += self.speed * dt * rate;
        if self.offset >= self.pattern_width {
            self.offset -= self.pattern_width;
            // More than a whole pattern in one step
            if self.offset >= self.pattern_width {
                self.offset = self.offset.rem_euclid(self.pattern_width);
            }
        }
        if !(self.offset >= 0.0 && self.offset < self.pattern_width) {
            self.offset = 0.0;
        }
    }
}

/// Sky (slow, far) and ground (fast, near) layers
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Parallax {
    pub sky: ScrollLayer,
    pub ground: ScrollLayer,
}

impl Parallax {
    pub fn new(tuning: &ParallaxTuning) -> Self {
        Self {
            sky: ScrollLayer::new(tuning.sky_speed, tuning.sky_pattern_width),
            ground: ScrollLayer::new(tuning.ground_speed, tuning.ground_pattern_width),
        }
    }

    pub fn advance(&mut self, dt: f32, rate: f32) {
        self.sky.advance(dt, rate);
        self.ground.advance(dt, rate);
    }
}
