//! Pollution clouds drifting in from the right edge

use glam::Vec2;
use serde::Serialize;

use super::collision::Rect;
use super::rng::SimRng;
use crate::settings::HazardMode;
use crate::tuning::{FieldTuning, HazardTuning};

/// Per-mode behavior of a cloud
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum HazardKind {
    /// Hurts the player directly and is consumed on contact
    Contact {
        /// Off-screen margin past the radius
        margin: f32,
    },
    /// Periodically signals that smoke should be released near the player
    Emitter { timer: f32, interval: f32 },
}

/// A drifting pollution cloud
#[derive(Debug, Clone, Serialize)]
pub struct Hazard {
    pub pos: Vec2,
    pub radius: f32,
    /// Leftward speed in pixels per second
    pub speed: f32,
    pub alpha: f32,
    pub kind: HazardKind,
}

impl Hazard {
    pub fn new(pos: Vec2, radius: f32, speed: f32, alpha: f32, kind: HazardKind) -> Self {
        Self {
            pos,
            radius,
            speed,
            alpha,
            kind,
        }
    }

    /// Cloud just past the right edge with randomized size, speed, opacity and band
    pub fn spawn(
        mode: HazardMode,
        tuning: &HazardTuning,
        field: &FieldTuning,
        rng: &mut SimRng,
    ) -> Self {
        let radius = rng.sample(tuning.radius);
        let speed = rng.sample(tuning.speed);
        let alpha = rng.sample(tuning.alpha);
        let band = if rng.coin() {
            tuning.low_band
        } else {
            tuning.high_band
        };
        let y = rng.sample(band);
        let kind = match mode {
            HazardMode::Contact => HazardKind::Contact {
                margin: tuning.contact_offscreen_margin,
            },
            HazardMode::Emitter => HazardKind::Emitter {
                timer: 0.0,
                interval: tuning.emission_interval,
            },
        };
        Self::new(Vec2::new(field.width + radius, y), radius, speed, alpha, kind)
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.x -= self.speed * dt;
        if let HazardKind::Emitter { timer, .. } = &mut self.kind {
            *timer += dt;
        }
    }

    pub fn is_off_screen(&self) -> bool {
        let margin = match self.kind {
            HazardKind::Contact { margin } => margin,
            HazardKind::Emitter { .. } => 0.0,
        };
        self.pos.x + self.radius + margin < 0.0
    }

    /// True once per emission interval; always false for contact clouds
    pub fn should_emit(&mut self) -> bool {
        match &mut self.kind {
            HazardKind::Emitter { timer, interval } if *timer >= *interval => {
                *timer = 0.0;
                true
            }
            _ => false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }
}
