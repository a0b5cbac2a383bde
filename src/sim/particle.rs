//! Smoke particles released by clouds in emitter mode

use glam::Vec2;
use serde::Serialize;

use super::rng::SimRng;
use crate::tuning::ParticleTuning;

/// A short-lived smoke speck that hurts the player on touch
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Seconds left; counts down from `max_lifetime`
    pub lifetime: f32,
    pub max_lifetime: f32,
    /// Upward acceleration (pixels/s², applied against +y)
    pub rise: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, max_lifetime: f32, rise: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            lifetime: max_lifetime,
            max_lifetime,
            rise,
        }
    }

    /// Particle at `pos` with randomized size, drift and lifetime
    pub fn spawn(pos: Vec2, tuning: &ParticleTuning, rng: &mut SimRng) -> Self {
        let radius = rng.sample(tuning.radius);
        let vel = Vec2::new(rng.sample(tuning.velocity_x), rng.sample(tuning.velocity_y));
        let max_lifetime = rng.sample(tuning.lifetime);
        Self::new(pos, vel, radius, max_lifetime, tuning.rise_acceleration)
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.lifetime -= dt;
        self.vel.y -= self.rise * dt;
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }

    /// Linear fade for rendering
    pub fn alpha(&self) -> f32 {
        (self.lifetime / self.max_lifetime).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(max_lifetime: f32) -> Particle {
        Particle::new(Vec2::new(100.0, 500.0), Vec2::new(10.0, -20.0), 3.0, max_lifetime, 20.0)
    }

    #[test]
    fn test_dies_exactly_at_max_lifetime() {
        let mut p = particle(1.0);
        for _ in 0..3 {
            p.update(0.25);
            assert!(p.is_alive());
        }
        p.update(0.25);
        assert!(p.lifetime <= 0.0);
        assert!(!p.is_alive());
    }

    #[test]
    fn test_rises_and_drifts() {
        let mut p = particle(1.0);
        p.update(0.5);
        assert!((p.pos.x - 105.0).abs() < 1e-4);
        assert!((p.pos.y - 490.0).abs() < 1e-4);
        // Vertical speed gains 20 px/s upward per second
        assert!((p.vel.y - (-30.0)).abs() < 1e-4);
    }

    #[test]
    fn test_alpha_fades_and_floors() {
        let mut p = particle(2.0);
        assert_eq!(p.alpha(), 1.0);
        p.update(1.0);
        assert!((p.alpha() - 0.5).abs() < 1e-6);
        p.update(5.0);
        assert_eq!(p.alpha(), 0.0);
    }

    #[test]
    fn test_spawn_within_tuning() {
        let tuning = ParticleTuning::default();
        let mut rng = SimRng::new(3);
        for _ in 0..100 {
            let p = Particle::spawn(Vec2::ZERO, &tuning, &mut rng);
            assert!(tuning.radius.contains(p.radius));
            assert!(tuning.lifetime.contains(p.max_lifetime));
            assert!(p.vel.y < 0.0);
        }
    }
}
