//! Face masks: drifting pickups that heal or protect

use std::f32::consts::TAU;

use glam::Vec2;
use serde::Serialize;

use super::collision::circles_overlap;
use super::player::Player;
use super::rng::SimRng;
use crate::tuning::{FieldTuning, HazardTuning, MaskTuning};

/// A collectible mask
#[derive(Debug, Clone, Serialize)]
pub struct Mask {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Spin angle (radians), visual only
    pub rotation: f32,
    /// Phase of the vertical bob
    pub float_phase: f32,
    /// Current vertical bob in pixels
    pub float_offset: f32,
    spin_rate: f32,
    float_rate: f32,
    float_amplitude: f32,
}

impl Mask {
    pub fn new(pos: Vec2, speed: f32, float_phase: f32, tuning: &MaskTuning) -> Self {
        Self {
            pos,
            radius: tuning.radius,
            speed,
            rotation: 0.0,
            float_phase,
            float_offset: 0.0,
            spin_rate: tuning.spin_rate,
            float_rate: tuning.float_rate,
            float_amplitude: tuning.float_amplitude,
        }
    }

    /// Mask just past the right edge; drifts at cloud speed
    pub fn spawn(
        tuning: &MaskTuning,
        hazard: &HazardTuning,
        field: &FieldTuning,
        rng: &mut SimRng,
    ) -> Self {
        let y = rng.sample(tuning.spawn_band);
        let speed = rng.sample(hazard.speed);
        let phase = rng.uniform(0.0, TAU);
        Self::new(Vec2::new(field.width + tuning.radius, y), speed, phase, tuning)
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.x -= self.speed * dt;
        self.rotation += dt * self.spin_rate;
        self.float_phase += dt * self.float_rate;
        self.float_offset = self.float_phase.sin() * self.float_amplitude;
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.radius < 0.0
    }

    /// Where the mask is drawn and hit-tested
    pub fn visual_pos(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y + self.float_offset)
    }

    /// Circle test against the player's approximate bounding circle
    pub fn touches(&self, player: &Player) -> bool {
        circles_overlap(
            self.visual_pos(),
            self.radius,
            player.center(),
            player.approx_radius(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::PlayerTuning;

    fn mask_at(x: f32, y: f32) -> Mask {
        Mask::new(Vec2::new(x, y), 260.0, 0.0, &MaskTuning::default())
    }

    #[test]
    fn test_drift_is_linear() {
        let mut mask = mask_at(825.0, 510.0);
        for _ in 0..20 {
            mask.update(0.05);
        }
        assert!((mask.pos.x - (825.0 - 260.0)).abs() < 0.01);
        assert!((mask.rotation - 2.0).abs() < 1e-4);
        assert!((mask.float_offset - 3.0_f32.sin() * 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_off_screen() {
        let mut mask = mask_at(-24.0, 510.0);
        assert!(!mask.is_off_screen());
        mask.pos.x = -26.0;
        assert!(mask.is_off_screen());
    }

    #[test]
    fn test_touches_player() {
        let player = Player::new(&PlayerTuning::default(), 550.0, false);
        // Player center is (120, 520), approx radius 30
        assert!(mask_at(170.0, 520.0).touches(&player));
        assert!(!mask_at(176.0, 520.0).touches(&player));
    }

    #[test]
    fn test_spawn_band_and_edge() {
        let tuning = MaskTuning::default();
        let hazard = HazardTuning::default();
        let field = FieldTuning::default();
        let mut rng = SimRng::new(21);
        for _ in 0..50 {
            let mask = Mask::spawn(&tuning, &hazard, &field, &mut rng);
            assert!(mask.pos.x >= field.width);
            assert!(tuning.spawn_band.contains(mask.pos.y));
            assert!(hazard.speed.contains(mask.speed));
            assert!((0.0..TAU).contains(&mask.float_phase));
        }
    }
}
