//! Data-driven game balance
//!
//! Keep this separate from runtime settings (seed, hazard mode). Every field
//! has a default matching the shipped game, and `#[serde(default)]` lets a
//! JSON file override only the values it names.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_STEP_DT;
use crate::settings::SettingsError;

/// Closed numeric range sampled uniformly by spawners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Inclusive containment check
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, field: &'static str) -> Result<(), SettingsError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(SettingsError::invalid(field, "range bounds must be finite"));
        }
        if self.min > self.max {
            return Err(SettingsError::invalid(field, "min is greater than max"));
        }
        Ok(())
    }
}

/// Play field geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTuning {
    pub width: f32,
    pub height: f32,
    /// Y of the ground line (screen coordinates, y grows downward)
    pub ground_y: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            ground_y: 550.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Left edge of the player body
    pub start_x: f32,
    pub width: f32,
    pub height: f32,
    /// Height while ducking
    pub duck_height: f32,
    /// Downward acceleration in pixels per second squared
    pub gravity: f32,
    /// Initial upward speed of a jump in pixels per second
    pub jump_strength: f32,
    pub max_health: u32,
    /// Minimum seconds between two applied hits
    pub damage_cooldown: f32,
    /// Spawn area for ambient particles (emitter mode)
    pub spawn_area_width: f32,
    pub spawn_area_height: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            start_x: 100.0,
            width: 40.0,
            height: 60.0,
            duck_height: 35.0,
            gravity: 800.0,
            jump_strength: 400.0,
            max_health: 100,
            damage_cooldown: 0.5,
            spawn_area_width: 30.0,
            spawn_area_height: 90.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardTuning {
    pub radius: Span,
    /// Leftward speed in pixels per second
    pub speed: Span,
    pub alpha: Span,
    /// Upper spawn band (smaller y)
    pub high_band: Span,
    /// Lower spawn band, closer to the ground
    pub low_band: Span,
    /// Seconds between emission checks in emitter mode
    pub emission_interval: f32,
    /// Damage dealt by a single particle (emitter mode)
    pub particle_damage: u32,
    /// Damage dealt on direct contact (contact mode)
    pub contact_damage: u32,
    /// Extra off-screen margin in contact mode, covers the cloud puffs drawn past the radius
    pub contact_offscreen_margin: f32,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            radius: Span::new(15.0, 25.0),
            speed: Span::new(250.0, 280.0),
            alpha: Span::new(0.2, 0.6),
            high_band: Span::new(500.0, 510.0),
            low_band: Span::new(510.0, 530.0),
            emission_interval: 0.1,
            particle_damage: 5,
            contact_damage: 15,
            contact_offscreen_margin: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    pub radius: Span,
    pub velocity_x: Span,
    pub velocity_y: Span,
    pub lifetime: Span,
    /// Upward acceleration that makes particles rise like smoke
    pub rise_acceleration: f32,
    /// Particles spawned per emission (inclusive)
    pub burst_min: u32,
    pub burst_max: u32,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            radius: Span::new(2.0, 5.0),
            velocity_x: Span::new(-20.0, 20.0),
            velocity_y: Span::new(-30.0, -10.0),
            lifetime: Span::new(0.5, 1.5),
            rise_acceleration: 20.0,
            burst_min: 1,
            burst_max: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskTuning {
    pub radius: f32,
    pub spawn_band: Span,
    pub health_restore: u32,
    /// Seconds of immunity granted at full health
    pub protection_duration: f32,
    /// Radians per second
    pub spin_rate: f32,
    pub float_rate: f32,
    /// Peak vertical bob in pixels
    pub float_amplitude: f32,
}

impl Default for MaskTuning {
    fn default() -> Self {
        Self {
            radius: 25.0,
            spawn_band: Span::new(500.0, 530.0),
            health_restore: 20,
            protection_duration: 5.0,
            spin_rate: 2.0,
            float_rate: 3.0,
            float_amplitude: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub hazard_interval: Span,
    pub mask_interval: Span,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            hazard_interval: Span::new(1.5, 3.0),
            mask_interval: Span::new(5.0, 10.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxTuning {
    pub ground_speed: f32,
    pub ground_pattern_width: f32,
    pub sky_speed: f32,
    pub sky_pattern_width: f32,
    /// Scroll rate multiplier outside of play (menu, game over)
    pub idle_rate: f32,
}

impl Default for ParallaxTuning {
    fn default() -> Self {
        Self {
            ground_speed: 200.0,
            ground_pattern_width: 200.0,
            sky_speed: 30.0,
            sky_pattern_width: 400.0,
            idle_rate: 0.3,
        }
    }
}

/// All gameplay balance values
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field: FieldTuning,
    pub player: PlayerTuning,
    pub hazard: HazardTuning,
    pub particle: ParticleTuning,
    pub mask: MaskTuning,
    pub spawn: SpawnTuning,
    pub parallax: ParallaxTuning,
}

impl Tuning {
    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let f = &self.field;
        if f.width <= 0.0 || f.height <= 0.0 {
            return Err(SettingsError::invalid("field", "width and height must be positive"));
        }
        if f.ground_y <= 0.0 || f.ground_y > f.height {
            return Err(SettingsError::invalid("field.ground_y", "ground must lie inside the field"));
        }

        let p = &self.player;
        if p.width <= 0.0 || p.height <= 0.0 {
            return Err(SettingsError::invalid("player", "width and height must be positive"));
        }
        if p.duck_height <= 0.0 || p.duck_height >= p.height {
            return Err(SettingsError::invalid(
                "player.duck_height",
                "must be positive and below the standing height",
            ));
        }
        if p.max_health == 0 {
            return Err(SettingsError::invalid("player.max_health", "must be at least 1"));
        }
        if p.damage_cooldown < 0.0 {
            return Err(SettingsError::invalid("player.damage_cooldown", "must not be negative"));
        }

        let h = &self.hazard;
        h.radius.check("hazard.radius")?;
        h.speed.check("hazard.speed")?;
        h.alpha.check("hazard.alpha")?;
        h.high_band.check("hazard.high_band")?;
        h.low_band.check("hazard.low_band")?;
        if h.radius.min <= 0.0 {
            return Err(SettingsError::invalid("hazard.radius", "must be positive"));
        }
        // Masks share this span
        if h.speed.min <= 0.0 {
            return Err(SettingsError::invalid("hazard.speed", "must be positive"));
        }
        if h.emission_interval <= 0.0 {
            return Err(SettingsError::invalid("hazard.emission_interval", "must be positive"));
        }

        let pt = &self.particle;
        pt.radius.check("particle.radius")?;
        pt.velocity_x.check("particle.velocity_x")?;
        pt.velocity_y.check("particle.velocity_y")?;
        pt.lifetime.check("particle.lifetime")?;
        if pt.lifetime.min <= 0.0 {
            return Err(SettingsError::invalid("particle.lifetime", "must be positive"));
        }
        if pt.burst_min > pt.burst_max {
            return Err(SettingsError::invalid("particle.burst_min", "greater than burst_max"));
        }

        self.mask.spawn_band.check("mask.spawn_band")?;
        if self.mask.radius <= 0.0 {
            return Err(SettingsError::invalid("mask.radius", "must be positive"));
        }

        self.spawn.hazard_interval.check("spawn.hazard_interval")?;
        self.spawn.mask_interval.check("spawn.mask_interval")?;
        if self.spawn.hazard_interval.min <= 0.0 || self.spawn.mask_interval.min <= 0.0 {
            return Err(SettingsError::invalid("spawn", "intervals must be positive"));
        }

        let px = &self.parallax;
        let widths = [px.ground_pattern_width, px.sky_pattern_width];
        if widths.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(SettingsError::invalid("parallax", "pattern widths must be positive"));
        }
        // At most one pattern width per step
        if !(0.0..=px.ground_pattern_width / MAX_STEP_DT).contains(&px.ground_speed) {
            return Err(SettingsError::invalid(
                "parallax.ground_speed",
                "must be between 0 and one pattern width per step",
            ));
        }
        if !(0.0..=px.sky_pattern_width / MAX_STEP_DT).contains(&px.sky_speed) {
            return Err(SettingsError::invalid(
                "parallax.sky_speed",
                "must be between 0 and one pattern width per step",
            ));
        }
        if !(0.0..=1.0).contains(&px.idle_rate) {
            return Err(SettingsError::invalid("parallax.idle_rate", "must be between 0 and 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut tuning = Tuning::default();
        tuning.hazard.speed = Span::new(300.0, 200.0);
        match tuning.validate() {
            Err(SettingsError::Invalid { field, .. }) => assert_eq!(field, "hazard.speed"),
            other => panic!("expected invalid hazard.speed, got {other:?}"),
        }
    }

    #[test]
    fn test_duck_height_must_be_shorter() {
        let mut tuning = Tuning::default();
        tuning.player.duck_height = tuning.player.height;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_still_or_backward_clouds_rejected() {
        for speed in [Span::new(0.0, 10.0), Span::new(-50.0, -10.0)] {
            let mut tuning = Tuning::default();
            tuning.hazard.speed = speed;
            assert!(matches!(
                tuning.validate(),
                Err(SettingsError::Invalid { field: "hazard.speed", .. })
            ));
        }
    }

    #[test]
    fn test_runaway_scroll_speed_rejected() {
        let mut tuning = Tuning::default();
        tuning.parallax.ground_speed = 1e13;
        assert!(matches!(
            tuning.validate(),
            Err(SettingsError::Invalid { field: "parallax.ground_speed", .. })
        ));

        let mut tuning = Tuning::default();
        tuning.parallax.sky_speed = f32::INFINITY;
        assert!(matches!(
            tuning.validate(),
            Err(SettingsError::Invalid { field: "parallax.sky_speed", .. })
        ));

        let mut tuning = Tuning::default();
        tuning.parallax.ground_speed = -1.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning =
            serde_json::from_str(r#"{ "player": { "jump_strength": 500.0 } }"#).unwrap();
        assert_eq!(tuning.player.jump_strength, 500.0);
        assert_eq!(tuning.player.gravity, PlayerTuning::default().gravity);
        assert_eq!(tuning.hazard, HazardTuning::default());
    }

    #[test]
    fn test_span_contains_is_inclusive() {
        let span = Span::new(1.0, 2.0);
        assert!(span.contains(1.0));
        assert!(span.contains(2.0));
        assert!(!span.contains(2.01));
    }
}
