//! The runner: gravity, jumping, ducking, health and protection

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, rect_circle_overlap};
use super::particle::Particle;
use crate::tuning::PlayerTuning;

/// Outcome of picking up a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskEffect {
    Health,
    Protection,
}

/// Running animation state (visual only, but deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RunAnimation {
    pub time: f32,
    /// Horizontal bob in pixels
    pub offset: f32,
    /// Vertical bob in pixels (drawn upward)
    pub vertical_offset: f32,
    /// Leg swing phase in `[0, 2π)`
    pub leg_phase: f32,
}

impl RunAnimation {
    const SPEED: f32 = 12.0;

    fn advance(&mut self, dt: f32, on_ground: bool) {
        if on_ground {
            self.time += dt * Self::SPEED;
            self.offset = self.time.sin() * 2.0;
            self.vertical_offset = (self.time * 2.0).sin().abs() * 2.0;
            self.leg_phase = (self.time * 2.0).rem_euclid(TAU);
        } else {
            self.vertical_offset = 0.0;
            self.leg_phase = 0.0;
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Top-left corner of the body
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub velocity_y: f32,
    pub on_ground: bool,
    pub ducking: bool,
    pub health: u32,
    pub max_health: u32,
    /// Seconds until the next hit may land
    pub damage_cooldown: f32,
    /// Seconds of immunity left
    pub protection_timer: f32,
    pub animation: RunAnimation,
    /// Whether duck input is honored
    pub can_duck: bool,
    #[serde(skip)]
    tuning: PlayerTuning,
    #[serde(skip)]
    ground_y: f32,
}

impl Player {
    /// Fresh player standing on the ground with full health
    pub fn new(tuning: &PlayerTuning, ground_y: f32, can_duck: bool) -> Self {
        Self {
            pos: Vec2::new(tuning.start_x, ground_y - tuning.height),
            width: tuning.width,
            height: tuning.height,
            velocity_y: 0.0,
            on_ground: true,
            ducking: false,
            health: tuning.max_health,
            max_health: tuning.max_health,
            damage_cooldown: 0.0,
            protection_timer: 0.0,
            animation: RunAnimation::default(),
            can_duck,
            tuning: *tuning,
            ground_y,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.velocity_y += self.tuning.gravity * dt;
        self.pos.y += self.velocity_y * dt;

        let ground_level = self.ground_y - self.height;
        if self.pos.y >= ground_level {
            self.pos.y = ground_level;
            self.velocity_y = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }

        self.animation.advance(dt, self.on_ground);

        if self.damage_cooldown > 0.0 {
            self.damage_cooldown = (self.damage_cooldown - dt).max(0.0);
        }
        if self.protection_timer > 0.0 {
            self.protection_timer = (self.protection_timer - dt).max(0.0);
        }
    }

    pub fn is_protected(&self) -> bool {
        self.protection_timer > 0.0
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub fn jump(&mut self) {
        if !self.on_ground {
            return;
        }
        if self.ducking {
            self.unduck();
        }
        self.velocity_y = -self.tuning.jump_strength;
        self.on_ground = false;
    }

    pub fn duck(&mut self) {
        if !self.can_duck || !self.on_ground || self.ducking {
            return;
        }
        self.ducking = true;
        self.set_height(self.tuning.duck_height);
    }

    pub fn unduck(&mut self) {
        if !self.on_ground || !self.ducking {
            return;
        }
        self.ducking = false;
        self.set_height(self.tuning.height);
    }

    /// Change height keeping the feet on the ground line
    fn set_height(&mut self, height: f32) {
        self.height = height;
        self.pos.y = self.ground_y - height;
    }

    /// Apply a hit unless protected or still cooling down. Returns whether it landed.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        if self.is_protected() || self.damage_cooldown > 0.0 {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        self.damage_cooldown = self.tuning.damage_cooldown;
        true
    }

    /// Heal when hurt, otherwise grant protection
    pub fn collect_mask(&mut self, restore: u32, protection_duration: f32) -> MaskEffect {
        if self.health < self.max_health {
            self.health = self.health.saturating_add(restore).min(self.max_health);
            MaskEffect::Health
        } else {
            self.protection_timer = protection_duration;
            MaskEffect::Protection
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Radius of the circle used for pickup tests
    pub fn approx_radius(&self) -> f32 {
        self.width.max(self.height) / 2.0
    }

    pub fn touches_circle(&self, center: Vec2, radius: f32) -> bool {
        rect_circle_overlap(&self.bounds(), center, radius)
    }

    pub fn touches_particle(&self, particle: &Particle) -> bool {
        self.touches_circle(particle.pos, particle.radius)
    }

    /// Column above the feet where ambient smoke gathers
    pub fn spawn_area(&self) -> Rect {
        let w = self.tuning.spawn_area_width;
        let h = self.tuning.spawn_area_height;
        Rect::new(
            self.pos.x + (self.width - w) / 2.0,
            self.pos.y + self.height - h,
            w,
            h,
        )
    }

    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }
}
