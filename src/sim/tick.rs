//! Per-tick simulation update
//!
//! Order while playing: scroll, score, player, death check, spawns, clouds,
//! particles, masks, death check. Menu and game over only scroll the
//! background at the idle rate.

use glam::Vec2;

use super::hazard::{Hazard, HazardKind};
use super::particle::Particle;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game by `dt` seconds
pub fn tick(state: &mut GameState, dt: f32) {
    if state.phase != GamePhase::Playing {
        let rate = state.tuning.parallax.idle_rate;
        state.parallax.advance(dt, rate);
        return;
    }

    state.parallax.advance(dt, 1.0);
    state.add_survival_time(dt);
    state.player.update(dt);
    if state.check_death() {
        return;
    }

    let due = state.spawner.advance(dt, &mut state.rng);
    if due.hazard {
        state.spawn_hazard();
    }
    if due.mask {
        state.spawn_mask();
    }

    update_hazards(state, dt);
    update_particles(state, dt);
    update_masks(state, dt);

    state.check_death();
}

fn update_hazards(state: &mut GameState, dt: f32) {
    let GameState {
        hazards,
        particles,
        player,
        rng,
        events,
        tuning,
        ..
    } = state;
    let spawn_area = player.spawn_area();

    hazards.retain_mut(|hazard: &mut Hazard| {
        hazard.update(dt);
        match hazard.kind {
            HazardKind::Contact { .. } => {
                if player.touches_circle(hazard.pos, hazard.radius) {
                    let damage = tuning.hazard.contact_damage;
                    if player.take_damage(damage) {
                        events.push(GameEvent::PlayerHit {
                            damage,
                            health: player.health,
                        });
                    }
                    return false;
                }
            }
            HazardKind::Emitter { .. } => {
                if hazard.should_emit() && hazard.bounds().overlaps(&spawn_area) {
                    let burst = &tuning.particle;
                    let count = rng.int_inclusive(burst.burst_min, burst.burst_max);
                    for _ in 0..count {
                        let pos = Vec2::new(
                            rng.uniform(spawn_area.x, spawn_area.right()),
                            rng.uniform(spawn_area.y, spawn_area.bottom()),
                        );
                        particles.push(Particle::spawn(pos, &tuning.particle, rng));
                    }
                }
            }
        }
        !hazard.is_off_screen()
    });
}

fn update_particles(state: &mut GameState, dt: f32) {
    let GameState {
        particles,
        player,
        events,
        tuning,
        ..
    } = state;
    let damage = tuning.hazard.particle_damage;

    particles.retain_mut(|particle| {
        particle.update(dt);
        if player.touches_particle(particle) && player.take_damage(damage) {
            events.push(GameEvent::PlayerHit {
                damage,
                health: player.health,
            });
        }
        particle.is_alive()
    });
}

fn update_masks(state: &mut GameState, dt: f32) {
    let GameState {
        masks,
        player,
        events,
        tuning,
        ..
    } = state;

    masks.retain_mut(|mask| {
        mask.update(dt);
        if mask.touches(player) {
            let effect =
                player.collect_mask(tuning.mask.health_restore, tuning.mask.protection_duration);
            log::debug!("Mask collected: {:?}", effect);
            events.push(GameEvent::MaskCollected(effect));
            return false;
        }
        !mask.is_off_screen()
    });
}
