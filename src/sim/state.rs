//! Game state and phase transitions
//!
//! `GameState` owns the player and every entity collection. Entities hold no
//! reference back to it.

use serde::Serialize;

use super::hazard::Hazard;
use super::parallax::Parallax;
use super::particle::Particle;
use super::pickup::Mask;
use super::player::{MaskEffect, Player};
use super::rng::SimRng;
use super::spawn::SpawnScheduler;
use crate::consts::SCORE_PER_SECOND;
use crate::settings::{HazardMode, Settings};
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Title screen, waiting for START
    Menu,
    /// Active run
    Playing,
    /// Run ended, waiting for RESPAWN
    GameOver,
}

/// Something the host may want to react to (sound, effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    Started,
    HazardSpawned,
    MaskSpawned,
    PlayerHit { damage: u32, health: u32 },
    MaskCollected(MaskEffect),
    GameOver { score: u64, best_score: u64 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// `floor(survival_time * 10)` while playing
    pub score: u64,
    /// Highest score this process has seen; never decreases
    pub best_score: u64,
    /// Seconds survived in the current run
    pub survival_time: f64,
    pub player: Player,
    pub hazards: Vec<Hazard>,
    pub particles: Vec<Particle>,
    pub masks: Vec<Mask>,
    pub spawner: SpawnScheduler,
    pub parallax: Parallax,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    pub hazard_mode: HazardMode,
    pub tuning: Tuning,
    pub rng: SimRng,
    ducking: bool,
}

impl GameState {
    /// New game sitting in the menu with a fresh run prepared
    pub fn new(settings: &Settings) -> Self {
        let tuning = settings.tuning;
        let mut rng = SimRng::new(settings.seed());
        let spawner = SpawnScheduler::new(&tuning.spawn, &mut rng);
        let mut state = Self {
            phase: GamePhase::Menu,
            score: 0,
            best_score: 0,
            survival_time: 0.0,
            player: Player::new(&tuning.player, tuning.field.ground_y, settings.ducking),
            hazards: Vec::new(),
            particles: Vec::new(),
            masks: Vec::new(),
            spawner,
            parallax: Parallax::new(&tuning.parallax),
            events: Vec::new(),
            hazard_mode: settings.hazard_mode,
            tuning,
            rng,
            ducking: settings.ducking,
        };
        state.reset();
        state
    }

    /// Fresh player, empty collections, new spawn intervals, zeroed score.
    /// The phase and best score are left alone.
    pub fn reset(&mut self) {
        let t = &self.tuning;
        self.player = Player::new(&t.player, t.field.ground_y, self.ducking);
        self.hazards.clear();
        self.particles.clear();
        self.masks.clear();
        self.spawner = SpawnScheduler::new(&t.spawn, &mut self.rng);
        self.parallax = Parallax::new(&t.parallax);
        self.survival_time = 0.0;
        self.score = 0;
    }

    /// Menu -> Playing. Ignored in any other phase.
    pub fn start(&mut self) -> bool {
        self.begin_run(GamePhase::Menu)
    }

    /// GameOver -> Playing. Ignored in any other phase.
    pub fn respawn(&mut self) -> bool {
        self.begin_run(GamePhase::GameOver)
    }

    fn begin_run(&mut self, from: GamePhase) -> bool {
        if self.phase != from {
            return false;
        }
        self.reset();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Started);
        log::info!("Run started ({:?} -> Playing)", from);
        true
    }

    /// Playing -> GameOver once health is gone. Returns true on transition.
    pub fn check_death(&mut self) -> bool {
        if self.phase != GamePhase::Playing || !self.player.is_dead() {
            return false;
        }
        if self.score > self.best_score {
            log::info!("New best score: {} (was {})", self.score, self.best_score);
            self.best_score = self.score;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            score: self.score,
            best_score: self.best_score,
        });
        log::info!("Game over - score {}, best {}", self.score, self.best_score);
        true
    }

    /// Add survived time and recompute the score from it
    pub fn add_survival_time(&mut self, dt: f32) {
        self.survival_time += dt as f64;
        self.score = (self.survival_time * SCORE_PER_SECOND).floor() as u64;
    }

    pub fn spawn_hazard(&mut self) {
        let hazard = Hazard::spawn(
            self.hazard_mode,
            &self.tuning.hazard,
            &self.tuning.field,
            &mut self.rng,
        );
        log::debug!(
            "Spawned cloud at y={:.0} r={:.1} speed={:.0}",
            hazard.pos.y,
            hazard.radius,
            hazard.speed
        );
        self.hazards.push(hazard);
        self.events.push(GameEvent::HazardSpawned);
    }

    pub fn spawn_mask(&mut self) {
        let mask = Mask::spawn(
            &self.tuning.mask,
            &self.tuning.hazard,
            &self.tuning.field,
            &mut self.rng,
        );
        log::debug!("Spawned mask at y={:.0}", mask.pos.y);
        self.masks.push(mask);
        self.events.push(GameEvent::MaskSpawned);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_in_menu() {
        let state = GameState::new(&Settings::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 0);
        assert!(state.hazards.is_empty());
        assert_eq!(state.player.health, 100);
    }

    #[test]
    fn test_start_only_from_menu() {
        let mut state = GameState::new(&Settings::default());
        assert!(!state.respawn());
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.start());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.start());
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_death_updates_best_and_respawn_resets() {
        let mut state = GameState::new(&Settings::default());
        state.start();
        state.add_survival_time(4.25);
        assert_eq!(state.score, 42);
        state.spawn_hazard();
        state.player.take_damage(1000);

        assert!(state.check_death());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.best_score, 42);
        assert!(!state.check_death());

        assert!(state.respawn());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.survival_time, 0.0);
        assert!(state.hazards.is_empty());
        assert_eq!(state.player.health, 100);
        assert_eq!(state.best_score, 42);
    }

    #[test]
    fn test_lower_score_keeps_best() {
        let mut state = GameState::new(&Settings::default());
        state.best_score = 100;
        state.start();
        state.add_survival_time(1.0);
        state.player.take_damage(1000);
        state.check_death();
        assert_eq!(state.best_score, 100);
        assert_eq!(state.score, 10);
    }
}
