//! Host-facing game facade
//!
//! The host creates one `Game`, forwards input events as they arrive, calls
//! `update` once per frame with the elapsed time, then asks for the draw list.

use glam::Vec2;

use crate::consts::{MAX_STEP_DT, MAX_SUBSTEPS};
use crate::render::{self, DrawCommand};
use crate::settings::Settings;
use crate::sim::{AutopilotAction, GameEvent, GamePhase, GameState, autopilot, tick};
use crate::ui;

/// Game instance holding all state
pub struct Game {
    state: GameState,
}

impl Game {
    /// Build the game in the menu phase
    pub fn create(settings: &Settings) -> Self {
        log::info!(
            "Creating game (mode: {}, ducking: {}, seed: {})",
            settings.hazard_mode.as_str(),
            settings.ducking,
            settings.seed()
        );
        Self {
            state: GameState::new(settings),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Advance by one host frame. Long frames are clamped and split into
    /// steps no longer than `MAX_STEP_DT`. Returns the number of ticks run.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        let mut remaining = frame_dt.min(MAX_STEP_DT * MAX_SUBSTEPS as f32);
        let mut steps = 0;
        // Leftovers below a microsecond are float noise from the split
        while remaining > 1e-6 && steps < MAX_SUBSTEPS {
            let dt = remaining.min(MAX_STEP_DT);
            tick(&mut self.state, dt);
            remaining -= dt;
            steps += 1;
        }
        steps
    }

    pub fn on_jump_pressed(&mut self) {
        if self.state.phase == GamePhase::Playing {
            self.state.player.jump();
        }
    }

    pub fn on_duck_pressed(&mut self) {
        if self.state.phase == GamePhase::Playing {
            self.state.player.duck();
        }
    }

    pub fn on_duck_released(&mut self) {
        if self.state.phase == GamePhase::Playing {
            self.state.player.unduck();
        }
    }

    /// Route a click to whichever button the current screen shows
    pub fn on_primary_click(&mut self, x: f32, y: f32) {
        let point = Vec2::new(x, y);
        let field = self.state.tuning.field;
        match self.state.phase {
            GamePhase::Menu => {
                if ui::start_button(&field).hit(point) {
                    self.state.start();
                }
            }
            GamePhase::GameOver => {
                if ui::respawn_button(&field).hit(point) {
                    self.state.respawn();
                }
            }
            GamePhase::Playing => {}
        }
    }

    /// Press whatever the demo bot asks for this frame
    pub fn apply_autopilot(&mut self) -> AutopilotAction {
        let action = autopilot::decide(&self.state);
        if action.jump {
            self.on_jump_pressed();
        }
        if action.duck {
            self.on_duck_pressed();
        } else if self.state.player.ducking {
            self.on_duck_released();
        }
        action
    }

    pub fn draw_list(&self, cursor: Vec2) -> Vec<DrawCommand> {
        render::draw_list(&self.state, cursor)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
