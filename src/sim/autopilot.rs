//! Idle/demo mode - a simple bot that plays the game
//!
//! Looks at the nearest cloud still ahead of the player and either ducks
//! under it or times a jump so the player is near the top of the arc while
//! the cloud passes.

use super::hazard::Hazard;
use super::state::{GamePhase, GameState};

/// Fraction of a second before contact at which the bot jumps
const JUMP_LEAD_TIME: f32 = 0.25;

/// Inputs the bot wants held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutopilotAction {
    pub jump: bool,
    pub duck: bool,
}

/// Decide what to press given the current state
pub fn decide(state: &GameState) -> AutopilotAction {
    if state.phase != GamePhase::Playing {
        return AutopilotAction::default();
    }

    let player = &state.player;
    let player_right = player.pos.x + player.width;
    let ground = state.tuning.field.ground_y;
    let standing_top = ground - state.tuning.player.height;
    let ducked_top = ground - state.tuning.player.duck_height;

    let threat = state
        .hazards
        .iter()
        .filter(|h| h.pos.x + h.radius >= player.pos.x)
        .filter(|h| h.pos.y + h.radius > standing_top)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

    let Some(threat) = threat else {
        return AutopilotAction::default();
    };

    let gap = gap_ahead(threat, player_right);
    let clears_ducked = threat.pos.y + threat.radius < ducked_top;

    if player.can_duck && clears_ducked {
        // Hold the duck until the cloud has passed
        return AutopilotAction {
            jump: false,
            duck: gap <= threat.speed * JUMP_LEAD_TIME * 2.0,
        };
    }

    AutopilotAction {
        jump: gap > 0.0 && gap <= threat.speed * JUMP_LEAD_TIME,
        duck: false,
    }
}

/// Horizontal distance from the player's front to the cloud's left edge
fn gap_ahead(hazard: &Hazard, player_right: f32) -> f32 {
    hazard.pos.x - hazard.radius - player_right
}
