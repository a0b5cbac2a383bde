//! Render snapshot
//!
//! The simulation never draws. Each frame the host asks for an ordered list of
//! draw commands, built fresh from the current state, and paints them back to
//! front however it likes.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GamePhase, GameState, Rect, RunAnimation};
use crate::ui::{self, Button};

/// What a piece of text is for; the renderer picks font and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextRole {
    Title,
    Score,
    Hint,
}

/// One draw operation, in painter's order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Sky, clouds pattern, ground and grass pattern
    Background { sky_scroll: f32, ground_scroll: f32 },
    /// Full-screen darkening
    Dim { alpha: f32 },
    Particle { pos: Vec2, radius: f32, alpha: f32 },
    Hazard { pos: Vec2, radius: f32, alpha: f32 },
    Mask { pos: Vec2, radius: f32, rotation: f32 },
    Player {
        rect: Rect,
        on_ground: bool,
        ducking: bool,
        protected: bool,
        animation: RunAnimation,
    },
    HealthBar { fraction: f32 },
    Button { button: Button, hover: bool },
    Text {
        text: String,
        center: Vec2,
        size: f32,
        role: TextRole,
    },
}

fn text(text: impl Into<String>, x: f32, y: f32, size: f32, role: TextRole) -> DrawCommand {
    DrawCommand::Text {
        text: text.into(),
        center: Vec2::new(x, y),
        size,
        role,
    }
}

/// Build this frame's draw list. `cursor` drives button hover.
pub fn draw_list(state: &GameState, cursor: Vec2) -> Vec<DrawCommand> {
    let field = &state.tuning.field;
    let mut cmds = vec![DrawCommand::Background {
        sky_scroll: state.parallax.sky.offset,
        ground_scroll: state.parallax.ground.offset,
    }];

    match state.phase {
        GamePhase::Menu => {
            cmds.push(text(ui::TITLE, field.width / 2.0, 150.0, 48.0, TextRole::Title));
            let start = ui::start_button(field);
            cmds.push(DrawCommand::Button {
                button: start,
                hover: start.hit(cursor),
            });
            let hint_y = start.rect.bottom() + 50.0;
            cmds.push(text("Press SPACE to jump", field.width / 2.0, hint_y, 20.0, TextRole::Hint));
            if state.player.can_duck {
                cmds.push(text(
                    "Hold DOWN to duck",
                    field.width / 2.0,
                    hint_y + 30.0,
                    20.0,
                    TextRole::Hint,
                ));
            }
        }
        GamePhase::GameOver => {
            cmds.push(DrawCommand::Dim { alpha: 0.6 });
            cmds.push(text("GAME OVER", field.width / 2.0, 150.0, 56.0, TextRole::Title));
            cmds.push(text(
                format!("Score: {}", state.score),
                field.width / 2.0,
                220.0,
                32.0,
                TextRole::Score,
            ));
            if state.best_score > 0 {
                cmds.push(text(
                    format!("Best: {}", state.best_score),
                    field.width / 2.0,
                    260.0,
                    32.0,
                    TextRole::Score,
                ));
            }
            let respawn = ui::respawn_button(field);
            cmds.push(DrawCommand::Button {
                button: respawn,
                hover: respawn.hit(cursor),
            });
        }
        GamePhase::Playing => {
            cmds.extend(state.particles.iter().map(|p| DrawCommand::Particle {
                pos: p.pos,
                radius: p.radius,
                alpha: p.alpha(),
            }));
            cmds.extend(state.hazards.iter().map(|h| DrawCommand::Hazard {
                pos: h.pos,
                radius: h.radius,
                alpha: h.alpha,
            }));
            cmds.extend(state.masks.iter().map(|m| DrawCommand::Mask {
                pos: m.visual_pos(),
                radius: m.radius,
                rotation: m.rotation,
            }));
            let player = &state.player;
            cmds.push(DrawCommand::Player {
                rect: player.bounds(),
                on_ground: player.on_ground,
                ducking: player.ducking,
                protected: player.is_protected(),
                animation: player.animation,
            });
            cmds.push(DrawCommand::HealthBar {
                fraction: player.health_fraction(),
            });
            cmds.push(text(
                format!("Score: {}", state.score),
                field.width - 150.0,
                40.0,
                24.0,
                TextRole::Score,
            ));
        }
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Hazard, HazardKind};

    #[test]
    fn test_menu_draws_title_and_hovered_start() {
        let state = GameState::new(&Settings::default());
        let cmds = draw_list(&state, Vec2::new(400.0, 330.0));
        assert!(matches!(cmds[0], DrawCommand::Background { .. }));
        assert!(cmds.iter().any(|c| matches!(
            c,
            DrawCommand::Text { role: TextRole::Title, text, .. } if text == ui::TITLE
        )));
        assert!(cmds.iter().any(|c| matches!(
            c,
            DrawCommand::Button { hover: true, button } if button.label == "START"
        )));
    }

    #[test]
    fn test_playing_order_back_to_front() {
        let mut state = GameState::new(&Settings::default());
        state.start();
        state.hazards.push(Hazard::new(
            Vec2::new(500.0, 510.0),
            20.0,
            260.0,
            0.4,
            HazardKind::Contact { margin: 10.0 },
        ));
        let cmds = draw_list(&state, Vec2::ZERO);
        let hazard = cmds.iter().position(|c| matches!(c, DrawCommand::Hazard { .. }));
        let player = cmds.iter().position(|c| matches!(c, DrawCommand::Player { .. }));
        let bar = cmds.iter().position(|c| matches!(c, DrawCommand::HealthBar { .. }));
        assert!(hazard < player && player < bar);
        assert!(cmds.contains(&DrawCommand::HealthBar { fraction: 1.0 }));
    }

    #[test]
    fn test_game_over_hides_zero_best() {
        let mut state = GameState::new(&Settings::default());
        state.start();
        state.player.take_damage(1000);
        state.check_death();
        let cmds = draw_list(&state, Vec2::ZERO);
        assert!(cmds.contains(&DrawCommand::Dim { alpha: 0.6 }));
        assert!(!cmds.iter().any(|c| matches!(
            c,
            DrawCommand::Text { text, .. } if text.starts_with("Best")
        )));
    }
}
