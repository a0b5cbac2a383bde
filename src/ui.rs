//! Menu and game-over screen layout

use glam::Vec2;
use serde::Serialize;

use crate::sim::Rect;
use crate::tuning::FieldTuning;

pub const BUTTON_WIDTH: f32 = 300.0;
pub const BUTTON_HEIGHT: f32 = 60.0;

pub const TITLE: &str = "Healthy Breath Runner";

/// A clickable screen button
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
}

impl Button {
    /// Inclusive hit-test
    pub fn hit(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}

/// START button on the title screen
pub fn start_button(field: &FieldTuning) -> Button {
    Button {
        rect: Rect::new(
            field.width / 2.0 - BUTTON_WIDTH / 2.0,
            field.height / 2.0,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        ),
        label: "START",
    }
}

/// RESPAWN button on the game-over screen
pub fn respawn_button(field: &FieldTuning) -> Button {
    Button {
        rect: Rect::new(
            field.width / 2.0 - BUTTON_WIDTH / 2.0,
            field.height / 2.0 + 50.0,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        ),
        label: "RESPAWN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let field = FieldTuning::default();
        let start = start_button(&field);
        assert_eq!(start.rect, Rect::new(250.0, 300.0, 300.0, 60.0));
        let respawn = respawn_button(&field);
        assert_eq!(respawn.rect, Rect::new(250.0, 350.0, 300.0, 60.0));
    }

    #[test]
    fn test_hit_edges() {
        let start = start_button(&FieldTuning::default());
        assert!(start.hit(Vec2::new(250.0, 300.0)));
        assert!(start.hit(Vec2::new(550.0, 360.0)));
        assert!(!start.hit(Vec2::new(249.0, 330.0)));
        assert!(!start.hit(Vec2::new(400.0, 361.0)));
    }
}
