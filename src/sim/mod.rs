//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only comes from the caller's `dt`
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod hazard;
pub mod parallax;
pub mod particle;
pub mod pickup;
pub mod player;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::AutopilotAction;
pub use collision::{Rect, circles_overlap, rect_circle_overlap};
pub use hazard::{Hazard, HazardKind};
pub use parallax::{Parallax, ScrollLayer};
pub use particle::Particle;
pub use pickup::Mask;
pub use player::{MaskEffect, Player, RunAnimation};
pub use rng::SimRng;
pub use spawn::{SpawnDue, SpawnScheduler, SpawnTimer};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::tick;
