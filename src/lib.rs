//! Healthy Breath Runner - a single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, game phases)
//! - `game`: Host-facing facade (frame stepping, input events, draw list)
//! - `render`: Render snapshot as an ordered list of draw commands
//! - `ui`: Menu and game-over button layout
//! - `tuning`: Data-driven game balance
//! - `settings`: Runtime settings loaded from JSON

pub mod game;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use settings::{HazardMode, Settings, SettingsError};
pub use tuning::Tuning;

/// Engine constants that are not gameplay balance
pub mod consts {
    /// Largest simulation step (one 60 Hz frame)
    pub const MAX_STEP_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Seed used when settings don't pin one
    pub const DEFAULT_SEED: u64 = 0x0B2E_A7E5;
    /// Score points per second survived
    pub const SCORE_PER_SECOND: f64 = 10.0;
}
