//! Runtime settings
//!
//! Loaded from an optional JSON file by the host. The simulation only reads
//! these at construction time.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// How pollution clouds hurt the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HazardMode {
    /// Clouds hit the player directly and vanish on contact
    #[default]
    Contact,
    /// Clouds release smoke particles around the player; particles do the damage
    Emitter,
}

impl HazardMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HazardMode::Contact => "contact",
            HazardMode::Emitter => "emitter",
        }
    }
}

impl std::str::FromStr for HazardMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contact" => Ok(HazardMode::Contact),
            "emitter" | "ambient" => Ok(HazardMode::Emitter),
            _ => Err(SettingsError::invalid("hazard_mode", "expected `contact` or `emitter`")),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hazard_mode: HazardMode,
    /// Allow the player to duck under high clouds
    pub ducking: bool,
    /// RNG seed; `None` uses the built-in default
    pub seed: Option<u64>,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hazard_mode: HazardMode::Contact,
            ducking: true,
            seed: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Smoke-emitting clouds with ducking disabled
    pub fn emitter() -> Self {
        Self {
            hazard_mode: HazardMode::Emitter,
            ducking: false,
            ..Self::default()
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(crate::consts::DEFAULT_SEED)
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}: {})",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Errors raised while loading settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: &'static str },
}

impl SettingsError {
    pub fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read settings: {e}"),
            Self::Parse(e) => write!(f, "malformed settings json: {e}"),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
