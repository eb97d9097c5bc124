use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::format::Side;

/// Tournament-wide settings, loaded from `fairway.toml`.
///
/// The engine never reads this directly; callers pass the values they need
/// into each scoring call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Maximum net score over par (plus strokes) counted on any hole.
    pub net_max_over_par: u8,
    pub teams: TeamNames,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            net_max_over_par: 3,
            teams: TeamNames::default(),
        }
    }
}

/// Display names for the two competing teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamNames {
    pub a: String,
    pub b: String,
}

impl Default for TeamNames {
    fn default() -> Self {
        Self {
            a: "Team A".to_string(),
            b: "Team B".to_string(),
        }
    }
}

impl TeamNames {
    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

impl TournamentConfig {
    /// Load config from `FAIRWAY_CONFIG` or `config/fairway.toml`, falling
    /// back to defaults if the file is missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("FAIRWAY_CONFIG")
            .unwrap_or_else(|_| "config/fairway.toml".to_string());
        match Self::from_file(&path) {
            Ok(cfg) => cfg,
            Err(ConfigError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to parse {path}: {e}, using defaults");
                Self::default()
            },
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}
