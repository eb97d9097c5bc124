use thiserror::Error;

use crate::format::Side;
use crate::player::PlayerId;

/// Failures raised by the scoring engine.
///
/// Whole-match evaluation never reports a hole with missing scores as an
/// error; that hole is simply not yet played. `MissingScore` only surfaces
/// from the explicit single-hole entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("missing score for player {player} on hole {hole}")]
    MissingScore { player: PlayerId, hole: u8 },

    #[error("player {player} has negative playing handicap {playing_handicap}")]
    InvalidHandicap {
        player: PlayerId,
        playing_handicap: i32,
    },

    #[error("invalid hole data: {0}")]
    InvalidHoleData(String),

    #[error("unknown match format `{0}`")]
    InvalidFormat(String),

    #[error("side {side} has {found} player(s), format requires {expected}")]
    InvalidSide {
        side: Side,
        expected: usize,
        found: usize,
    },

    #[error("player {player} has invalid gross score {gross} on hole {hole}")]
    InvalidGross {
        player: PlayerId,
        hole: u8,
        gross: u8,
    },
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
