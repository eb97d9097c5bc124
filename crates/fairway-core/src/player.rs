use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a player in the event.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A player's handicaps for one group on one course.
///
/// `playing_handicap` is relative to the lowest course handicap in the
/// group and is supplied by the caller (see the normalizer in
/// `fairway-scoring`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHandicapContext {
    pub player_id: PlayerId,
    pub course_handicap: i32,
    pub playing_handicap: i32,
}

/// One user-entered gross score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossHoleScore {
    pub player_id: PlayerId,
    pub hole_number: u8,
    pub gross: u8,
}

/// A participant on one side of a match, with their gross scores keyed by
/// hole number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePlayer {
    pub handicap: PlayerHandicapContext,
    pub scores: BTreeMap<u8, u8>,
}

impl SidePlayer {
    /// A player with no scores entered yet.
    pub fn new(handicap: PlayerHandicapContext) -> Self {
        Self {
            handicap,
            scores: BTreeMap::new(),
        }
    }

    /// Collect this player's scores from a flat score feed. Entries for other
    /// players are ignored; when a hole appears more than once the last entry
    /// wins.
    pub fn with_scores<'a>(
        handicap: PlayerHandicapContext,
        feed: impl IntoIterator<Item = &'a GrossHoleScore>,
    ) -> Self {
        let mut player = Self::new(handicap);
        for entry in feed {
            if entry.player_id == player.handicap.player_id {
                player.scores.insert(entry.hole_number, entry.gross);
            }
        }
        player
    }

    pub fn id(&self) -> &PlayerId {
        &self.handicap.player_id
    }

    /// Record (or overwrite) a gross score.
    pub fn record(&mut self, hole_number: u8, gross: u8) {
        self.scores.insert(hole_number, gross);
    }

    pub fn gross(&self, hole_number: u8) -> Option<u8> {
        self.scores.get(&hole_number).copied()
    }
}

/// One side of a match: a single player or a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSide {
    pub label: String,
    pub players: Vec<SidePlayer>,
}

impl MatchSide {
    pub fn new(label: impl Into<String>, players: Vec<SidePlayer>) -> Self {
        Self {
            label: label.into(),
            players,
        }
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id().clone()).collect()
    }

    /// Whether every player on this side has a score for the hole.
    pub fn has_all_scores(&self, hole_number: u8) -> bool {
        self.players.iter().all(|p| p.scores.contains_key(&hole_number))
    }
}
