use serde::{Deserialize, Serialize};

use crate::format::MatchFormat;
use crate::player::PlayerId;

/// Progress of a match, derived only from how many holes are fully scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Complete,
}

impl MatchStatus {
    pub fn from_holes_completed(holes_completed: usize, hole_count: usize) -> Self {
        if holes_completed == 0 {
            Self::NotStarted
        } else if holes_completed >= hole_count {
            Self::Complete
        } else {
            Self::InProgress
        }
    }
}

/// Match-level result. For a match in progress this is the current standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "tie")]
    Tie,
    /// No points can be assigned yet.
    #[serde(rename = "none")]
    Undecided,
}

/// Points and rationale for one fully scored hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleResult {
    pub hole_number: u8,
    pub par: u8,
    /// Net scores in side-A player order.
    pub team_a_net: Vec<i32>,
    pub team_b_net: Vec<i32>,
    pub team_a_points: f64,
    pub team_b_points: f64,
    pub rationale: String,
}

/// Net totals behind a stroke-play decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeTotals {
    pub team_a: i32,
    pub team_b: i32,
}

/// Everything derived for one match from its raw gross scores.
///
/// Rebuilt from scratch on every evaluation; callers store it for display
/// only and never patch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub format: MatchFormat,
    pub team_a_label: String,
    pub team_b_label: String,
    pub team_a_players: Vec<PlayerId>,
    pub team_b_players: Vec<PlayerId>,
    pub hole_results: Vec<HoleResult>,
    pub team_a_total_points: f64,
    pub team_b_total_points: f64,
    pub team_a_match_points: f64,
    pub team_b_match_points: f64,
    pub winner: Winner,
    pub holes_completed: usize,
    pub status: MatchStatus,
    /// Running net totals for `singles_stroke`; `None` for match-play formats.
    pub stroke_totals: Option<StrokeTotals>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_completed_holes() {
        assert_eq!(MatchStatus::from_holes_completed(0, 18), MatchStatus::NotStarted);
        assert_eq!(MatchStatus::from_holes_completed(1, 18), MatchStatus::InProgress);
        assert_eq!(MatchStatus::from_holes_completed(17, 18), MatchStatus::InProgress);
        assert_eq!(MatchStatus::from_holes_completed(18, 18), MatchStatus::Complete);
    }

    #[test]
    fn wire_tags() {
        assert_eq!(
            serde_json::to_string(&MatchStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(serde_json::to_string(&Winner::Tie).unwrap(), "\"tie\"");
        assert_eq!(serde_json::to_string(&Winner::A).unwrap(), "\"A\"");
        assert_eq!(serde_json::to_string(&Winner::Undecided).unwrap(), "\"none\"");
    }
}
