//! Individual leaderboard and team tallies across an event.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use fairway_core::config::TeamNames;
use fairway_core::course::Course;
use fairway_core::format::Side;
use fairway_core::outcome::{MatchOutcome, MatchStatus};
use fairway_core::player::{PlayerId, SidePlayer};

use crate::handicap::{net_score, strokes_on_hole};

/// One player's round so far, scored off their full course handicap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub player_id: PlayerId,
    pub gross: i32,
    pub net: i32,
    /// Par of the holes played so far.
    pub par: i32,
    /// Holes played.
    pub thru: usize,
}

impl RoundSummary {
    /// Summarize `player`'s scores on `course`.
    ///
    /// Uses the course handicap, not the match-relative playing handicap.
    /// Scores for holes that are not on the course are ignored.
    pub fn compute(player: &SidePlayer, course: &Course, net_max_over_par: u8) -> Self {
        let ch = player.handicap.course_handicap;
        let mut summary = Self {
            player_id: player.id().clone(),
            gross: 0,
            net: 0,
            par: 0,
            thru: 0,
        };
        for hole in course.holes() {
            let Some(gross) = player.gross(hole.hole_number) else {
                continue;
            };
            let strokes = strokes_on_hole(ch, hole.difficulty_rank);
            summary.gross += gross as i32;
            summary.net += net_score(gross as i32, strokes, hole.par as i32, net_max_over_par);
            summary.par += hole.par as i32;
            summary.thru += 1;
        }
        summary
    }

    /// Net score relative to par of the holes played (negative is under).
    pub fn net_to_par(&self) -> i32 {
        self.net - self.par
    }
}

/// A player's line on the event leaderboard, summed over their rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_id: PlayerId,
    /// 1-based position; `None` until the player has a score.
    pub position: Option<usize>,
    pub total_gross: i32,
    pub total_net: i32,
    pub total_par: i32,
    pub thru: usize,
    pub rounds: Vec<RoundSummary>,
}

impl LeaderboardEntry {
    pub fn from_rounds(player_id: PlayerId, rounds: Vec<RoundSummary>) -> Self {
        Self {
            player_id,
            position: None,
            total_gross: rounds.iter().map(|r| r.gross).sum(),
            total_net: rounds.iter().map(|r| r.net).sum(),
            total_par: rounds.iter().map(|r| r.par).sum(),
            thru: rounds.iter().map(|r| r.thru).sum(),
            rounds,
        }
    }

    pub fn net_to_par(&self) -> i32 {
        self.total_net - self.total_par
    }
}

/// Rank entries by net to par.
///
/// Players who have not played a hole sort after everyone else with no
/// position. Ties share a position and are listed by player id.
pub fn leaderboard(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| match (a.thru == 0, b.thru == 0) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => a.player_id.cmp(&b.player_id),
        (false, false) => a
            .net_to_par()
            .cmp(&b.net_to_par())
            .then_with(|| a.player_id.cmp(&b.player_id)),
    });

    let mut previous: Option<(i32, usize)> = None;
    for (i, entry) in entries.iter_mut().enumerate() {
        if entry.thru == 0 {
            entry.position = None;
            continue;
        }
        let score = entry.net_to_par();
        let position = match previous {
            Some((prev_score, prev_pos)) if prev_score == score => prev_pos,
            _ => i + 1,
        };
        entry.position = Some(position);
        previous = Some((score, position));
    }
    entries
}

/// Event-level points for the two teams across many matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamTally {
    pub team_a_match_points: f64,
    pub team_b_match_points: f64,
    pub team_a_hole_points: f64,
    pub team_b_hole_points: f64,
    pub matches_complete: usize,
    pub matches_in_progress: usize,
}

impl TeamTally {
    /// Sum outcomes in which side A is always the same team.
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a MatchOutcome>) -> Self {
        let mut tally = Self::default();
        for outcome in outcomes {
            tally.team_a_match_points += outcome.team_a_match_points;
            tally.team_b_match_points += outcome.team_b_match_points;
            tally.team_a_hole_points += outcome.team_a_total_points;
            tally.team_b_hole_points += outcome.team_b_total_points;
            match outcome.status {
                MatchStatus::Complete => tally.matches_complete += 1,
                MatchStatus::InProgress => tally.matches_in_progress += 1,
                MatchStatus::NotStarted => {},
            }
        }
        tally
    }

    /// Name of the team ahead on match points, `None` when level.
    pub fn leader<'a>(&self, teams: &'a TeamNames) -> Option<&'a str> {
        if self.team_a_match_points > self.team_b_match_points {
            Some(teams.name(Side::A))
        } else if self.team_b_match_points > self.team_a_match_points {
            Some(teams.name(Side::B))
        } else {
            None
        }
    }
}
