//! Whole-match evaluation.
//!
//! Every call recomputes the outcome from the raw gross scores. Nothing is
//! carried between calls, so re-running after each score write always
//! agrees with the scores on file.

use fairway_core::course::{Course, Hole};
use fairway_core::error::ScoringError;
use fairway_core::format::{MatchFormat, Side};
use fairway_core::outcome::{HoleResult, MatchOutcome, MatchStatus, StrokeTotals, Winner};
use fairway_core::player::{MatchSide, SidePlayer};

use crate::formats::{HoleVerdict, evaluate_nets, lower_wins};
use crate::handicap::{net_score, strokes_on_hole};

/// Check side sizes, handicaps and score entries before any hole is scored.
fn validate_side(
    format: MatchFormat,
    course: &Course,
    side: Side,
    match_side: &MatchSide,
) -> Result<(), ScoringError> {
    let expected = format.players_per_side();
    if match_side.players.len() != expected {
        return Err(ScoringError::InvalidSide {
            side,
            expected,
            found: match_side.players.len(),
        });
    }
    for player in &match_side.players {
        let ph = player.handicap.playing_handicap;
        if ph < 0 {
            return Err(ScoringError::InvalidHandicap {
                player: player.id().clone(),
                playing_handicap: ph,
            });
        }
        for (&hole, &gross) in &player.scores {
            if gross == 0 || course.hole(hole).is_none() {
                return Err(ScoringError::InvalidGross {
                    player: player.id().clone(),
                    hole,
                    gross,
                });
            }
        }
    }
    Ok(())
}

fn player_net(player: &SidePlayer, hole: &Hole, net_max_over_par: u8) -> Option<i32> {
    let gross = player.gross(hole.hole_number)?;
    let strokes = strokes_on_hole(player.handicap.playing_handicap, hole.difficulty_rank);
    Some(net_score(
        gross as i32,
        strokes,
        hole.par as i32,
        net_max_over_par,
    ))
}

fn side_nets(side: &MatchSide, hole: &Hole, net_max_over_par: u8) -> Result<Vec<i32>, ScoringError> {
    side.players
        .iter()
        .map(|p| {
            player_net(p, hole, net_max_over_par).ok_or_else(|| ScoringError::MissingScore {
                player: p.id().clone(),
                hole: hole.hole_number,
            })
        })
        .collect()
}

fn score_hole(
    format: MatchFormat,
    hole: &Hole,
    team_a: &MatchSide,
    team_b: &MatchSide,
    net_max_over_par: u8,
) -> Result<HoleResult, ScoringError> {
    let team_a_net = side_nets(team_a, hole, net_max_over_par)?;
    let team_b_net = side_nets(team_b, hole, net_max_over_par)?;
    let HoleVerdict {
        team_a_points,
        team_b_points,
        rationale,
    } = evaluate_nets(format, &team_a_net, &team_b_net)?;
    Ok(HoleResult {
        hole_number: hole.hole_number,
        par: hole.par,
        team_a_net,
        team_b_net,
        team_a_points,
        team_b_points,
        rationale,
    })
}

/// Score one specific hole.
///
/// Unlike [`evaluate_match`], a participant without a score for this hole
/// is an error. Every recorded score is still validated, so a bad entry on
/// any hole fails the call with `InvalidGross`, the same as it would for the
/// whole match.
///
/// `singles_stroke` holes score 0–0, except the final hole once both
/// players have every hole in: it then carries the stroke-play decision,
/// matching the result [`evaluate_match`] reports for it.
pub fn evaluate_hole(
    format: MatchFormat,
    course: &Course,
    hole_number: u8,
    team_a: &MatchSide,
    team_b: &MatchSide,
    net_max_over_par: u8,
) -> Result<HoleResult, ScoringError> {
    validate_side(format, course, Side::A, team_a)?;
    validate_side(format, course, Side::B, team_b)?;
    let hole = course.hole(hole_number).ok_or_else(|| {
        ScoringError::InvalidHoleData(format!("hole {hole_number} is not on {}", course.name()))
    })?;
    let mut result = score_hole(format, hole, team_a, team_b, net_max_over_par)?;
    if format == MatchFormat::SinglesStroke
        && hole_number == course.last_hole_number()
        && course
            .holes()
            .iter()
            .all(|h| team_a.has_all_scores(h.hole_number) && team_b.has_all_scores(h.hole_number))
    {
        let totals = StrokeTotals {
            team_a: stroke_total(team_a, course, net_max_over_par)?,
            team_b: stroke_total(team_b, course, net_max_over_par)?,
        };
        decide_stroke_play(&mut result, totals);
    }
    Ok(result)
}

/// Net total for one side over every hole on the course.
fn stroke_total(
    side: &MatchSide,
    course: &Course,
    net_max_over_par: u8,
) -> Result<i32, ScoringError> {
    course
        .holes()
        .iter()
        .map(|hole| side_nets(side, hole, net_max_over_par).map(|nets| nets.iter().sum::<i32>()))
        .sum()
}

/// Score a whole match from the scores entered so far.
///
/// Holes where any participant is missing a score are left out. Status and
/// match points are derived from the holes that are fully scored:
/// - no holes: `not_started`, 0–0, winner `none`
/// - `singles_stroke` before the last hole is in: 0–0, winner `none`
/// - otherwise the side with more hole points takes the match point, equal
///   totals halve it
pub fn evaluate_match(
    format: MatchFormat,
    course: &Course,
    team_a: &MatchSide,
    team_b: &MatchSide,
    net_max_over_par: u8,
) -> Result<MatchOutcome, ScoringError> {
    validate_side(format, course, Side::A, team_a)?;
    validate_side(format, course, Side::B, team_b)?;

    let mut hole_results = Vec::with_capacity(course.hole_count());
    for hole in course.holes() {
        if !(team_a.has_all_scores(hole.hole_number) && team_b.has_all_scores(hole.hole_number)) {
            continue;
        }
        let result = score_hole(format, hole, team_a, team_b, net_max_over_par)?;
        tracing::trace!(
            hole = result.hole_number,
            a = result.team_a_points,
            b = result.team_b_points,
            "{}",
            result.rationale
        );
        hole_results.push(result);
    }

    let holes_completed = hole_results.len();
    let status = MatchStatus::from_holes_completed(holes_completed, course.hole_count());

    let stroke_totals = if format == MatchFormat::SinglesStroke {
        let totals = StrokeTotals {
            team_a: hole_results.iter().map(|h| h.team_a_net[0]).sum(),
            team_b: hole_results.iter().map(|h| h.team_b_net[0]).sum(),
        };
        if status == MatchStatus::Complete {
            if let Some(last) = hole_results.last_mut() {
                decide_stroke_play(last, totals);
            }
        }
        Some(totals)
    } else {
        None
    };

    let team_a_total_points: f64 = hole_results.iter().map(|h| h.team_a_points).sum();
    let team_b_total_points: f64 = hole_results.iter().map(|h| h.team_b_points).sum();

    let undecided = status == MatchStatus::NotStarted
        || (format == MatchFormat::SinglesStroke && status != MatchStatus::Complete);
    let (team_a_match_points, team_b_match_points, winner) = if undecided {
        (0.0, 0.0, Winner::Undecided)
    } else if team_a_total_points > team_b_total_points {
        (1.0, 0.0, Winner::A)
    } else if team_b_total_points > team_a_total_points {
        (0.0, 1.0, Winner::B)
    } else {
        (0.5, 0.5, Winner::Tie)
    };

    tracing::debug!(
        %format,
        holes_completed,
        ?status,
        team_a_total_points,
        team_b_total_points,
        ?winner,
        "Evaluated match {} vs {}",
        team_a.label,
        team_b.label
    );

    Ok(MatchOutcome {
        format,
        team_a_label: team_a.label.clone(),
        team_b_label: team_b.label.clone(),
        team_a_players: team_a.player_ids(),
        team_b_players: team_b.player_ids(),
        hole_results,
        team_a_total_points,
        team_b_total_points,
        team_a_match_points,
        team_b_match_points,
        winner,
        holes_completed,
        status,
        stroke_totals,
    })
}

/// Record the stroke-play decision on the final hole's result.
///
/// The whole match point rides on that one hole so that summing hole points
/// still gives the match total.
fn decide_stroke_play(last: &mut HoleResult, totals: StrokeTotals) {
    let StrokeTotals { team_a, team_b } = totals;
    let (a, b, result) = match lower_wins(team_a, team_b) {
        Some(Side::A) => (1.0, 0.0, "A wins"),
        Some(Side::B) => (0.0, 1.0, "B wins"),
        None => (0.5, 0.5, "halved"),
    };
    last.team_a_points = a;
    last.team_b_points = b;
    last.rationale = format!("Stroke play total: {team_a} vs {team_b} → {result}");
}
