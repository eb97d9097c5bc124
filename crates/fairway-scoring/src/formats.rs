//! Per-hole point rules for each match format.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format::{MatchFormat, Side};

/// Points and rationale awarded on a single hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleVerdict {
    pub team_a_points: f64,
    pub team_b_points: f64,
    pub rationale: String,
}

impl HoleVerdict {
    fn new(team_a_points: f64, team_b_points: f64, rationale: String) -> Self {
        Self {
            team_a_points,
            team_b_points,
            rationale,
        }
    }

    fn won_by(side: Option<Side>, rationale: String) -> Self {
        match side {
            Some(Side::A) => Self::new(1.0, 0.0, rationale),
            Some(Side::B) => Self::new(0.0, 1.0, rationale),
            None => Self::new(0.0, 0.0, rationale),
        }
    }
}

/// Lower score wins; `None` on a tie.
pub fn lower_wins(a: i32, b: i32) -> Option<Side> {
    match a.cmp(&b) {
        Ordering::Less => Some(Side::A),
        Ordering::Greater => Some(Side::B),
        Ordering::Equal => None,
    }
}

fn outcome_word(side: Option<Side>) -> &'static str {
    match side {
        Some(Side::A) => "A",
        Some(Side::B) => "B",
        None => "tie",
    }
}

fn best(nets: &[i32]) -> i32 {
    nets.iter().copied().min().unwrap_or_default()
}

fn worst(nets: &[i32]) -> i32 {
    nets.iter().copied().max().unwrap_or_default()
}

fn check_side(format: MatchFormat, side: Side, nets: &[i32]) -> Result<(), ScoringError> {
    let expected = format.players_per_side();
    if nets.len() != expected {
        return Err(ScoringError::InvalidSide {
            side,
            expected,
            found: nets.len(),
        });
    }
    Ok(())
}

/// Score one hole from each side's net scores.
///
/// `singles_stroke` always reports 0–0 here; its decision is made over the
/// whole round by the match aggregator.
pub fn evaluate_nets(
    format: MatchFormat,
    team_a: &[i32],
    team_b: &[i32],
) -> Result<HoleVerdict, ScoringError> {
    check_side(format, Side::A, team_a)?;
    check_side(format, Side::B, team_b)?;

    let verdict = match format {
        MatchFormat::BestBall => best_ball(team_a, team_b),
        MatchFormat::BestBallValidation => best_ball_validation(team_a, team_b),
        MatchFormat::LowTotal => low_total(team_a, team_b),
        MatchFormat::SinglesMatch => singles_match(team_a[0], team_b[0]),
        MatchFormat::SinglesStroke => HoleVerdict::new(
            0.0,
            0.0,
            format!("Stroke: {} vs {}", team_a[0], team_b[0]),
        ),
    };
    Ok(verdict)
}

fn best_ball(team_a: &[i32], team_b: &[i32]) -> HoleVerdict {
    let (best_a, best_b) = (best(team_a), best(team_b));
    let winner = lower_wins(best_a, best_b);
    let result = match winner {
        Some(side) => format!("{side} wins"),
        None => "halved, no points".to_string(),
    };
    HoleVerdict::won_by(winner, format!("Best ball: {best_a} vs {best_b} → {result}"))
}

fn best_ball_validation(team_a: &[i32], team_b: &[i32]) -> HoleVerdict {
    let (best_a, best_b) = (best(team_a), best(team_b));
    if best_a != best_b {
        return best_ball(team_a, team_b);
    }

    // Best balls tied: the partners' worse scores decide.
    let (worst_a, worst_b) = (worst(team_a), worst(team_b));
    let winner = lower_wins(worst_a, worst_b);
    let result = match winner {
        Some(side) => format!("validation {worst_a} vs {worst_b} → {side} wins"),
        None => format!("validation tied {worst_a}-{worst_b} → no points"),
    };
    HoleVerdict::won_by(
        winner,
        format!("Best ball tied {best_a}-{best_b} → {result}"),
    )
}

fn low_total(team_a: &[i32], team_b: &[i32]) -> HoleVerdict {
    let (low_a, low_b) = (best(team_a), best(team_b));
    let (total_a, total_b): (i32, i32) = (team_a.iter().sum(), team_b.iter().sum());

    let low = lower_wins(low_a, low_b);
    let total = lower_wins(total_a, total_b);

    let mut points = (0.0, 0.0);
    for side in [low, total].into_iter().flatten() {
        match side {
            Side::A => points.0 += 1.0,
            Side::B => points.1 += 1.0,
        }
    }

    HoleVerdict::new(
        points.0,
        points.1,
        format!(
            "Low: {low_a} vs {low_b} → {} | Total: {total_a} vs {total_b} → {}",
            outcome_word(low),
            outcome_word(total)
        ),
    )
}

fn singles_match(net_a: i32, net_b: i32) -> HoleVerdict {
    match lower_wins(net_a, net_b) {
        Some(side) => HoleVerdict::won_by(Some(side), format!("{net_a} vs {net_b} → {side} wins")),
        None => HoleVerdict::new(0.5, 0.5, format!("{net_a} vs {net_b} → halved")),
    }
}
