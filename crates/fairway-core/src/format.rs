use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// The competitive formats a match can be played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    /// 2v2, the lower best ball wins the hole; tied best balls score nothing.
    BestBall,
    /// 2v2 best ball where a tied best ball is decided by the partners' worse scores.
    BestBallValidation,
    /// 2v2 with a low-ball point and a team-total point on every hole.
    LowTotal,
    /// 1v1 match play, halved holes split the point.
    SinglesMatch,
    /// 1v1 over the full round's net total, decided once every hole is in.
    SinglesStroke,
}

impl MatchFormat {
    pub const ALL: [MatchFormat; 5] = [
        MatchFormat::BestBall,
        MatchFormat::BestBallValidation,
        MatchFormat::LowTotal,
        MatchFormat::SinglesMatch,
        MatchFormat::SinglesStroke,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BestBall => "best_ball",
            Self::BestBallValidation => "best_ball_validation",
            Self::LowTotal => "low_total",
            Self::SinglesMatch => "singles_match",
            Self::SinglesStroke => "singles_stroke",
        }
    }

    /// Number of players each side must field.
    pub fn players_per_side(self) -> usize {
        match self {
            Self::BestBall | Self::BestBallValidation | Self::LowTotal => 2,
            Self::SinglesMatch | Self::SinglesStroke => 1,
        }
    }

    /// Most points one hole can award across both sides.
    pub fn max_points_per_hole(self) -> f64 {
        match self {
            Self::LowTotal => 2.0,
            Self::BestBall | Self::BestBallValidation | Self::SinglesMatch | Self::SinglesStroke => {
                1.0
            },
        }
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchFormat {
    type Err = ScoringError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == tag)
            .ok_or_else(|| ScoringError::InvalidFormat(tag.to_string()))
    }
}

/// Which side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_str() {
        for format in MatchFormat::ALL {
            assert_eq!(format.as_str().parse::<MatchFormat>(), Ok(format));
        }
    }

    #[test]
    fn unknown_tag_is_a_hard_error() {
        assert_eq!(
            "scramble".parse::<MatchFormat>(),
            Err(ScoringError::InvalidFormat("scramble".to_string()))
        );
        assert!("BEST_BALL".parse::<MatchFormat>().is_err());
    }

    #[test]
    fn serde_tag_matches_display() {
        for format in MatchFormat::ALL {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{format}\""));
        }
        assert!(serde_json::from_str::<MatchFormat>("\"skins\"").is_err());
    }

    #[test]
    fn side_sizes_and_ceilings() {
        assert_eq!(MatchFormat::LowTotal.players_per_side(), 2);
        assert_eq!(MatchFormat::SinglesStroke.players_per_side(), 1);
        assert_eq!(MatchFormat::LowTotal.max_points_per_hole(), 2.0);
        assert_eq!(MatchFormat::BestBallValidation.max_points_per_hole(), 1.0);
    }
}
