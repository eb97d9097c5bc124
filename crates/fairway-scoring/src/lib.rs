pub mod aggregate;
pub mod formats;
pub mod handicap;
pub mod standings;

pub use aggregate::{evaluate_hole, evaluate_match};
pub use formats::{HoleVerdict, evaluate_nets};
pub use handicap::{
    course_handicap, course_handicap_for_tee, net_score, normalize_group, playing_handicap,
    stroke_distribution, strokes_on_hole,
};
pub use standings::{LeaderboardEntry, RoundSummary, TeamTally, leaderboard};

pub use fairway_core::{
    Course, GrossHoleScore, Hole, HoleResult, MatchFormat, MatchOutcome, MatchSide, MatchStatus,
    PlayerHandicapContext, PlayerId, ScoringError, Side, SidePlayer, Winner,
};
