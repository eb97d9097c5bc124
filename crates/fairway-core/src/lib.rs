pub mod config;
pub mod course;
pub mod error;
pub mod format;
pub mod outcome;
pub mod player;

pub use config::TournamentConfig;
pub use course::{Course, Hole, Tee};
pub use error::{ConfigError, ScoringError};
pub use format::{MatchFormat, Side};
pub use outcome::{HoleResult, MatchOutcome, MatchStatus, StrokeTotals, Winner};
pub use player::{GrossHoleScore, MatchSide, PlayerHandicapContext, PlayerId, SidePlayer};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::player::{MatchSide, PlayerHandicapContext, PlayerId, SidePlayer};

    /// Handicap context with explicit course and playing handicaps.
    pub fn handicap(id: &str, course_handicap: i32, playing_handicap: i32) -> PlayerHandicapContext {
        PlayerHandicapContext {
            player_id: PlayerId::from(id),
            course_handicap,
            playing_handicap,
        }
    }

    /// A player whose gross scores fill holes `1..=gross.len()` in order.
    pub fn player_with_gross(id: &str, playing_handicap: i32, gross: &[u8]) -> SidePlayer {
        let mut player = SidePlayer::new(handicap(id, playing_handicap, playing_handicap));
        for (i, &g) in gross.iter().enumerate() {
            player.record(i as u8 + 1, g);
        }
        player
    }

    /// A scratch (playing handicap 0) player, so gross equals net below the cap.
    pub fn scratch_player(id: &str, gross: &[u8]) -> SidePlayer {
        player_with_gross(id, 0, gross)
    }

    pub fn side(label: &str, players: Vec<SidePlayer>) -> MatchSide {
        MatchSide::new(label, players)
    }

    // ================================================================
    // Terra Lago North, day 1, match 1 (best ball + validation)
    // ================================================================
    // Playing handicaps: Mack 1, Kiki 0, Bruce 5, Eric 5.
    // Gross = recorded net + strokes received (no cap is reached).

    pub const MACK_NET: [i32; 18] = [5, 3, 5, 5, 5, 4, 5, 4, 4, 4, 4, 5, 5, 4, 4, 4, 4, 4];
    pub const KIKI_NET: [i32; 18] = [4, 4, 4, 4, 4, 4, 4, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4, 5];
    pub const BRUCE_NET: [i32; 18] = [4, 4, 4, 5, 4, 5, 4, 5, 4, 4, 5, 4, 4, 4, 5, 4, 5, 4];
    pub const ERIC_NET: [i32; 18] = [4, 4, 5, 5, 5, 4, 4, 4, 5, 4, 4, 5, 5, 5, 5, 5, 4, 4];

    pub const MACK_GROSS: [u8; 18] = [5, 3, 5, 5, 6, 4, 5, 4, 4, 4, 4, 5, 5, 4, 4, 4, 4, 4];
    pub const KIKI_GROSS: [u8; 18] = [4, 4, 4, 4, 4, 4, 4, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4, 5];
    pub const BRUCE_GROSS: [u8; 18] = [4, 4, 4, 5, 5, 5, 4, 6, 5, 4, 5, 4, 4, 5, 5, 4, 5, 5];
    pub const ERIC_GROSS: [u8; 18] = [4, 4, 5, 5, 6, 4, 4, 5, 6, 4, 4, 5, 5, 6, 5, 5, 4, 5];

    /// Expected hole points from the event scorecard.
    pub const FIXTURE_TEAM_A_POINTS: [f64; 18] = [
        0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0,
    ];
    pub const FIXTURE_TEAM_B_POINTS: [f64; 18] = [
        1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ];

    /// Both sides of the fixture match with all 18 holes scored.
    pub fn fixture_sides() -> (MatchSide, MatchSide) {
        fixture_sides_through(18)
    }

    /// The fixture match with only the first `holes` holes entered.
    pub fn fixture_sides_through(holes: usize) -> (MatchSide, MatchSide) {
        let mut mack = SidePlayer::new(handicap("mack", 12, 1));
        let mut kiki = SidePlayer::new(handicap("kiki", 11, 0));
        let mut bruce = SidePlayer::new(handicap("bruce", 16, 5));
        let mut eric = SidePlayer::new(handicap("eric", 16, 5));
        for i in 0..holes.min(18) {
            let hole = i as u8 + 1;
            mack.record(hole, MACK_GROSS[i]);
            kiki.record(hole, KIKI_GROSS[i]);
            bruce.record(hole, BRUCE_GROSS[i]);
            eric.record(hole, ERIC_GROSS[i]);
        }
        (
            side("Mack/Kiki", vec![mack, kiki]),
            side("Bruce/Eric", vec![bruce, eric]),
        )
    }
}
