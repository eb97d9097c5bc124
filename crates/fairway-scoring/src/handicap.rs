//! Handicap arithmetic: course handicap, playing handicap, stroke
//! allocation and capped net scores.

use fairway_core::course::{Course, Tee};
use fairway_core::player::{PlayerHandicapContext, PlayerId};

/// Holes per stroke tier. A handicap of 18 gives one stroke on every hole.
pub const STROKE_TIER: i32 = 18;

/// Slope of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// USGA course handicap: `round(index × slope / 113 + (rating − par))`.
///
/// Halves round up (toward positive infinity), so a plus-handicap of -2.5
/// becomes -2.
pub fn course_handicap(handicap_index: f64, slope: u16, rating: f64, par: i32) -> i32 {
    let raw = handicap_index * (slope as f64 / STANDARD_SLOPE) + (rating - par as f64);
    (raw + 0.5).floor() as i32
}

/// Course handicap for a player off a specific tee on `course`.
pub fn course_handicap_for_tee(handicap_index: f64, tee: &Tee, course: &Course) -> i32 {
    course_handicap(handicap_index, tee.slope, tee.rating, course.total_par())
}

/// Playing handicap relative to the lowest course handicap in the group.
pub fn playing_handicap(course_handicap: i32, min_group_course_handicap: i32) -> i32 {
    course_handicap - min_group_course_handicap
}

/// Normalize a group's course handicaps so the lowest plays off 0.
///
/// Output order follows input order. An empty group yields an empty list.
pub fn normalize_group(group: &[(PlayerId, i32)]) -> Vec<PlayerHandicapContext> {
    let Some(min) = group.iter().map(|(_, ch)| *ch).min() else {
        return Vec::new();
    };
    group
        .iter()
        .map(|(player_id, ch)| PlayerHandicapContext {
            player_id: player_id.clone(),
            course_handicap: *ch,
            playing_handicap: playing_handicap(*ch, min),
        })
        .collect()
}

/// Strokes received on a hole of the given difficulty rank (1 = hardest).
///
/// Each full tier of 18 gives one stroke on every hole; the remainder gives
/// one more stroke on the hardest `handicap % 18` holes. Handicaps of 0 or
/// below receive nothing.
pub fn strokes_on_hole(handicap: i32, difficulty_rank: u8) -> i32 {
    if handicap <= 0 {
        return 0;
    }
    let full_tiers = handicap / STROKE_TIER;
    let remainder = handicap % STROKE_TIER;
    if (difficulty_rank as i32) <= remainder {
        full_tiers + 1
    } else {
        full_tiers
    }
}

/// Strokes received on every hole of `course`, in hole-number order.
pub fn stroke_distribution(handicap: i32, course: &Course) -> Vec<i32> {
    course
        .holes()
        .iter()
        .map(|hole| strokes_on_hole(handicap, hole.difficulty_rank))
        .collect()
}

/// Net score capped at `par + strokes + net_max_over_par`.
///
/// The cap only ever lowers a bad hole. Nets below it pass through
/// unchanged, including negative ones.
pub fn net_score(gross: i32, strokes: i32, par: i32, net_max_over_par: u8) -> i32 {
    let raw = gross - strokes;
    let cap = par + strokes + net_max_over_par as i32;
    raw.min(cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::course::terra_lago_north;

    fn holes_receiving_strokes(handicap: i32) -> Vec<u8> {
        let course = terra_lago_north();
        course
            .holes()
            .iter()
            .filter(|h| strokes_on_hole(handicap, h.difficulty_rank) > 0)
            .map(|h| h.hole_number)
            .collect()
    }

    // ================================================================
    // Course / playing handicap
    // ================================================================

    #[test]
    fn course_handicap_event_fixtures() {
        let course = terra_lago_north();
        let yellow = course.tee("Yellow").unwrap();
        let black = course.tee("Black").unwrap();
        assert_eq!(course_handicap_for_tee(10.0, yellow, &course), 12); // Mack
        assert_eq!(course_handicap_for_tee(9.3, yellow, &course), 11); // Kiki
        assert_eq!(course_handicap_for_tee(10.6, black, &course), 16); // Bruce
        assert_eq!(course_handicap_for_tee(13.5, yellow, &course), 16); // Eric
    }

    #[test]
    fn course_handicap_rounds_halves_up() {
        // 0 × slope + (70.5 - 70) = 0.5
        assert_eq!(course_handicap(0.0, 113, 70.5, 70), 1);
        // plus handicap: -2.5 rounds to -2
        assert_eq!(course_handicap(-2.5, 113, 72.0, 72), -2);
    }

    #[test]
    fn playing_handicap_fixtures() {
        assert_eq!(playing_handicap(12, 11), 1);
        assert_eq!(playing_handicap(11, 11), 0);
        assert_eq!(playing_handicap(16, 11), 5);
    }

    #[test]
    fn normalize_group_lowest_plays_off_zero() {
        let group = vec![
            (PlayerId::from("mack"), 12),
            (PlayerId::from("kiki"), 11),
            (PlayerId::from("bruce"), 16),
            (PlayerId::from("eric"), 16),
        ];
        let phs: Vec<i32> = normalize_group(&group)
            .iter()
            .map(|c| c.playing_handicap)
            .collect();
        assert_eq!(phs, vec![1, 0, 5, 5]);
    }

    #[test]
    fn normalize_group_handles_plus_handicaps_and_empty() {
        let group = vec![(PlayerId::from("pro"), -2), (PlayerId::from("am"), 8)];
        let ctx = normalize_group(&group);
        assert_eq!(ctx[0].playing_handicap, 0);
        assert_eq!(ctx[1].playing_handicap, 10);
        assert_eq!(ctx[1].course_handicap, 8);
        assert!(normalize_group(&[]).is_empty());
    }

    // ================================================================
    // Stroke allocation
    // ================================================================

    #[test]
    fn tier_boundaries() {
        assert_eq!(strokes_on_hole(0, 1), 0);
        assert_eq!(strokes_on_hole(-3, 1), 0);
        assert_eq!(strokes_on_hole(1, 1), 1);
        assert_eq!(strokes_on_hole(1, 2), 0);
        assert_eq!(strokes_on_hole(17, 17), 1);
        assert_eq!(strokes_on_hole(17, 18), 0);
        assert_eq!(strokes_on_hole(18, 1), 1);
        assert_eq!(strokes_on_hole(18, 18), 1);
        assert_eq!(strokes_on_hole(20, 2), 2);
        assert_eq!(strokes_on_hole(20, 3), 1);
        assert_eq!(strokes_on_hole(36, 18), 2);
        assert_eq!(strokes_on_hole(42, 6), 3);
        assert_eq!(strokes_on_hole(42, 7), 2);
    }

    #[test]
    fn fourth_tier_is_not_capped() {
        assert_eq!(strokes_on_hole(54, 18), 3);
        assert_eq!(strokes_on_hole(56, 2), 4);
        assert_eq!(strokes_on_hole(56, 3), 3);
    }

    #[test]
    fn terra_lago_single_stroke_goes_to_hole_five() {
        assert_eq!(holes_receiving_strokes(1), vec![5]);
        let total: i32 = stroke_distribution(1, &terra_lago_north()).iter().sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn terra_lago_five_strokes() {
        assert_eq!(holes_receiving_strokes(5), vec![5, 8, 9, 14, 18]);
        let dist = stroke_distribution(5, &terra_lago_north());
        assert_eq!(
            dist,
            vec![0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1]
        );
    }

    #[test]
    fn scratch_gets_nothing() {
        assert!(stroke_distribution(0, &terra_lago_north()).iter().all(|&s| s == 0));
    }

    #[test]
    fn distribution_sums_to_handicap() {
        let course = terra_lago_north();
        for h in 0..=60 {
            let total: i32 = stroke_distribution(h, &course).iter().sum();
            assert_eq!(total, h, "handicap {h}");
        }
    }

    // ================================================================
    // Net score
    // ================================================================

    #[test]
    fn net_cap_fixtures() {
        assert_eq!(net_score(10, 1, 4, 3), 8);
        assert_eq!(net_score(15, 3, 4, 3), 10);
        assert_eq!(net_score(4, 1, 4, 3), 3);
        assert_eq!(net_score(5, 0, 4, 3), 5);
        // exactly at the cap
        assert_eq!(net_score(10, 2, 3, 3), 8);
    }

    #[test]
    fn ace_with_strokes_goes_negative() {
        assert_eq!(net_score(1, 2, 3, 3), -1);
    }

    #[test]
    fn zero_cap_limits_to_net_par() {
        assert_eq!(net_score(9, 1, 4, 0), 5);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn strokes_monotonic_in_handicap(
                h1 in -10i32..80,
                delta in 0i32..40,
                rank in 1u8..=18
            ) {
                prop_assert!(strokes_on_hole(h1, rank) <= strokes_on_hole(h1 + delta, rank));
            }

            #[test]
            fn strokes_non_increasing_in_rank(
                h in -10i32..80,
                r1 in 1u8..=18,
                step in 0u8..18
            ) {
                let r2 = r1.saturating_add(step).min(18);
                prop_assert!(strokes_on_hole(h, r1) >= strokes_on_hole(h, r2));
            }

            #[test]
            fn net_never_exceeds_cap(
                gross in 1i32..20,
                strokes in 0i32..5,
                par in 3i32..=5,
                cap in 0u8..6
            ) {
                let net = net_score(gross, strokes, par, cap);
                prop_assert!(net <= par + strokes + cap as i32);
                if gross - strokes <= par + strokes + cap as i32 {
                    prop_assert_eq!(net, gross - strokes);
                }
            }
        }
    }
}
