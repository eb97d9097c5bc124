use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// A single hole's reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    pub hole_number: u8,
    pub par: u8,
    /// Stroke index: 1 is the hardest hole and the first to receive a stroke.
    pub difficulty_rank: u8,
}

impl Hole {
    pub const fn new(hole_number: u8, par: u8, difficulty_rank: u8) -> Self {
        Self {
            hole_number,
            par,
            difficulty_rank,
        }
    }
}

/// A set of tees with its USGA course rating and slope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tee {
    pub name: String,
    pub rating: f64,
    pub slope: u16,
}

/// A validated course: holes sorted by number, ranks forming a permutation.
///
/// Construct with [`Course::new`]; the invariants are checked once there so
/// the engine can index holes without re-validating on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    name: String,
    holes: Vec<Hole>,
    tees: Vec<Tee>,
}

impl Course {
    /// Validate and build a course.
    ///
    /// Rejects an empty hole list, duplicate hole numbers, hole numbers
    /// outside `1..=N`, pars other than 3, 4 or 5, and difficulty ranks that
    /// are not a permutation of `1..=N`.
    pub fn new(
        name: impl Into<String>,
        mut holes: Vec<Hole>,
        tees: Vec<Tee>,
    ) -> Result<Self, ScoringError> {
        let n = holes.len();
        if n == 0 {
            return Err(ScoringError::InvalidHoleData("course has no holes".into()));
        }
        if n > u8::MAX as usize {
            return Err(ScoringError::InvalidHoleData(format!(
                "course has {n} holes"
            )));
        }

        let mut numbers = HashSet::with_capacity(n);
        let mut ranks = HashSet::with_capacity(n);
        for hole in &holes {
            let h = hole.hole_number;
            if h == 0 || h as usize > n {
                return Err(ScoringError::InvalidHoleData(format!(
                    "hole number {h} outside 1..={n}"
                )));
            }
            if !numbers.insert(h) {
                return Err(ScoringError::InvalidHoleData(format!(
                    "duplicate hole number {h}"
                )));
            }
            if !(3..=5).contains(&hole.par) {
                return Err(ScoringError::InvalidHoleData(format!(
                    "hole {h} has par {}",
                    hole.par
                )));
            }
            let r = hole.difficulty_rank;
            if r == 0 || r as usize > n {
                return Err(ScoringError::InvalidHoleData(format!(
                    "hole {h} has difficulty rank {r} outside 1..={n}"
                )));
            }
            if !ranks.insert(r) {
                return Err(ScoringError::InvalidHoleData(format!(
                    "difficulty rank {r} used more than once"
                )));
            }
        }

        holes.sort_by_key(|h| h.hole_number);
        Ok(Self {
            name: name.into(),
            holes,
            tees,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Holes in hole-number order.
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    pub fn tees(&self) -> &[Tee] {
        &self.tees
    }

    pub fn tee(&self, name: &str) -> Option<&Tee> {
        self.tees.iter().find(|t| t.name == name)
    }

    pub fn hole(&self, hole_number: u8) -> Option<&Hole> {
        hole_number
            .checked_sub(1)
            .and_then(|i| self.holes.get(i as usize))
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    pub fn last_hole_number(&self) -> u8 {
        self.holes.len() as u8
    }

    pub fn total_par(&self) -> i32 {
        self.holes.iter().map(|h| h.par as i32).sum()
    }
}

impl<'de> Deserialize<'de> for Course {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawCourse {
            name: String,
            holes: Vec<Hole>,
            #[serde(default)]
            tees: Vec<Tee>,
        }

        let raw = RawCourse::deserialize(deserializer)?;
        Course::new(raw.name, raw.holes, raw.tees).map_err(serde::de::Error::custom)
    }
}

const TERRA_LAGO_NORTH_PARS: [u8; 18] = [4, 4, 3, 5, 4, 4, 3, 5, 4, 4, 4, 3, 5, 4, 4, 3, 5, 4];
const TERRA_LAGO_NORTH_RANKS: [u8; 18] =
    [9, 15, 17, 7, 1, 11, 13, 5, 3, 10, 16, 18, 8, 2, 12, 14, 6, 4];

/// Terra Lago North, the event's home course (par 72).
pub fn terra_lago_north() -> Course {
    let holes = TERRA_LAGO_NORTH_PARS
        .iter()
        .zip(TERRA_LAGO_NORTH_RANKS.iter())
        .enumerate()
        .map(|(i, (&par, &rank))| Hole::new(i as u8 + 1, par, rank))
        .collect();
    let tees = vec![
        Tee {
            name: "Yellow".to_string(),
            rating: 71.9,
            slope: 132,
        },
        Tee {
            name: "Black".to_string(),
            rating: 74.7,
            slope: 139,
        },
    ];
    Course {
        name: "Terra Lago North".to_string(),
        holes,
        tees,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine() -> Vec<Hole> {
        (1..=9).map(|n| Hole::new(n, 4, 10 - n)).collect()
    }

    #[test]
    fn terra_lago_north_passes_validation() {
        let course = terra_lago_north();
        let rebuilt = Course::new(
            course.name(),
            course.holes().to_vec(),
            course.tees().to_vec(),
        )
        .expect("fixture course must be valid");
        assert_eq!(rebuilt, course);
        assert_eq!(course.hole_count(), 18);
        assert_eq!(course.total_par(), 72);
        assert_eq!(course.hole(5).map(|h| h.difficulty_rank), Some(1));
        assert_eq!(course.tee("Black").map(|t| t.slope), Some(139));
    }

    #[test]
    fn holes_are_sorted_by_number() {
        let mut holes = nine();
        holes.reverse();
        let course = Course::new("Nine", holes, vec![]).unwrap();
        let numbers: Vec<u8> = course.holes().iter().map(|h| h.hole_number).collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<_>>());
        assert_eq!(course.last_hole_number(), 9);
    }

    #[test]
    fn rejects_duplicate_hole_numbers() {
        let mut holes = nine();
        holes[8].hole_number = 1;
        assert!(matches!(
            Course::new("Bad", holes, vec![]),
            Err(ScoringError::InvalidHoleData(_))
        ));
    }

    #[test]
    fn rejects_hole_number_outside_course() {
        let mut holes = nine();
        holes[8].hole_number = 10;
        let err = Course::new("Bad", holes.clone(), vec![]).unwrap_err();
        assert_eq!(err, ScoringError::InvalidHoleData("hole number 10 outside 1..=9".into()));

        holes[8].hole_number = 0;
        assert!(matches!(
            Course::new("Bad", holes, vec![]),
            Err(ScoringError::InvalidHoleData(_))
        ));
    }

    #[test]
    fn rejects_par_outside_three_to_five() {
        let mut holes = nine();
        holes[2].par = 6;
        let err = Course::new("Bad", holes, vec![]).unwrap_err();
        assert_eq!(err, ScoringError::InvalidHoleData("hole 3 has par 6".into()));
    }

    #[test]
    fn rejects_rank_that_is_not_a_permutation() {
        let mut holes = nine();
        holes[0].difficulty_rank = holes[1].difficulty_rank;
        assert!(Course::new("Bad", holes.clone(), vec![]).is_err());

        holes[0].difficulty_rank = 10;
        assert!(Course::new("Bad", holes, vec![]).is_err());
    }

    #[test]
    fn rejects_empty_course() {
        assert!(Course::new("Empty", vec![], vec![]).is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok = r#"{"name":"Two","holes":[
            {"hole_number":2,"par":3,"difficulty_rank":1},
            {"hole_number":1,"par":5,"difficulty_rank":2}]}"#;
        let course: Course = serde_json::from_str(ok).unwrap();
        assert_eq!(course.hole(1).map(|h| h.par), Some(5));

        let bad = r#"{"name":"Two","holes":[
            {"hole_number":1,"par":3,"difficulty_rank":1},
            {"hole_number":1,"par":5,"difficulty_rank":2}]}"#;
        assert!(serde_json::from_str::<Course>(bad).is_err());
    }
}
