//! Grade types
//!
//! The Nutri-Score letter grade and the structured result of one estimation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::NutrientProfile;

/// Nutri-Score letter grade, A (best) to E (worst)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// Map a final score (negative points minus positive points) to a grade.
    ///
    /// Upper bounds are inclusive, first match wins, so a tie lands in the
    /// better grade.
    pub fn from_final_score(score: i32) -> Self {
        if score <= -1 {
            Grade::A
        } else if score <= 0 {
            Grade::B
        } else if score <= 2 {
            Grade::C
        } else if score <= 4 {
            Grade::D
        } else {
            Grade::E
        }
    }

    /// Single-letter representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one pipeline invocation
///
/// Built once per estimate and never mutated. The point totals are exposed
/// alongside the grade so callers can see how the banding resolved.
#[derive(Debug, Clone, Serialize)]
pub struct GradeResult {
    pub profile: NutrientProfile,
    pub grade: Grade,
    pub negative_points: u32,
    pub positive_points: u32,
    pub final_score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_cut_points() {
        assert_eq!(Grade::from_final_score(-5), Grade::A);
        assert_eq!(Grade::from_final_score(-1), Grade::A);
        assert_eq!(Grade::from_final_score(0), Grade::B);
        assert_eq!(Grade::from_final_score(1), Grade::C);
        assert_eq!(Grade::from_final_score(2), Grade::C);
        assert_eq!(Grade::from_final_score(3), Grade::D);
        assert_eq!(Grade::from_final_score(4), Grade::D);
        assert_eq!(Grade::from_final_score(5), Grade::E);
        assert_eq!(Grade::from_final_score(19), Grade::E);
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::A.to_string(), "A");
        assert_eq!(Grade::E.to_string(), "E");
    }
}
