//! Nutri-Score calculation
//!
//! Reduces a nutrient profile to point totals and a letter grade.

use serde::Serialize;

use super::bands;
use crate::models::{Grade, NutrientProfile};

/// Point totals and grade for one profile
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreBreakdown {
    pub negative_points: u32,
    pub positive_points: u32,
    pub final_score: i32,
    pub grade: Grade,
}

/// Compute the point breakdown and grade for a nutrient profile
///
/// Energy, sugars, saturated fat and sodium accumulate negative points;
/// protein, fiber and fruit/vegetable/nut content accumulate positive
/// points. The grade comes from the difference.
pub fn score_profile(profile: &NutrientProfile) -> ScoreBreakdown {
    let negative_points = bands::ENERGY.points(profile.energy_kcal)
        + bands::SUGARS.points(profile.sugars_g)
        + bands::SATURATED_FAT.points(profile.saturated_fat_g)
        + bands::SODIUM.points(profile.sodium_mg);

    let positive_points = bands::PROTEIN.points(profile.protein_g)
        + bands::FIBER.points(profile.fiber_g)
        + bands::FRUIT_VEG_NUT.points(profile.fruit_veg_nut_pct);

    let final_score = negative_points as i32 - positive_points as i32;

    ScoreBreakdown {
        negative_points,
        positive_points,
        final_score,
        grade: Grade::from_final_score(final_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banded_formula_reference_profile() {
        // Hand-derived: energy 2010 -> 5, sugars 9 -> 1, sat fat 2 -> 1,
        // sodium 180 -> 1 (negative 8); protein 6.4 -> 1, fiber 3.7 -> 1,
        // fruit/veg/nut 40 -> 2 (positive 4); final 4 -> D.
        let profile = NutrientProfile {
            energy_kcal: 2010.0,
            sugars_g: 9.0,
            saturated_fat_g: 2.0,
            sodium_mg: 180.0,
            protein_g: 6.4,
            fiber_g: 3.7,
            fruit_veg_nut_pct: 40.0,
        };

        let breakdown = score_profile(&profile);
        assert_eq!(breakdown.negative_points, 8);
        assert_eq!(breakdown.positive_points, 4);
        assert_eq!(breakdown.final_score, 4);
        assert_eq!(breakdown.grade, Grade::D);
    }

    #[test]
    fn test_zero_profile_grades_b() {
        // All-zero profile: 0 negative, 0 positive, final 0 -> B
        let breakdown = score_profile(&NutrientProfile::zero());
        assert_eq!(breakdown.negative_points, 0);
        assert_eq!(breakdown.positive_points, 0);
        assert_eq!(breakdown.final_score, 0);
        assert_eq!(breakdown.grade, Grade::B);
    }

    #[test]
    fn test_positive_nutrients_improve_grade() {
        let profile = NutrientProfile {
            energy_kcal: 300.0,
            sugars_g: 2.0,
            saturated_fat_g: 0.5,
            sodium_mg: 50.0,
            protein_g: 10.0,
            fiber_g: 5.0,
            fruit_veg_nut_pct: 85.0,
        };

        // Negative 0, positive 3 + 3 + 5 = 11, final -11 -> A
        let breakdown = score_profile(&profile);
        assert_eq!(breakdown.negative_points, 0);
        assert_eq!(breakdown.positive_points, 11);
        assert_eq!(breakdown.grade, Grade::A);
    }

    #[test]
    fn test_worst_case_profile_grades_e() {
        let profile = NutrientProfile {
            energy_kcal: 4000.0,
            sugars_g: 50.0,
            saturated_fat_g: 20.0,
            sodium_mg: 1000.0,
            protein_g: 0.0,
            fiber_g: 0.0,
            fruit_veg_nut_pct: 0.0,
        };

        // Negative 10 + 5 + 5 + 5 = 25, positive 0, final 25 -> E
        let breakdown = score_profile(&profile);
        assert_eq!(breakdown.negative_points, 25);
        assert_eq!(breakdown.grade, Grade::E);
    }
}
