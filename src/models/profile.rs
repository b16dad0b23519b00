//! Nutrient data structures
//!
//! Estimated nutrient quantities per 100g of a product, as extracted from
//! generated nutrition text.

use serde::{Deserialize, Serialize};

/// Raw extraction output, one optional value per nutrient pattern
///
/// `None` means the pattern did not match anywhere in the generated text.
/// The missing/zero distinction is kept until scoring, where absent fields
/// collapse to 0.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedNutrients {
    pub energy_kcal: Option<f64>,
    pub sugars_g: Option<f64>,
    pub saturated_fat_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub protein_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub fruit_veg_nut_pct: Option<f64>,
}

/// Estimated nutrient quantities per 100g of product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub energy_kcal: f64,
    pub sugars_g: f64,       // grams
    pub saturated_fat_g: f64, // grams
    pub sodium_mg: f64,      // milligrams
    pub protein_g: f64,      // grams
    pub fiber_g: f64,        // grams
    pub fruit_veg_nut_pct: f64, // percent
}

impl NutrientProfile {
    /// Create a new NutrientProfile with all zeros
    pub fn zero() -> Self {
        Self::default()
    }
}

impl From<ExtractedNutrients> for NutrientProfile {
    /// Collapse absent fields to 0.0
    ///
    /// A miss scores as the most favorable value for that field, which can
    /// skew the grade either way. Accepted trade-off: a partial answer still
    /// produces a grade instead of an error.
    fn from(extracted: ExtractedNutrients) -> Self {
        Self {
            energy_kcal: extracted.energy_kcal.unwrap_or(0.0),
            sugars_g: extracted.sugars_g.unwrap_or(0.0),
            saturated_fat_g: extracted.saturated_fat_g.unwrap_or(0.0),
            sodium_mg: extracted.sodium_mg.unwrap_or(0.0),
            protein_g: extracted.protein_g.unwrap_or(0.0),
            fiber_g: extracted.fiber_g.unwrap_or(0.0),
            fruit_veg_nut_pct: extracted.fruit_veg_nut_pct.unwrap_or(0.0),
        }
    }
}
