//! Data models
//!
//! Structures for nutrient estimates and grades.

mod grade;
mod profile;

pub use grade::{Grade, GradeResult};
pub use profile::{ExtractedNutrients, NutrientProfile};
