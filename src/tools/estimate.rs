//! Grade Estimation Tool
//!
//! Tool-layer wrapper around the estimation pipeline.

use serde::Serialize;

use crate::gemini::{GeminiResult, TextGenerator};
use crate::models::GradeResult;
use crate::pipeline::NutriScorePipeline;

/// Response for estimate_nutri_score
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub product: String,
    pub grade: String,
    pub negative_points: u32,
    pub positive_points: u32,
    pub final_score: i32,
    pub energy_kcal: f64,
    pub sugars_g: f64,
    pub saturated_fat_g: f64,
    pub sodium_mg: f64,
    pub protein_g: f64,
    pub fiber_g: f64,
    pub fruit_veg_nut_pct: f64,
}

impl EstimateResponse {
    pub fn from_result(product: &str, result: &GradeResult) -> Self {
        Self {
            product: product.to_string(),
            grade: result.grade.to_string(),
            negative_points: result.negative_points,
            positive_points: result.positive_points,
            final_score: result.final_score,
            energy_kcal: result.profile.energy_kcal,
            sugars_g: result.profile.sugars_g,
            saturated_fat_g: result.profile.saturated_fat_g,
            sodium_mg: result.profile.sodium_mg,
            protein_g: result.profile.protein_g,
            fiber_g: result.profile.fiber_g,
            fruit_veg_nut_pct: result.profile.fruit_veg_nut_pct,
        }
    }
}

/// Run the pipeline for a product and shape the tool response
pub async fn estimate_product<G: TextGenerator>(
    pipeline: &NutriScorePipeline<G>,
    product_name: &str,
) -> GeminiResult<EstimateResponse> {
    let result = pipeline.estimate(product_name).await?;
    Ok(EstimateResponse::from_result(product_name.trim(), &result))
}
