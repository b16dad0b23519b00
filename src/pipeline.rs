//! Estimation pipeline
//!
//! Orchestrates prompt construction, text generation, nutrient extraction
//! and scoring into a single grade estimate.

use tracing::{debug, info};

use crate::extract::extract_nutrients;
use crate::gemini::{GeminiResult, TextGenerator};
use crate::models::{GradeResult, NutrientProfile};
use crate::prompt::build_prompt;
use crate::score::score_profile;

/// One-shot Nutri-Score estimation
///
/// Stateless between calls: each estimate performs exactly one generation
/// call and shares nothing with concurrent estimates. Repeated calls for the
/// same name can differ only because the upstream generator does.
pub struct NutriScorePipeline<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> NutriScorePipeline<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Estimate the grade for a product name
    ///
    /// Generator failures propagate typed. Substituting a default grade on
    /// failure is the caller's policy, not the pipeline's.
    pub async fn estimate(&self, product_name: &str) -> GeminiResult<GradeResult> {
        let product_name = product_name.trim();
        let prompt = build_prompt(product_name);

        let answer = self.generator.generate(&prompt).await?;
        debug!(answer = %answer, "Received generated nutrition text");

        let extracted = extract_nutrients(&answer);
        let profile = NutrientProfile::from(extracted);
        let breakdown = score_profile(&profile);

        info!(
            product = product_name,
            grade = %breakdown.grade,
            negative = breakdown.negative_points,
            positive = breakdown.positive_points,
            "Computed Nutri-Score estimate"
        );

        Ok(GradeResult {
            profile,
            grade: breakdown.grade,
            negative_points: breakdown.negative_points,
            positive_points: breakdown.positive_points,
            final_score: breakdown.final_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::gemini::GeminiError;
    use crate::models::Grade;

    /// Canned generator returning a fixed answer
    struct FixedGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> GeminiResult<String> {
            Ok(self.0.to_string())
        }
    }

    /// Generator that always fails with a server error
    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> GeminiResult<String> {
            Err(GeminiError::Server { status: 500 })
        }
    }

    #[tokio::test]
    async fn test_estimate_produces_populated_result() {
        let answer = "\
Energy value: 2010 kcal\n\
Total sugars: 9 g\n\
Saturated fat: 2 g\n\
Sodium: 180 mg\n\
Protein: 6,4 g\n\
Dietary fiber: 3,7 g\n\
% of fruits, vegetables and nuts: 40%\n";

        let pipeline = NutriScorePipeline::new(FixedGenerator(answer));
        let result = pipeline.estimate("  feijoada  ").await.unwrap();

        assert_eq!(result.profile.energy_kcal, 2010.0);
        assert_eq!(result.profile.protein_g, 6.4);
        assert_eq!(result.negative_points, 8);
        assert_eq!(result.positive_points, 4);
        assert_eq!(result.final_score, 4);
        assert_eq!(result.grade, Grade::D);
    }

    #[tokio::test]
    async fn test_unextractable_answer_degrades_to_zero_profile() {
        let pipeline = NutriScorePipeline::new(FixedGenerator(
            "I could not find nutrition data for that dish.",
        ));
        let result = pipeline.estimate("mystery dish").await.unwrap();

        assert_eq!(result.profile, NutrientProfile::zero());
        assert_eq!(result.grade, Grade::B);
    }

    #[tokio::test]
    async fn test_generator_failure_propagates_variant() {
        let pipeline = NutriScorePipeline::new(FailingGenerator);
        let result = pipeline.estimate("feijoada").await;

        assert!(matches!(result, Err(GeminiError::Server { status: 500 })));
    }
}
