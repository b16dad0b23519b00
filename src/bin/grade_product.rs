//! Utility to grade a single product from the command line

use nutriscore::config::GeminiConfig;
use nutriscore::gemini::GeminiClient;
use nutriscore::pipeline::NutriScorePipeline;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: grade_product <product name>");
        std::process::exit(2);
    }
    let product_name = args.join(" ");

    let config = GeminiConfig::from_env()?;
    let client = GeminiClient::new(config)?;
    let pipeline = NutriScorePipeline::new(client);

    let result = pipeline.estimate(&product_name).await?;

    println!("Product: {}", product_name);
    println!("Grade: {}", result.grade);
    println!(
        "Points: {} negative, {} positive (final score {})",
        result.negative_points, result.positive_points, result.final_score
    );
    println!("Estimated values per 100g:");
    println!("  Energy: {} kcal", result.profile.energy_kcal);
    println!("  Total sugars: {} g", result.profile.sugars_g);
    println!("  Saturated fat: {} g", result.profile.saturated_fat_g);
    println!("  Sodium: {} mg", result.profile.sodium_mg);
    println!("  Protein: {} g", result.profile.protein_g);
    println!("  Dietary fiber: {} g", result.profile.fiber_g);
    println!(
        "  Fruits/vegetables/nuts: {}%",
        result.profile.fruit_veg_nut_pct
    );

    Ok(())
}
