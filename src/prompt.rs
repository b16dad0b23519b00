//! Prompt construction
//!
//! Renders the fixed natural-language request for a product's estimated
//! nutrition panel.

/// Build the generation prompt for a product name
///
/// Asks for average per-100g values of the seven graded nutrients, sourced
/// from nutrition tables or similar product labels, averaged across
/// preparations, and in prose rather than a table (a table would defeat the
/// line-oriented extraction patterns).
///
/// Pure function. Rejecting a blank name is the caller's responsibility.
pub fn build_prompt(product_name: &str) -> String {
    format!(
        "Provide average nutritional information per 100g of the dish {product_name}. \
         Include: Energy value (kcal), Total sugars (g), Saturated fat (g), \
         Sodium (mg), Protein (g), Dietary fiber (g), \
         and % of fruits, vegetables and nuts. \
         If possible, base the values on reliable sources such as official \
         nutrition tables or labels of similar products. \
         If values vary depending on preparation, provide a general average. \
         Do not present the nutritional information as a table."
    )
}
