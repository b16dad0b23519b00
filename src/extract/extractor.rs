//! Numeric field extraction
//!
//! Pulls best-effort nutrient values out of free-form generated text.

use tracing::debug;

use super::rules::{self, ExtractionRule};
use crate::models::ExtractedNutrients;

/// Extract all seven nutrient values from the generated answer text
///
/// Fields are independent: a missing label leaves that field `None` without
/// affecting the others. Extraction never fails.
pub fn extract_nutrients(text: &str) -> ExtractedNutrients {
    let extracted = ExtractedNutrients {
        energy_kcal: extract_field(&rules::ENERGY, text),
        sugars_g: extract_field(&rules::SUGARS, text),
        saturated_fat_g: extract_field(&rules::SATURATED_FAT, text),
        sodium_mg: extract_field(&rules::SODIUM, text),
        protein_g: extract_field(&rules::PROTEIN, text),
        fiber_g: extract_field(&rules::FIBER, text),
        fruit_veg_nut_pct: extract_field(&rules::FRUIT_VEG_NUT, text),
    };

    debug!(?extracted, "Extracted nutrient values");
    extracted
}

/// Run one rule against the text
fn extract_field(rule: &ExtractionRule, text: &str) -> Option<f64> {
    let value = rule
        .regex
        .as_ref()
        .and_then(|regex| regex.captures(text))
        .and_then(|captures| captures.get(1))
        .and_then(|numeral| parse_numeral(numeral.as_str()));

    if value.is_none() {
        debug!(rule = rule.name, unit = rule.unit, "No match for nutrient pattern");
    }
    value
}

/// Parse a captured numeral, which may be a single decimal or a hyphen range
///
/// Commas are decimal separators ("4,5" parses as 4.5). A range resolves to
/// the larger endpoint, the conservative choice for the negative nutrients,
/// applied uniformly to every field.
fn parse_numeral(raw: &str) -> Option<f64> {
    let normalized = raw.replace(',', ".");

    let mut result: Option<f64> = None;
    for part in normalized.split('-') {
        let value = part.trim().parse::<f64>().ok()?;
        result = Some(match result {
            Some(previous) => previous.max(value),
            None => value,
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ANSWER: &str = "\
For 100g of this dish, the approximate values are:\n\
Energy value: 650-700 kcal\n\
Total sugars: 4,5 g\n\
Saturated fat: 3.2 g\n\
Protein: 12 g\n\
Dietary fiber: 1,8 g\n\
% of fruits, vegetables and nuts: 15%\n";

    #[test]
    fn test_range_resolves_to_maximum() {
        let extracted = extract_nutrients(SAMPLE_ANSWER);
        assert_eq!(extracted.energy_kcal, Some(700.0));
    }

    #[test]
    fn test_comma_is_decimal_separator() {
        let extracted = extract_nutrients(SAMPLE_ANSWER);
        assert_eq!(extracted.sugars_g, Some(4.5));
        assert_eq!(extracted.fiber_g, Some(1.8));
    }

    #[test]
    fn test_dot_decimal_also_accepted() {
        let extracted = extract_nutrients(SAMPLE_ANSWER);
        assert_eq!(extracted.saturated_fat_g, Some(3.2));
    }

    #[test]
    fn test_missing_field_is_none() {
        // The sample never mentions sodium
        let extracted = extract_nutrients(SAMPLE_ANSWER);
        assert_eq!(extracted.sodium_mg, None);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract_nutrients(SAMPLE_ANSWER);
        let second = extract_nutrients(SAMPLE_ANSWER);
        assert_eq!(first, second);
    }

    #[test]
    fn test_case_insensitive_labels() {
        let extracted = extract_nutrients("ENERGY VALUE: about 320 kcal");
        assert_eq!(extracted.energy_kcal, Some(320.0));
    }

    #[test]
    fn test_empty_text_extracts_nothing() {
        let extracted = extract_nutrients("");
        assert_eq!(extracted, ExtractedNutrients::default());
    }

    #[test]
    fn test_parse_numeral_single_value() {
        assert_eq!(parse_numeral("250"), Some(250.0));
        assert_eq!(parse_numeral("4,5"), Some(4.5));
        assert_eq!(parse_numeral("4.5"), Some(4.5));
    }

    #[test]
    fn test_parse_numeral_range_takes_max() {
        assert_eq!(parse_numeral("650-700"), Some(700.0));
        assert_eq!(parse_numeral("650 - 700"), Some(700.0));
        // Order does not matter
        assert_eq!(parse_numeral("700-650"), Some(700.0));
        assert_eq!(parse_numeral("4,5-9,5"), Some(9.5));
    }
}
