//! Nutrient extraction rules
//!
//! One regex per nutrient, anchored on the label wording the prompt asks
//! for, capturing the numeral that precedes the expected unit suffix.

use std::sync::LazyLock;

use regex::Regex;

/// Numeral sub-pattern: a decimal written with `.` or `,`, optionally
/// followed by a hyphen-separated second endpoint ("650-700")
const NUMBER: &str = r"\d+(?:[.,]\d+)?(?:\s*-\s*\d+(?:[.,]\d+)?)?";

/// A named extraction rule: nutrient label pattern plus expected unit suffix
#[derive(Debug)]
pub struct ExtractionRule {
    /// Nutrient name, used for logging
    pub name: &'static str,
    /// Unit suffix the captured numeral must be followed by
    pub unit: &'static str,
    /// Compiled pattern. Stored as Option to handle compilation failures
    /// gracefully (should never fail for static patterns); a None pattern
    /// extracts nothing, which degrades that field to absent.
    pub regex: Option<Regex>,
}

impl ExtractionRule {
    fn new(name: &'static str, label: &str, unit: &'static str) -> Self {
        // Case-insensitive; `.` does not cross newlines, so the numeral must
        // follow the label on the same line of the answer
        let pattern = format!(r"(?i){label}.*?({NUMBER})\s*{unit}");
        Self {
            name,
            unit,
            regex: Regex::new(&pattern).ok(),
        }
    }
}

/// Energy value in kcal
pub static ENERGY: LazyLock<ExtractionRule> =
    LazyLock::new(|| ExtractionRule::new("energy", "Energy value", "kcal"));

/// Total sugars in grams
pub static SUGARS: LazyLock<ExtractionRule> =
    LazyLock::new(|| ExtractionRule::new("sugars", "Total sugars", "g"));

/// Saturated fat in grams
pub static SATURATED_FAT: LazyLock<ExtractionRule> =
    LazyLock::new(|| ExtractionRule::new("saturated_fat", "Saturated fat", "g"));

/// Sodium in milligrams
pub static SODIUM: LazyLock<ExtractionRule> =
    LazyLock::new(|| ExtractionRule::new("sodium", "Sodium", "mg"));

/// Protein in grams
pub static PROTEIN: LazyLock<ExtractionRule> =
    LazyLock::new(|| ExtractionRule::new("protein", "Protein", "g"));

/// Dietary fiber in grams
pub static FIBER: LazyLock<ExtractionRule> =
    LazyLock::new(|| ExtractionRule::new("fiber", "Dietary fiber", "g"));

/// Fruit, vegetable and nut percentage
pub static FRUIT_VEG_NUT: LazyLock<ExtractionRule> = LazyLock::new(|| {
    ExtractionRule::new("fruit_veg_nut", "% of fruits, vegetables and nuts", "%")
});
