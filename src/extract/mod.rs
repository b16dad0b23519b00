//! Nutrient extraction module
//!
//! Regex rules and extraction of numeric values from generated text.

pub mod extractor;
pub mod rules;

pub use extractor::extract_nutrients;
pub use rules::ExtractionRule;
