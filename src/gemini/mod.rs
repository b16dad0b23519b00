//! Gemini API client module
//!
//! Transport and envelope handling for the generateContent endpoint.

pub mod client;

pub use client::{GeminiClient, GeminiError, GeminiResult, TextGenerator};
