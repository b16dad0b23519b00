//! MCP server module
//!
//! Exposes the estimation pipeline over the Model Context Protocol.

pub mod server;

pub use server::NutriScoreService;
