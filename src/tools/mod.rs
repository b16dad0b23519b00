//! Tools module
//!
//! MCP tool implementations for the Nutri-Score service.

pub mod estimate;
pub mod status;
