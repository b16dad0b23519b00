//! Nutri-Score Estimation Service
//!
//! An MCP server that grades food products by name.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod build_info;
mod config;
mod extract;
mod gemini;
mod mcp;
mod models;
mod pipeline;
mod prompt;
mod score;
mod tools;

use config::GeminiConfig;
use gemini::GeminiClient;
use mcp::NutriScoreService;
use pipeline::NutriScorePipeline;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutriscore=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Load endpoint configuration
    let config = GeminiConfig::from_env()?;
    eprintln!("Model: {}", config.model);

    // Build the estimation pipeline
    let model = config.model.clone();
    let client = GeminiClient::new(config)?;
    let pipeline = NutriScorePipeline::new(client);

    // Create the Nutri-Score service
    let service = NutriScoreService::new(pipeline, model);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
