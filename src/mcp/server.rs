//! Nutri-Score MCP Server Implementation
//!
//! Implements the MCP server exposing the estimation pipeline as tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::gemini::{GeminiClient, GeminiError};
use crate::pipeline::NutriScorePipeline;
use crate::tools::estimate;
use crate::tools::status::{StatusTracker, GRADING_INSTRUCTIONS};

/// Nutri-Score MCP Service
#[derive(Clone)]
pub struct NutriScoreService {
    pipeline: Arc<NutriScorePipeline<GeminiClient>>,
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<NutriScoreService>,
}

impl NutriScoreService {
    pub fn new(pipeline: NutriScorePipeline<GeminiClient>, model: String) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(model))),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateNutriScoreParams {
    /// Product or dish name to grade (e.g. "feijoada", "granola bar")
    pub product_name: String,
}

/// Map an estimation failure to an MCP error, keeping the failure kind
/// visible so callers can apply their own fallback policy
fn estimate_error(error: &GeminiError) -> McpError {
    let kind = match error {
        GeminiError::EmptyResponse => "empty_response",
        GeminiError::Client { .. } => "client_error",
        GeminiError::Server { .. } => "server_error",
        GeminiError::MalformedEnvelope(_) => "malformed_envelope",
        GeminiError::Transport(_) => "transport_error",
    };
    McpError::internal_error(format!("{kind}: {error}"), None)
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutriScoreService {
    // --- Status ---

    #[tool(description = "Get the current status of the Nutri-Score service including build info, configured model, and request counters")]
    async fn service_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get usage notes for the Nutri-Score tools. Call this when starting a grading session or when unsure how to interpret an estimate.")]
    fn nutriscore_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            GRADING_INSTRUCTIONS,
        )]))
    }

    // --- Estimation ---

    #[tool(description = "Estimate the Nutri-Score grade (A-E) for a food product by name. Asks the configured Gemini model for an average per-100g nutrition panel and bands the extracted values into a grade.")]
    async fn estimate_nutri_score(
        &self,
        Parameters(p): Parameters<EstimateNutriScoreParams>,
    ) -> Result<CallToolResult, McpError> {
        if p.product_name.trim().is_empty() {
            return Err(McpError::invalid_params(
                "product_name must not be blank",
                None,
            ));
        }

        match estimate::estimate_product(self.pipeline.as_ref(), &p.product_name).await {
            Ok(response) => {
                self.status_tracker.lock().await.record_success();
                let json = serde_json::to_string_pretty(&response)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::success(vec![Content::text(json)]))
            }
            Err(error) => {
                self.status_tracker.lock().await.record_failure();
                Err(estimate_error(&error))
            }
        }
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutriScoreService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutriscore".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Nutri-Score Estimation Service".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Nutri-Score Estimation Service - grades food products A (best) to E (worst) \
                 from a generated per-100g nutrition estimate. \
                 Call estimate_nutri_score with a product name to get a grade, point totals and \
                 the extracted nutrient values. Call nutriscore_instructions for usage notes. \
                 Estimates are best-effort: failures are reported distinctly and callers that \
                 persist products should substitute an empty grade on failure rather than \
                 aborting the save."
                    .into(),
            ),
        }
    }
}
