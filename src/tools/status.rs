//! Service Status Tool
//!
//! Provides runtime status information about the Nutri-Score service.

use std::time::Instant;

use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Grading instructions for AI assistants
pub const GRADING_INSTRUCTIONS: &str = r#"
# Nutri-Score Grading Instructions

This service estimates a Nutri-Score grade (A best - E worst) for a food
product identified only by name.

## How it works

1. The service asks the configured Gemini model for an average per-100g
   nutrition panel of the product: energy (kcal), total sugars (g),
   saturated fat (g), sodium (mg), protein (g), dietary fiber (g) and the
   % of fruits, vegetables and nuts.
2. Numeric values are extracted from the generated prose. A value the model
   did not provide counts as 0 - the grade is a best-effort estimate, not a
   measurement.
3. Energy, sugars, saturated fat and sodium accumulate negative points;
   protein, fiber and fruit/vegetable/nut content accumulate positive
   points. The grade comes from negative minus positive points:
   <= -1 -> A, <= 0 -> B, <= 2 -> C, <= 4 -> D, otherwise E.

## Using estimate_nutri_score

- Pass the product or dish name exactly as a customer would write it
  (e.g. "feijoada", "chocolate brownie"). Blank names are rejected.
- The response includes the grade, the point totals, and the extracted
  per-100g nutrient values so you can sanity-check the estimate.
- Estimates are not deterministic: the generator may answer differently for
  the same name. Do not treat two calls as comparable measurements.

## Failure handling

Failures are reported distinctly (empty_response, client_error,
server_error, malformed_envelope, transport_error) and are never retried by
the service. If you are storing products and an estimate fails, store the
product with an empty grade and move on - do not abort the save and do not
invent a grade.
"#;

/// Runtime status of the service
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub model: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub estimates_served: u64,
    pub estimates_failed: u64,
}

/// Tracks service start time and request counters
pub struct StatusTracker {
    start_time: Instant,
    model: String,
    estimates_served: u64,
    estimates_failed: u64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(model: String) -> Self {
        Self {
            start_time: Instant::now(),
            model,
            estimates_served: 0,
            estimates_failed: 0,
        }
    }

    /// Record a completed estimate
    pub fn record_success(&mut self) {
        self.estimates_served += 1;
    }

    /// Record a failed estimate
    pub fn record_failure(&mut self) {
        self.estimates_failed += 1;
    }

    /// Get the current status
    pub fn get_status(&self) -> ServiceStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServiceStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            model: self.model.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            estimates_served: self.estimates_served,
            estimates_failed: self.estimates_failed,
        }
    }
}
