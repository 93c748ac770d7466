//! StudyHours tool - divide total study hours across days
//!
//! Standalone helper tool. The planning pipeline does not call it; it is
//! registered for ad-hoc use and exposed through the `hours` subcommand.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::tools::{Tool, ToolContext, ToolResult};

/// Result of a study-hours computation
///
/// Serializes to `{"status":"success","hours_per_day":2.0}` or
/// `{"status":"error","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HoursResult {
    Success { hours_per_day: f64 },
    Error { message: String },
}

impl HoursResult {
    /// Check whether this is the error variant
    pub fn is_error(&self) -> bool {
        matches!(self, HoursResult::Error { .. })
    }
}

/// Divide total study hours evenly across a number of days
///
/// Pure and idempotent. Rejects non-finite inputs and day counts at or
/// below zero instead of producing NaN or infinite rates.
pub fn compute_study_hours(total_hours: f64, days: f64) -> HoursResult {
    if !total_hours.is_finite() || !days.is_finite() {
        return HoursResult::Error {
            message: format!("Invalid numeric input: total_hours={}, days={}", total_hours, days),
        };
    }
    if days <= 0.0 {
        return HoursResult::Error {
            message: "Days must be > 0".to_string(),
        };
    }
    HoursResult::Success {
        hours_per_day: total_hours / days,
    }
}

/// StudyHours tool - compute an even hours-per-day split
pub struct StudyHoursTool;

#[async_trait]
impl Tool for StudyHoursTool {
    fn name(&self) -> &'static str {
        "compute_study_hours"
    }

    fn description(&self) -> &'static str {
        "Divide total study hours evenly across a number of days. Returns hours per day."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "total_hours": {
                    "type": "number",
                    "description": "Total hours of study to distribute"
                },
                "days": {
                    "type": "number",
                    "description": "Number of days to spread the hours across"
                }
            },
            "required": ["total_hours", "days"]
        })
    }

    async fn execute(&self, input: Value, _ctx: &ToolContext) -> ToolResult {
        let total_hours = input.get("total_hours").and_then(Value::as_f64);
        let days = input.get("days").and_then(Value::as_f64);

        let result = match (total_hours, days) {
            (Some(h), Some(d)) => compute_study_hours(h, d),
            _ => HoursResult::Error {
                message: format!("Invalid numeric input: {}", input),
            },
        };

        let is_error = result.is_error();
        match serde_json::to_string(&result) {
            Ok(content) if is_error => ToolResult::error(content),
            Ok(content) => ToolResult::success(content),
            Err(e) => ToolResult::error(format!("Serialization failed: {}", e)),
        }
    }
}
