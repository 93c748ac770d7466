//! ExitLoop tool - signal schedule approval

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::tools::{Tool, ToolContext, ToolResult};

/// ExitLoop tool - signal that the schedule is approved and the review
/// loop should stop
///
/// Takes no arguments. Raises the exit signal on the context; the loop
/// checks the signal after the refiner turn, not the tool result text.
pub struct ExitLoopTool;

#[async_trait]
impl Tool for ExitLoopTool {
    fn name(&self) -> &'static str {
        "exit_loop"
    }

    fn description(&self) -> &'static str {
        "Signal that the schedule is approved and the review loop should stop. Takes no arguments."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _input: Value, ctx: &ToolContext) -> ToolResult {
        ctx.exit_signal.raise();

        tracing::info!(run_id = %ctx.run_id, "exit_loop: approval signaled");

        ToolResult::success(json!({ "status": "approved" }).to_string())
    }
}
