//! Refiner - apply the critique or signal approval via exit_loop

use std::sync::Arc;

use eyre::{Context, Result};
use tracing::{debug, info, warn};

use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::pipeline::SessionState;
use crate::prompts::PromptLoader;
use crate::tools::builtin::ExitLoopTool;
use crate::tools::{ToolContext, ToolExecutor};

/// What the refiner did with its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinerAction {
    /// Called exit_loop; the schedule slot was left untouched
    SignaledApproval,
    /// Overwrote the schedule slot with a revision
    Revised,
    /// Produced neither a tool call nor revision text
    Unchanged,
}

/// Refiner revises the schedule in place or raises the exit signal
pub struct Refiner {
    llm: Arc<dyn LlmClient>,
    prompts: Arc<PromptLoader>,
    tools: ToolExecutor,
}

impl Refiner {
    /// Create a new refiner with the exit_loop tool registered
    pub fn new(llm: Arc<dyn LlmClient>, prompts: Arc<PromptLoader>) -> Self {
        let mut tools = ToolExecutor::empty();
        tools.add_tool(Box::new(ExitLoopTool));

        Self { llm, prompts, tools }
    }

    /// Run one refinement turn
    ///
    /// When the model calls exit_loop, the exit signal wins: the schedule
    /// slot is left untouched even if the turn also produced text.
    pub async fn run(&self, state: &mut SessionState, ctx: &ToolContext) -> Result<RefinerAction> {
        info!("Refining schedule");

        let request = CompletionRequest {
            system_prompt: self.prompts.system_prompt()?,
            messages: vec![Message::user(self.prompts.render("refiner", state)?)],
            tools: self.tools.definitions(),
            max_tokens: 4096,
        };

        let response = self
            .llm
            .complete(request)
            .await
            .context("Failed to get LLM response for refinement")?;

        for call in &response.tool_calls {
            let result = self.tools.execute(call, ctx).await;
            if result.is_error {
                warn!(tool = %call.name, error = %result.content, "Tool call failed");
            } else {
                debug!(tool = %call.name, "Tool call succeeded");
            }
        }

        if ctx.exit_signal.is_raised() {
            info!("Refiner signaled approval, schedule unchanged");
            return Ok(RefinerAction::SignaledApproval);
        }

        match response.content {
            Some(text) if !text.is_empty() => {
                state.schedule = Some(text);
                info!("Schedule revised");
                Ok(RefinerAction::Revised)
            }
            _ => {
                warn!("Model returned no revision text, schedule unchanged");
                Ok(RefinerAction::Unchanged)
            }
        }
    }
}
