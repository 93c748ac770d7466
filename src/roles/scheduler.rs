//! Scheduler - turn the task breakdown into a day-by-day plan

use std::sync::Arc;

use eyre::{Context, Result};
use tracing::{info, warn};

use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::pipeline::SessionState;
use crate::prompts::PromptLoader;

/// Scheduler drafts the initial day-by-day schedule
pub struct Scheduler {
    llm: Arc<dyn LlmClient>,
    prompts: Arc<PromptLoader>,
}

impl Scheduler {
    /// Create a new scheduler
    pub fn new(llm: Arc<dyn LlmClient>, prompts: Arc<PromptLoader>) -> Self {
        Self { llm, prompts }
    }

    /// Run one scheduling turn, writing the schedule slot
    pub async fn run(&self, state: &mut SessionState) -> Result<()> {
        info!("Drafting day-by-day schedule");

        let request = CompletionRequest {
            system_prompt: self.prompts.system_prompt()?,
            messages: vec![Message::user(self.prompts.render("scheduler", state)?)],
            tools: vec![],
            max_tokens: 4096,
        };

        let response = self
            .llm
            .complete(request)
            .await
            .context("Failed to get LLM response for schedule")?;

        match response.content {
            Some(text) => {
                state.schedule = Some(text);
                info!("Schedule drafted");
            }
            None => {
                warn!("Model returned no schedule text, storing empty schedule");
                state.schedule = Some(String::new());
            }
        }

        Ok(())
    }
}
