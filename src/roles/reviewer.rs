//! Reviewer - critique the schedule or approve it verbatim

use std::sync::Arc;

use eyre::{Context, Result};
use tracing::{info, warn};

use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::pipeline::SessionState;
use crate::prompts::PromptLoader;

/// Reviewer writes the critique slot each cycle
///
/// The loop, not the reviewer, decides what the critique means; this
/// role only records what the model said.
pub struct Reviewer {
    llm: Arc<dyn LlmClient>,
    prompts: Arc<PromptLoader>,
}

impl Reviewer {
    /// Create a new reviewer
    pub fn new(llm: Arc<dyn LlmClient>, prompts: Arc<PromptLoader>) -> Self {
        Self { llm, prompts }
    }

    /// Run one review turn, writing the critique slot
    pub async fn run(&self, state: &mut SessionState) -> Result<()> {
        info!("Reviewing schedule");

        let request = CompletionRequest {
            system_prompt: self.prompts.system_prompt()?,
            messages: vec![Message::user(self.prompts.render("reviewer", state)?)],
            tools: vec![],
            max_tokens: 2048,
        };

        let response = self
            .llm
            .complete(request)
            .await
            .context("Failed to get LLM response for review")?;

        match response.content {
            Some(text) => {
                state.critique = Some(text);
                info!("Schedule reviewed");
            }
            None => {
                warn!("Model returned no critique text, storing empty critique");
                state.critique = Some(String::new());
            }
        }

        Ok(())
    }
}
