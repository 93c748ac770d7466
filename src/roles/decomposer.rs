//! Decomposer - break the study goal into tasks with hour estimates

use std::sync::Arc;

use eyre::{Context, Result};
use tracing::{info, warn};

use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::pipeline::SessionState;
use crate::prompts::PromptLoader;

/// Decomposer extracts a JSON task list from the study goal
pub struct Decomposer {
    llm: Arc<dyn LlmClient>,
    prompts: Arc<PromptLoader>,
}

impl Decomposer {
    /// Create a new decomposer
    pub fn new(llm: Arc<dyn LlmClient>, prompts: Arc<PromptLoader>) -> Self {
        Self { llm, prompts }
    }

    /// Run one decomposition turn, writing the breakdown slot
    pub async fn run(&self, state: &mut SessionState) -> Result<()> {
        info!("Decomposing study goal into tasks");

        let request = CompletionRequest {
            system_prompt: self.prompts.system_prompt()?,
            messages: vec![Message::user(self.prompts.render("decomposer", state)?)],
            tools: vec![],
            max_tokens: 2048,
        };

        let response = self
            .llm
            .complete(request)
            .await
            .context("Failed to get LLM response for breakdown")?;

        match response.content {
            Some(text) => {
                state.breakdown = Some(text);
                match state.task_list() {
                    Some(tasks) => info!(task_count = tasks.len(), "Study goal decomposed"),
                    None => warn!("Breakdown is not a well-formed JSON task list, keeping raw text"),
                }
            }
            None => {
                warn!("Model returned no breakdown text, storing empty breakdown");
                state.breakdown = Some(String::new());
            }
        }

        Ok(())
    }
}
