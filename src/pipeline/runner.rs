//! StudyPipeline - sequential decompose, schedule, review

use std::sync::Arc;

use eyre::{Context, Result};
use tracing::info;
use uuid::Uuid;

use crate::config::PipelineConfig;
use crate::llm::LlmClient;
use crate::prompts::PromptLoader;
use crate::roles::{Decomposer, Scheduler};

use super::SessionState;
use super::review::{LoopOutcome, RefinementLoop};

/// Result of a full pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Run ID used for log correlation
    pub run_id: String,
    /// Final schedule text
    pub schedule: String,
    /// How the review loop ended
    pub outcome: LoopOutcome,
}

/// StudyPipeline runs the fixed decompose, schedule, review sequence
///
/// An exhausted review budget is a normal result carrying the last
/// revision; only role failures surface as errors.
pub struct StudyPipeline {
    decomposer: Decomposer,
    scheduler: Scheduler,
    review: RefinementLoop,
}

impl StudyPipeline {
    /// Create a new pipeline
    pub fn new(llm: Arc<dyn LlmClient>, prompts: Arc<PromptLoader>, config: &PipelineConfig) -> Self {
        Self {
            decomposer: Decomposer::new(llm.clone(), prompts.clone()),
            scheduler: Scheduler::new(llm.clone(), prompts.clone()),
            review: RefinementLoop::new(llm, prompts, config.max_review_cycles),
        }
    }

    /// Run the pipeline for a study goal
    pub async fn run(&self, goal: &str) -> Result<PipelineReport> {
        let run_id = Uuid::now_v7().to_string();
        info!(run_id = %run_id, goal = %goal, "Starting study planning run");

        let mut state = SessionState::new(goal);

        self.decomposer.run(&mut state).await.context("Breakdown stage failed")?;

        self.scheduler.run(&mut state).await.context("Scheduling stage failed")?;

        let outcome = self
            .review
            .run(&mut state, &run_id)
            .await
            .context("Review loop failed")?;

        info!(
            run_id = %run_id,
            approved = outcome.is_approved(),
            cycles = outcome.cycles(),
            "Study planning run finished"
        );

        Ok(PipelineReport {
            run_id,
            schedule: state.schedule.unwrap_or_default(),
            outcome,
        })
    }
}
