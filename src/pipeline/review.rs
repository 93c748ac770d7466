//! RefinementLoop - bounded reviewer/refiner alternation

use std::sync::Arc;

use eyre::Result;
use tracing::{debug, info};

use crate::llm::LlmClient;
use crate::prompts::PromptLoader;
use crate::roles::{Refiner, Reviewer};
use crate::tools::{ExitSignal, ToolContext};

use super::SessionState;

/// Token the reviewer must emit verbatim to approve the schedule
///
/// Compared with `==`: no trimming, no case folding. A critique of
/// "APPROVED\n" or "approved" is treated as suggestions like any other.
pub const APPROVAL_TOKEN: &str = "APPROVED";

/// How the review loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The refiner called exit_loop within the cycle budget
    Approved { cycles: u32 },
    /// The cycle budget ran out without an approval signal
    Exhausted { cycles: u32 },
}

impl LoopOutcome {
    /// Number of cycles the loop ran
    pub fn cycles(&self) -> u32 {
        match self {
            LoopOutcome::Approved { cycles } => *cycles,
            LoopOutcome::Exhausted { cycles } => *cycles,
        }
    }

    /// Whether the loop ended in approval
    pub fn is_approved(&self) -> bool {
        matches!(self, LoopOutcome::Approved { .. })
    }
}

/// Alternates reviewer and refiner turns up to a fixed cycle budget
///
/// Only the exit signal ends the loop early. The approval token in the
/// critique slot is advisory text for the refiner, not a loop condition;
/// every cycle runs both turns.
pub struct RefinementLoop {
    reviewer: Reviewer,
    refiner: Refiner,
    max_cycles: u32,
}

impl RefinementLoop {
    /// Create a new refinement loop
    pub fn new(llm: Arc<dyn LlmClient>, prompts: Arc<PromptLoader>, max_cycles: u32) -> Self {
        Self {
            reviewer: Reviewer::new(llm.clone(), prompts.clone()),
            refiner: Refiner::new(llm, prompts),
            max_cycles,
        }
    }

    /// Run the loop to approval or exhaustion
    pub async fn run(&self, state: &mut SessionState, run_id: &str) -> Result<LoopOutcome> {
        let signal = ExitSignal::new();
        let ctx = ToolContext::new(run_id.to_string(), signal.clone());

        let mut cycle = 0;
        while cycle < self.max_cycles {
            cycle += 1;
            info!("Review cycle {}/{}", cycle, self.max_cycles);

            self.reviewer.run(state).await?;

            if state.critique.as_deref() == Some(APPROVAL_TOKEN) {
                debug!(cycle, "Critique matches the approval token");
            }

            let action = self.refiner.run(state, &ctx).await?;

            if signal.is_raised() {
                info!(cycles = cycle, "Schedule approved");
                return Ok(LoopOutcome::Approved { cycles: cycle });
            }

            debug!(cycle, ?action, "Cycle finished without approval");
        }

        info!(cycles = self.max_cycles, "Review budget exhausted without approval");
        Ok(LoopOutcome::Exhausted {
            cycles: self.max_cycles,
        })
    }
}
