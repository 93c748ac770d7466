//! SessionState - shared slots for the planning pipeline

use serde::{Deserialize, Serialize};

/// A single task extracted from the study goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub task: String,
    pub hours: f64,
}

/// Shared state slots written by the pipeline roles
///
/// Each role reads the slots it needs and overwrites exactly one slot
/// with its output. The refiner writes `schedule` in place; earlier
/// drafts are not kept.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    /// The learner's study goal, verbatim
    pub goal: String,

    /// Decomposer output: JSON task list as returned by the model
    pub breakdown: Option<String>,

    /// Scheduler and refiner output: day-by-day plan text
    pub schedule: Option<String>,

    /// Reviewer output: the approval token or improvement suggestions
    pub critique: Option<String>,
}

impl SessionState {
    /// Create state for a new run
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            ..Default::default()
        }
    }

    /// Parse the breakdown slot as a task list, if present and well-formed
    pub fn task_list(&self) -> Option<Vec<TaskItem>> {
        self.breakdown.as_deref().and_then(parse_task_list)
    }
}

/// Parse model output as a JSON task list
///
/// Returns None when the text is not a well-formed list. The breakdown
/// slot keeps the raw text either way; parsing is a read-side view.
pub fn parse_task_list(text: &str) -> Option<Vec<TaskItem>> {
    serde_json::from_str(text.trim()).ok()
}
