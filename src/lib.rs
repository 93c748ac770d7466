//! StudyPlan - LLM study schedule planner
//!
//! StudyPlan turns a free-text study goal into a reviewed, day-by-day
//! schedule. Four fixed LLM roles share one state object: the decomposer
//! extracts a task list, the scheduler drafts a plan, then a reviewer
//! and a refiner alternate inside a bounded loop until the refiner
//! signals approval or the cycle budget runs out.
//!
//! # Core Concepts
//!
//! - **One Request Per Turn**: Every role invocation is a single prompt-completion call
//! - **Slots, Not Transcripts**: Roles communicate through named state slots, overwritten in place
//! - **Signal Over Text**: Approval is the exit_loop tool call, never a parsed phrase
//! - **Bounded Review**: The reviewer/refiner loop never exceeds its cycle budget
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and Gemini implementation
//! - [`roles`] - The four pipeline roles
//! - [`pipeline`] - Session state, the refinement loop, and the run sequence
//! - [`tools`] - Tool system for the refiner's function calls
//! - [`prompts`] - Embedded prompt templates with file overrides
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod roles;
pub mod tools;

// Re-export commonly used types
pub use config::{Config, LlmConfig, PipelineConfig};
pub use llm::{
    CompletionRequest, CompletionResponse, GeminiClient, LlmClient, LlmError, RetryPolicy,
};
pub use pipeline::{
    APPROVAL_TOKEN, LoopOutcome, PipelineReport, RefinementLoop, SessionState, StudyPipeline, TaskItem,
    parse_task_list,
};
pub use prompts::PromptLoader;
pub use roles::{Decomposer, Refiner, RefinerAction, Reviewer, Scheduler};
pub use tools::builtin::{ExitLoopTool, HoursResult, StudyHoursTool, compute_study_hours};
pub use tools::{ExitSignal, Tool, ToolContext, ToolExecutor, ToolResult};
