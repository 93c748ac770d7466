//! Planning pipeline
//!
//! The decomposer and scheduler run once each; the reviewer and refiner
//! then alternate inside a bounded refinement loop. All roles share one
//! SessionState, one slot per role.

mod review;
mod runner;
mod state;

pub use review::{APPROVAL_TOKEN, LoopOutcome, RefinementLoop};
pub use runner::{PipelineReport, StudyPipeline};
pub use state::{SessionState, TaskItem, parse_task_list};
