//! Built-in tools

mod exit_loop;
mod study_hours;

pub use exit_loop::ExitLoopTool;
pub use study_hours::{HoursResult, StudyHoursTool, compute_study_hours};
