//! Embedded fallback prompts
//!
//! These are compiled into the binary and used when template files are not found.
//! Slot placeholders use triple braces so JSON and quotes in slot values
//! pass through unescaped.

/// Shared system prompt for all roles
pub const SYSTEM: &str = r#"You are part of a study planning assistant that turns a learner's goal into a realistic, balanced study schedule.

Follow the task instructions precisely and output only what they ask for. Do not add greetings or commentary.
"#;

/// Decomposer: break the goal into tasks with hour estimates
pub const DECOMPOSER: &str = r#"# Task Breakdown

The learner describes a study goal, for example: "Finish 10 chapters of Physics in 7 days, I am free 2 hours each evening".

Goal:
{{{goal}}}

Break the goal into a list of subtasks with estimated hours.

Output ONLY a JSON list of objects with keys "task" and "hours". Example:
[
  {"task": "Read Chapter 1", "hours": 2},
  {"task": "Practice problems Ch1", "hours": 2.5}
]

Do not wrap the list in prose or markdown fences.
"#;

/// Scheduler: turn the breakdown into a day-by-day plan
pub const SCHEDULER: &str = r#"# Scheduling

You are a scheduler. Build a day-by-day plan from the task breakdown below, honoring any availability details in the goal.

Goal:
{{{goal}}}

Task breakdown:
{{{breakdown}}}

Assign hours to tasks and keep the daily load reasonable.

Output a clear, human-readable schedule.
"#;

/// Reviewer: critique the schedule or approve it verbatim
pub const REVIEWER: &str = r#"# Schedule Review

Review the schedule below and decide whether it is balanced and realistic.

Schedule:
{{{schedule}}}

If the schedule is acceptable, respond EXACTLY with: APPROVED
Otherwise provide 2-3 concise, actionable suggestions to improve it. Do not rewrite the schedule yourself.
"#;

/// Refiner: apply the critique or signal approval via exit_loop
pub const REFINER: &str = r#"# Schedule Refinement

You receive a critique and the current schedule.

Critique:
{{{critique}}}

Current schedule:
{{{schedule}}}

If the critique is EXACTLY "APPROVED", call the exit_loop tool and return the schedule unchanged.
Otherwise, revise the schedule to address the critique and output ONLY the improved schedule.
"#;

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "system" => Some(SYSTEM),
        "decomposer" => Some(DECOMPOSER),
        "scheduler" => Some(SCHEDULER),
        "reviewer" => Some(REVIEWER),
        "refiner" => Some(REFINER),
        _ => None,
    }
}

/// Names of all embedded prompts
pub fn names() -> &'static [&'static str] {
    &["system", "decomposer", "scheduler", "reviewer", "refiner"]
}
