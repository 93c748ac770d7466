//! Tool system for pipeline roles
//!
//! Tools give the refiner a function-call channel back into the loop.
//! Each pipeline run gets a `ToolContext` carrying the run ID and the
//! exit signal the loop polls for approval.

mod context;
mod executor;
mod traits;

pub mod builtin;

pub use context::{ExitSignal, ToolContext};
pub use executor::ToolExecutor;
pub use traits::{Tool, ToolResult};
