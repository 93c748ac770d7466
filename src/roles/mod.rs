//! Pipeline roles
//!
//! Each role issues exactly one completion request per invocation and
//! writes at most one state slot.

mod decomposer;
mod refiner;
mod reviewer;
mod scheduler;

pub use decomposer::Decomposer;
pub use refiner::{Refiner, RefinerAction};
pub use reviewer::Reviewer;
pub use scheduler::Scheduler;
