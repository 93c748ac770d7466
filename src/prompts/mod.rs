//! Prompt template management
//!
//! Role prompts are embedded in the binary; a user directory can
//! override any template per file.

pub mod embedded;
mod loader;

pub use loader::PromptLoader;
