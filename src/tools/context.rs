//! ToolContext - execution context for tools

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Flag raised by the exit_loop tool to stop the review loop
///
/// Clones share the underlying flag, so a signal raised inside a tool
/// execution is visible to the loop that owns the context.
#[derive(Clone, Default)]
pub struct ExitSignal(Arc<AtomicBool>);

impl ExitSignal {
    /// Create a new, unraised signal
    pub fn new() -> Self {
        debug!("ExitSignal::new: called");
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Raise the signal
    pub fn raise(&self) {
        debug!("ExitSignal::raise: called");
        self.0.store(true, Ordering::SeqCst);
    }

    /// Check whether the signal has been raised
    pub fn is_raised(&self) -> bool {
        let raised = self.0.load(Ordering::SeqCst);
        debug!(%raised, "ExitSignal::is_raised: called");
        raised
    }
}

/// Execution context for tools - scoped to a single pipeline run
#[derive(Clone)]
pub struct ToolContext {
    /// Pipeline run ID (for log correlation)
    pub run_id: String,

    /// Raised when the model signals schedule approval
    pub exit_signal: ExitSignal,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(run_id: String, exit_signal: ExitSignal) -> Self {
        debug!(%run_id, "ToolContext::new: called");
        Self { run_id, exit_signal }
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("run_id", &self.run_id)
            .field("exit_raised", &self.exit_signal.is_raised())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_starts_unraised() {
        let signal = ExitSignal::new();
        assert!(!signal.is_raised());
    }

    #[test]
    fn test_raise_is_visible() {
        let signal = ExitSignal::new();
        signal.raise();
        assert!(signal.is_raised());
    }

    #[test]
    fn test_clones_share_state() {
        let signal = ExitSignal::new();
        let clone = signal.clone();

        clone.raise();

        assert!(signal.is_raised());
        assert!(clone.is_raised());
    }

    #[test]
    fn test_context_debug_shows_run_id() {
        let ctx = ToolContext::new("run-1".to_string(), ExitSignal::new());
        let debug = format!("{:?}", ctx);
        assert!(debug.contains("run-1"));
        assert!(debug.contains("exit_raised"));
    }
}
