//! Prompt Loader
//!
//! Loads prompt templates from files or falls back to embedded defaults.

use std::path::PathBuf;

use eyre::{Result, eyre};
use handlebars::Handlebars;
use tracing::{debug, info};

use crate::pipeline::SessionState;

use super::embedded;

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory
    user_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a new prompt loader with an optional override directory
    ///
    /// The directory is only consulted if it exists; templates live in
    /// `{name}.pmt` files.
    pub fn new(user_dir: Option<PathBuf>) -> Self {
        Self {
            hbs: Handlebars::new(),
            user_dir: user_dir.filter(|d| d.exists()),
        }
    }

    /// Create a loader that only uses embedded prompts (for testing)
    pub fn embedded_only() -> Self {
        Self {
            hbs: Handlebars::new(),
            user_dir: None,
        }
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. User override: `{user_dir}/{name}.pmt`
    /// 2. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        if let Some(ref user_dir) = self.user_dir {
            let path = user_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!("Loading prompt from user override: {:?}", path);
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read user prompt {}: {}", path.display(), e));
            }
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!("Using embedded prompt: {}", name);
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a role template against the session state
    pub fn render(&self, template_name: &str, state: &SessionState) -> Result<String> {
        let template = self.load_template(template_name)?;
        info!("Rendering template '{}'", template_name);

        self.hbs
            .render_template(&template, state)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }

    /// Get the shared system prompt
    pub fn system_prompt(&self) -> Result<String> {
        self.load_template("system")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_state() -> SessionState {
        let mut state = SessionState::new("Finish 10 chapters of Physics in 7 days");
        state.breakdown = Some(r#"[{"task": "Read Chapter 1", "hours": 2}]"#.to_string());
        state.schedule = Some("Day 1: Read Chapter 1 (2h)".to_string());
        state.critique = Some("Spread the load more evenly".to_string());
        state
    }

    #[test]
    fn test_render_decomposer_includes_goal() {
        let loader = PromptLoader::embedded_only();
        let rendered = loader.render("decomposer", &populated_state()).unwrap();

        assert!(rendered.contains("Finish 10 chapters of Physics in 7 days"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_render_does_not_escape_slot_values() {
        // Breakdown holds JSON; escaped quotes would corrupt it
        let loader = PromptLoader::embedded_only();
        let rendered = loader.render("scheduler", &populated_state()).unwrap();

        assert!(rendered.contains(r#"[{"task": "Read Chapter 1", "hours": 2}]"#));
        assert!(!rendered.contains("&quot;"));
    }

    #[test]
    fn test_render_refiner_includes_critique_and_schedule() {
        let loader = PromptLoader::embedded_only();
        let rendered = loader.render("refiner", &populated_state()).unwrap();

        assert!(rendered.contains("Spread the load more evenly"));
        assert!(rendered.contains("Day 1: Read Chapter 1 (2h)"));
    }

    #[test]
    fn test_render_missing_slot_is_empty() {
        let loader = PromptLoader::embedded_only();
        let state = SessionState::new("goal only");
        let rendered = loader.render("reviewer", &state).unwrap();

        assert!(!rendered.contains("{{"));
        assert!(!rendered.contains("null"));
    }

    #[test]
    fn test_system_prompt_loads() {
        let loader = PromptLoader::embedded_only();
        let system = loader.system_prompt().unwrap();
        assert!(system.contains("study planning assistant"));
    }

    #[test]
    fn test_unknown_template() {
        let loader = PromptLoader::embedded_only();
        let result = loader.load_template("nonexistent-template");
        assert!(result.is_err());
    }

    #[test]
    fn test_user_override_beats_embedded() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("reviewer.pmt"), "Custom review of {{{schedule}}}").unwrap();

        let loader = PromptLoader::new(Some(temp.path().to_path_buf()));
        let rendered = loader.render("reviewer", &populated_state()).unwrap();

        assert!(rendered.starts_with("Custom review of"));
        assert!(rendered.contains("Day 1: Read Chapter 1 (2h)"));
    }

    #[test]
    fn test_missing_override_dir_falls_back_to_embedded() {
        let loader = PromptLoader::new(Some(PathBuf::from("/nonexistent/prompts")));
        let rendered = loader.render("reviewer", &populated_state());
        assert!(rendered.is_ok());
    }
}
