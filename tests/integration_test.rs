//! Integration tests for studyplan
//!
//! These tests exercise the public crate surface: configuration loading,
//! prompt rendering, state slots, and tool execution.

use studyplan::config::Config;
use studyplan::llm::ToolCall;
use studyplan::pipeline::{SessionState, parse_task_list};
use studyplan::prompts::PromptLoader;
use studyplan::tools::builtin::{ExitLoopTool, StudyHoursTool};
use studyplan::tools::{ExitSignal, ToolContext, ToolExecutor};
use tempfile::TempDir;

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_load_explicit_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("studyplan.yml");
    std::fs::write(
        &config_path,
        r#"
llm:
  provider: gemini
  model: gemini-2.5-pro
  api-key-env: MY_GEMINI_KEY
  max-tokens: 4096
  retry:
    attempts: 3
    exp-base: 2
pipeline:
  max-review-cycles: 5
"#,
    )
    .expect("Failed to write config file");

    let config = Config::load(Some(&config_path)).expect("Failed to load config");
    assert_eq!(config.llm.model, "gemini-2.5-pro");
    assert_eq!(config.llm.api_key_env, "MY_GEMINI_KEY");
    assert_eq!(config.llm.max_tokens, 4096);
    assert_eq!(config.llm.retry.attempts, 3);
    assert_eq!(config.llm.retry.exp_base, 2);
    assert_eq!(config.pipeline.max_review_cycles, 5);

    // Unset retry fields keep their defaults
    assert_eq!(config.llm.retry.initial_delay_ms, 1000);
    assert_eq!(config.llm.retry.retry_on, vec![429, 500, 503, 504]);
}

#[test]
fn test_config_load_partial_file_keeps_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("studyplan.yml");
    std::fs::write(&config_path, "llm:\n  model: gemini-2.0-flash\n")
        .expect("Failed to write config file");

    let config = Config::load(Some(&config_path)).expect("Failed to load config");
    assert_eq!(config.llm.model, "gemini-2.0-flash");
    assert_eq!(config.llm.provider, "gemini");
    assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.pipeline.max_review_cycles, 3);
}

#[test]
fn test_config_load_missing_explicit_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("does-not-exist.yml");

    let result = Config::load(Some(&config_path));
    assert!(result.is_err(), "Explicit config path must exist");
}

#[test]
fn test_default_retry_policy() {
    let config = Config::default();
    let retry = &config.llm.retry;

    assert_eq!(retry.attempts, 5);
    assert!(retry.should_retry(429));
    assert!(retry.should_retry(500));
    assert!(retry.should_retry(503));
    assert!(retry.should_retry(504));
    assert!(!retry.should_retry(502));
    assert!(!retry.should_retry(400));

    assert_eq!(retry.delay_for(1).as_millis(), 1000);
    assert_eq!(retry.delay_for(2).as_millis(), 7000);
    assert_eq!(retry.delay_for(3).as_millis(), 49_000);
}

#[test]
fn test_config_validation_missing_api_key() {
    // Use a non-standard env var that won't be set anywhere
    let mut config = Config::default();
    config.llm.api_key_env = "NONEXISTENT_TEST_API_KEY_12345".to_string();

    let result = config.validate();

    assert!(result.is_err(), "Should fail without API key");
    let err = result.unwrap_err().to_string();
    assert!(
        err.contains("NONEXISTENT_TEST_API_KEY_12345"),
        "Error should mention the env var"
    );
}

#[test]
fn test_config_validation_with_api_key() {
    // PATH is set in any test environment, so no env mutation is needed
    let mut config = Config::default();
    config.llm.api_key_env = "PATH".to_string();

    assert!(config.validate().is_ok(), "Should pass with API key set");
}

#[test]
fn test_config_validation_zero_review_cycles() {
    let mut config = Config::default();
    config.llm.api_key_env = "PATH".to_string();
    config.pipeline.max_review_cycles = 0;

    let err = config.validate().unwrap_err().to_string();
    assert!(err.contains("max-review-cycles"), "Error should name the field");
}

// =============================================================================
// Prompt Rendering Tests
// =============================================================================

#[test]
fn test_embedded_prompts_render_for_each_role() {
    let loader = PromptLoader::embedded_only();
    let mut state = SessionState::new("Master linear algebra in 14 days");
    state.breakdown = Some(r#"[{"task": "Vectors", "hours": 4}]"#.to_string());
    state.schedule = Some("Day 1: Vectors (4h)".to_string());
    state.critique = Some("Add a rest day".to_string());

    let decomposer = loader.render("decomposer", &state).expect("decomposer should render");
    assert!(decomposer.contains("Master linear algebra in 14 days"));

    let scheduler = loader.render("scheduler", &state).expect("scheduler should render");
    assert!(scheduler.contains(r#"[{"task": "Vectors", "hours": 4}]"#));

    let reviewer = loader.render("reviewer", &state).expect("reviewer should render");
    assert!(reviewer.contains("Day 1: Vectors (4h)"));

    let refiner = loader.render("refiner", &state).expect("refiner should render");
    assert!(refiner.contains("Add a rest day"));
    assert!(refiner.contains("Day 1: Vectors (4h)"));

    for rendered in [decomposer, scheduler, reviewer, refiner] {
        assert!(!rendered.contains("{{"), "No leftover template placeholders");
        assert!(!rendered.contains("&quot;"), "JSON quotes must not be HTML-escaped");
    }
}

#[test]
fn test_system_prompt_available() {
    let loader = PromptLoader::embedded_only();
    let system = loader.system_prompt().expect("system prompt should render");
    assert!(system.contains("study"));
}

#[test]
fn test_user_prompt_dir_overrides_embedded() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        temp_dir.path().join("reviewer.pmt"),
        "Rate this plan: {{{schedule}}}",
    )
    .expect("Failed to write override template");

    let loader = PromptLoader::new(Some(temp_dir.path().to_path_buf()));
    let mut state = SessionState::new("goal");
    state.schedule = Some("Day 1: rest".to_string());

    let reviewer = loader.render("reviewer", &state).expect("reviewer should render");
    assert_eq!(reviewer, "Rate this plan: Day 1: rest");

    // Roles without an override file still use the embedded template
    let decomposer = loader.render("decomposer", &state).expect("decomposer should render");
    assert!(decomposer.contains("JSON list"));
}

#[test]
fn test_unknown_template_fails() {
    let loader = PromptLoader::embedded_only();
    let state = SessionState::new("goal");

    let result = loader.render("summarizer", &state);
    assert!(result.is_err(), "Unknown template name should fail");
}

// =============================================================================
// Session State Tests
// =============================================================================

#[test]
fn test_breakdown_slot_parses_as_task_list() {
    let mut state = SessionState::new("Finish 10 chapters of Physics in 7 days");
    assert!(state.task_list().is_none());

    state.breakdown = Some(
        r#"[{"task": "Read Chapters 1-5", "hours": 7}, {"task": "Read Chapters 6-10", "hours": 7}]"#
            .to_string(),
    );

    let tasks = state.task_list().expect("Breakdown should parse");
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].task, "Read Chapters 1-5");
    assert_eq!(tasks[1].hours, 7.0);
}

#[test]
fn test_parse_task_list_rejects_prose() {
    assert!(parse_task_list("Here is your plan: study a lot").is_none());
    assert!(parse_task_list("```json\n[]\n```").is_none());
}

// =============================================================================
// Tool Execution Tests
// =============================================================================

#[tokio::test]
async fn test_executor_runs_study_hours_tool() {
    let mut executor = ToolExecutor::empty();
    executor.add_tool(Box::new(StudyHoursTool));

    let ctx = ToolContext::new("run-1".to_string(), ExitSignal::new());
    let call = ToolCall {
        name: "compute_study_hours".to_string(),
        input: serde_json::json!({"total_hours": 12.0, "days": 4.0}),
    };

    let result = executor.execute(&call, &ctx).await;
    assert!(!result.is_error);
    assert!(result.content.contains("hours_per_day"));
    assert!(result.content.contains("3"));
}

#[tokio::test]
async fn test_executor_exit_loop_raises_signal() {
    let mut executor = ToolExecutor::empty();
    executor.add_tool(Box::new(ExitLoopTool));

    let signal = ExitSignal::new();
    let ctx = ToolContext::new("run-2".to_string(), signal.clone());
    let call = ToolCall {
        name: "exit_loop".to_string(),
        input: serde_json::json!({}),
    };

    assert!(!signal.is_raised());
    let result = executor.execute(&call, &ctx).await;

    assert!(!result.is_error);
    assert!(result.content.contains("approved"));
    assert!(signal.is_raised(), "exit_loop should raise the signal");
}

#[tokio::test]
async fn test_executor_unknown_tool() {
    let executor = ToolExecutor::empty();
    let ctx = ToolContext::new("run-3".to_string(), ExitSignal::new());
    let call = ToolCall {
        name: "frobnicate".to_string(),
        input: serde_json::json!({}),
    };

    let result = executor.execute(&call, &ctx).await;
    assert!(result.is_error);
    assert!(result.content.contains("Unknown tool"));
}
