//! StudyPlan - LLM study schedule planner
//!
//! CLI entry point for planning runs and helper commands.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use eyre::{Context, Result};
use tracing::info;

use studyplan::cli::{Cli, Command, OutputFormat};
use studyplan::config::Config;
use studyplan::llm;
use studyplan::pipeline::{LoopOutcome, StudyPipeline};
use studyplan::prompts::{PromptLoader, embedded};
use studyplan::tools::builtin::compute_study_hours;

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studyplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Setup tracing subscriber - write to log file, not stdout/stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("studyplan.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        "StudyPlan loaded config: provider={}, model={}",
        config.llm.provider, config.llm.model
    );

    // Dispatch command
    match cli.command {
        Some(Command::Plan {
            goal,
            max_cycles,
            model,
            format,
        }) => cmd_plan(config, &goal, max_cycles, model, format).await,
        Some(Command::Hours { total, days }) => cmd_hours(total, days),
        Some(Command::Prompts) => cmd_prompts(),
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

/// Run the planning pipeline for a goal
async fn cmd_plan(
    mut config: Config,
    goal: &str,
    max_cycles: Option<u32>,
    model: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    // Apply CLI overrides before validation
    if let Some(model) = model {
        config.llm.model = model;
    }
    if let Some(max) = max_cycles {
        config.pipeline.max_review_cycles = max;
    }

    config.validate()?;

    let llm = llm::create_client(&config.llm).context("Failed to create LLM client")?;
    let prompts = Arc::new(PromptLoader::new(config.pipeline.prompts_dir.clone()));

    let pipeline = StudyPipeline::new(llm, prompts, &config.pipeline);
    let report = pipeline.run(goal).await?;

    match format {
        OutputFormat::Text => {
            println!("{}", report.schedule);
            match report.outcome {
                LoopOutcome::Approved { cycles } => {
                    eprintln!("\nSchedule approved after {} review cycle(s).", cycles);
                }
                LoopOutcome::Exhausted { cycles } => {
                    eprintln!(
                        "\nReview budget exhausted after {} cycle(s); schedule is unapproved.",
                        cycles
                    );
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "run_id": report.run_id,
                "schedule": report.schedule,
                "outcome": if report.outcome.is_approved() { "approved" } else { "exhausted" },
                "cycles": report.outcome.cycles(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

/// Compute an even hours-per-day split
///
/// Prints the result JSON on stdout; invalid input is reported in the
/// JSON, not as a process failure.
fn cmd_hours(total: f64, days: f64) -> Result<()> {
    let result = compute_study_hours(total, days);
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

/// List embedded prompt template names
fn cmd_prompts() -> Result<()> {
    println!("Embedded prompt templates:");
    for name in embedded::names() {
        println!("  {}", name);
    }
    Ok(())
}
