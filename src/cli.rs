//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// StudyPlan - LLM study schedule planner
#[derive(Parser)]
#[command(
    name = "studyplan",
    about = "LLM-driven study schedule planner with a bounded review loop",
    version,
    after_help = "Logs are written to: ~/.local/share/studyplan/logs/studyplan.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Plan a study schedule for a goal
    Plan {
        /// Study goal, including any availability details
        goal: String,

        /// Review/refine cycle budget (overrides config)
        #[arg(long)]
        max_cycles: Option<u32>,

        /// Model identifier (overrides config)
        #[arg(long)]
        model: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Divide total study hours evenly across days
    Hours {
        /// Total hours of study to distribute
        #[arg(long)]
        total: f64,

        /// Number of days to spread the hours across
        #[arg(long)]
        days: f64,
    },

    /// List embedded prompt template names
    Prompts,
}

/// Output format for the plan command
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
