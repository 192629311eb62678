//! CLI parse: clap types for Nomora. No behavior; definitions only.

use crate::provider::ProviderKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Nomora CLI - travel catchphrases, plan suggestions and chat
#[derive(Parser, Debug)]
#[command(name = "nomora")]
#[command(about = "Travel catchphrase, plan and chat generation over LLM backends")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend to use (openai, gemini, openrouter, mock); overrides config
    #[arg(long)]
    pub provider: Option<ProviderKind>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,
}

/// Who the content is generated for
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Traveler's name
    #[arg(long, default_value = "Traveler")]
    pub name: String,

    /// Traveler's age
    #[arg(long, default_value = "21")]
    pub age: u32,

    /// City the trip starts from
    #[arg(long, default_value = "Jakarta")]
    pub city: String,

    /// Country code; selects language and cultural context (ID, ZH, others → English)
    #[arg(long, default_value = "ID")]
    pub country: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn a feeling into an upbeat travel catchphrase
    Catchphrase {
        #[command(flatten)]
        profile: ProfileArgs,
        /// How the traveler feels, in their own words
        #[arg(long)]
        feeling: String,
        /// Budget in IDR
        #[arg(long, allow_negative_numbers = true)]
        budget: Option<i64>,
    },
    /// Suggest four trip plans alongside a feeling validation
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Trip length in days
        #[arg(long)]
        days: u32,
        /// Budget in IDR
        #[arg(long, allow_negative_numbers = true)]
        budget: i64,
        /// How the traveler feels, in their own words
        #[arg(long)]
        feeling: String,
    },
    /// Reply to a chat message
    Chat {
        #[command(flatten)]
        profile: ProfileArgs,
        /// New message from the traveler
        #[arg(long)]
        message: String,
        /// JSON file with prior messages ([{"role": "user", "content": "..."}])
        #[arg(long)]
        history: Option<PathBuf>,
        /// Title of the plan the traveler picked
        #[arg(long)]
        chosen_plan: Option<String>,
    },
    /// Show the active backend and which backends are configured
    Providers,
}
