//! Command-line argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Pre-fill a submission form from a document (PDF/TXT)
#[derive(Parser, Debug)]
#[command(name = "formease", version, about)]
pub struct Cli {
    /// Document to extract details from (.pdf or .txt, up to 5 MiB)
    pub file: PathBuf,

    /// Model to use for extraction
    #[arg(long, default_value = "gemini-2.0-flash")]
    pub model: String,

    /// Ceiling on the backend call, in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout: u64,

    /// Backend API endpoint
    #[arg(long, default_value = formease_llm::gemini::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Backend API credential
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable form summary
    Text,

    /// The six contract keys as a JSON object
    Json,
}
