//! CLI commands module

pub mod run;

use clap::Args;
use std::path::PathBuf;

/// Arguments for a rename run
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Root directory to scan (defaults to the home directory)
    #[arg(short, long, env = "RENAMARION_PATH", value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Skip confirmation prompts and rename everything with the default rules
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run - report the proposed renames without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Hide the scanning spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Print the default rule table and exit
    #[arg(long)]
    pub list_rules: bool,
}

/// Output format for a run
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}
