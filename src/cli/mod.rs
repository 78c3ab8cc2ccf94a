//! # CLI Module
//!
//! This module defines the command-line interface for Renamarion using `clap`.
//!
//! A run walks the root directory, shows how many names break the rules,
//! and offers a sanitized name for each of them.
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Report output formatters (JSON, Terminal)
//! - [`prompt`] - Operator dialogue (interactive, assume-yes)
//!
//! ## Options
//!
//! | Option | Description |
//! |--------|-------------|
//! | `-p, --path <DIR>` | Root directory (env `RENAMARION_PATH`, defaults to the home directory) |
//! | `-y, --yes` | Rename everything with the default rules, no prompts |
//! | `--dry-run` | Report the proposed renames without changing anything |
//! | `-f, --format <FORMAT>` | `terminal` or `json` |
//! | `--no-progress` | Hide the scanning spinner |
//! | `--list-rules` | Print the default rule table |
//! | `-v, --verbose` | Increase verbosity level (-v, -vv, -vvv) |
//!
//! ## Examples
//!
//! ```bash
//! # Interactive run on a mounted share
//! renamarion --path /mnt/share
//!
//! # See what would change
//! renamarion --path /mnt/share --dry-run
//!
//! # Machine-readable report
//! renamarion --path /mnt/share --format json > report.json
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;
pub mod prompt;

use clap::Parser;

use commands::RunArgs;

/// Renamarion - Find and fix file names that break cross-platform naming rules
#[derive(Parser, Debug)]
#[command(name = "renamarion")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub run: RunArgs,
}
