//! Run command - Scan a tree, review the rules and rename invalid entries

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use super::{OutputFormat, RunArgs};
use crate::actions::{FsRenamer, RenameExecutor, RenamePlan, RenameSummary, Renamer};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, ReportRenderer, ScanReport, TerminalOutput};
use crate::cli::prompt::{AssumeYes, InteractivePrompter, Prompter};
use crate::rules::{RuleSet, RuleSetBuilder};
use crate::scanner::{ScanProgress, Scanner};
use crate::utils::Timer;

pub fn execute(args: RunArgs) -> Result<i32> {
    if args.list_rules {
        print!(
            "{}",
            TerminalOutput::new().format_rules(RuleSet::defaults().iter())
        );
        return Ok(exit_codes::SUCCESS);
    }

    let root = resolve_root(args.path.clone())?;

    match args.format {
        OutputFormat::Json => report_json(&root),
        OutputFormat::Terminal if args.yes || args.dry_run => {
            run_session(&root, &args, &mut AssumeYes::new(), FsRenamer)
        }
        OutputFormat::Terminal => {
            run_session(&root, &args, &mut InteractivePrompter::new(), FsRenamer)
        }
    }
}

fn resolve_root(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => dirs::home_dir().context("Could not determine the home directory"),
    }
}

/// Scan with the default rules and print the JSON report. Nothing is renamed.
fn report_json(root: &Path) -> Result<i32> {
    let scanner = match Scanner::new(root) {
        Ok(scanner) => scanner,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return Ok(exit_codes::INVALID_ARGS);
        }
    };

    let rules = RuleSet::defaults();
    let timer = Timer::start();
    let inventory = scanner
        .scan(&rules, &ScanProgress::hidden())
        .context("Failed to scan directory tree")?;
    let plan = RenamePlan::from_inventory(&inventory, &rules);

    let report = ScanReport {
        root: scanner.root(),
        summary: inventory.summary(),
        plan: &plan,
        duration: timer.elapsed(),
    };
    println!("{}", JsonOutput::new().render_report(&report)?);

    if report.summary.invalid_total() > 0 {
        Ok(exit_codes::INVALID_NAMES)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// One full session: confirm the root, review the rules, scan, then offer
/// every proposed rename to `prompter` and apply the accepted ones with
/// `renamer`.
pub fn run_session<P, R>(root: &Path, args: &RunArgs, prompter: &mut P, renamer: R) -> Result<i32>
where
    P: Prompter + ?Sized,
    R: Renamer,
{
    let output = TerminalOutput::new();

    let scanner = match Scanner::new(root) {
        Ok(scanner) => scanner,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return Ok(exit_codes::INVALID_ARGS);
        }
    };

    println!("{}", output.format_header(scanner.root()));
    if !prompter.confirm_root(scanner.root())? {
        println!("{}", "Aborted.".yellow());
        return Ok(exit_codes::SUCCESS);
    }

    let mut builder = RuleSetBuilder::with_defaults();
    prompter.review_rules(&mut builder)?;
    let rules = builder.build();

    let progress = ScanProgress::new(args.no_progress);
    let timer = Timer::start();
    let scanned = scanner.scan(&rules, &progress);
    progress.finish();
    let inventory = scanned.context("Failed to scan directory tree")?;
    let duration = timer.elapsed();

    let plan = RenamePlan::from_inventory(&inventory, &rules);
    print!("{}", output.format_summary(&inventory.summary(), duration));

    if plan.is_empty() && plan.unresolvable().is_empty() {
        println!();
        println!("{}", "No invalid names found.".green());
        return Ok(exit_codes::SUCCESS);
    }

    if args.dry_run {
        print!("{}", output.format_plan(&plan));
        println!();
        println!("{}", "Dry run mode - no changes made.".yellow());
        return Ok(exit_codes::INVALID_NAMES);
    }

    let results = RenameExecutor::new(renamer).execute(&plan, prompter)?;

    println!();
    print!("{}", output.format_unresolvable(&plan));
    let summary = RenameSummary::from_results(&results);
    println!("{}", output.format_tally(&summary));

    if summary.failed > 0 {
        Ok(exit_codes::RENAME_FAILURES)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
