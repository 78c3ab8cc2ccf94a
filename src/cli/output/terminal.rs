//! Terminal output formatting with colors

use colored::Colorize;
use std::path::Path;
use std::time::Duration;

use crate::actions::{
    PlannedGroup, RenameOutcome, RenamePlan, RenameProposal, RenameResult, RenameSummary,
};
use crate::inventory::{GroupCount, InventorySummary};
use crate::rules::Rule;
use crate::utils::format_duration;

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    pub fn format_header(&self, root: &Path) -> String {
        format!(
            "{} {}",
            "The path to the selected folder is".blue(),
            root.display().to_string().bright_yellow()
        )
    }

    /// The rule table shown before scanning
    pub fn format_rules<'a>(&self, rules: impl IntoIterator<Item = &'a Rule>) -> String {
        let mut output = format!("{}\n", "Forbidden characters are :".bold());

        for rule in rules {
            let line = match rule {
                Rule::Literal(literal) => format!(
                    " - {} {} {}\n",
                    rule.key().to_string().green(),
                    "will be converted to".blue(),
                    display_replacement(literal.replacement()).cyan()
                ),
                Rule::Termination(termination) => {
                    let trailing: Vec<String> = termination
                        .trailing()
                        .iter()
                        .map(|c| format!("{:?}", c))
                        .collect();
                    format!(
                        " - {} {} {}\n",
                        rule.key().to_string().green(),
                        "strips trailing".blue(),
                        trailing.join(" ").cyan()
                    )
                }
            };
            output.push_str(&line);
        }

        output
    }

    pub fn format_summary(&self, summary: &InventorySummary, duration: Duration) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  SCAN RESULTS".bold()
        ));

        for (verb, count, what) in [
            ("Scanned", summary.files, "total files."),
            ("Scanned", summary.directories, "total directories."),
            ("Found", summary.invalid_files, "problematic files."),
            ("Found", summary.invalid_directories, "problematic directories."),
        ] {
            output.push_str(&format!(
                "{} {} {}\n",
                verb.blue(),
                count.to_string().yellow(),
                what.blue()
            ));
        }

        if summary.skipped > 0 {
            output.push_str(&format!(
                "{} {} {}\n",
                "Skipped".yellow(),
                summary.skipped.to_string().yellow(),
                "entries with names that are not valid UTF-8.".yellow()
            ));
        }

        output.push_str(&format!(
            "{} {}\n",
            "Scan took".dimmed(),
            format_duration(duration).dimmed()
        ));

        output.push_str(&format!(
            "\nProblems for files :\n{}",
            format_group_counts(&summary.file_groups)
        ));
        output.push_str(&format!(
            "Problems for directories :\n{}",
            format_group_counts(&summary.directory_groups)
        ));

        output
    }

    /// Every proposal of a plan, for report-only runs
    pub fn format_plan(&self, plan: &RenamePlan) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  PROPOSED RENAMES".bold()
        ));

        if plan.is_empty() {
            output.push_str(&format!("  {}\n", "No renames required.".green()));
        }

        for group in plan.groups() {
            output.push_str(&self.format_group_header(group));
            for proposal in group.proposals() {
                output.push_str(&self.format_proposal(proposal));
                output.push('\n');
            }
        }

        output.push_str(&self.format_unresolvable(plan));
        output
    }

    pub fn format_unresolvable(&self, plan: &RenamePlan) -> String {
        let mut output = String::new();
        for item in plan.unresolvable() {
            output.push_str(&format!(
                " {} {} : {} {}\n",
                "!".red(),
                item.kind,
                item.path.display().to_string().yellow(),
                item.reason.red()
            ));
        }
        output
    }

    pub fn format_group_header(&self, group: &PlannedGroup) -> String {
        format!(
            "{} {} {}\n",
            "Problem".blue(),
            group.violated().to_string().green(),
            format!("({})", group.kind().plural()).dimmed()
        )
    }

    pub fn format_proposal(&self, proposal: &RenameProposal) -> String {
        format!(
            " - {} : {} {} {}",
            proposal.kind().label().blue(),
            proposal.original().display().to_string().yellow(),
            "will be renamed into".blue(),
            proposal.renamed().display().to_string().yellow()
        )
    }

    pub fn format_result(&self, result: &RenameResult) -> String {
        let path = result.proposal.original().display().to_string();
        match &result.outcome {
            RenameOutcome::Renamed => format!("   {} {}", "✓".green(), "renamed".green()),
            RenameOutcome::Declined => format!(
                "   {} {} {}",
                "-".dimmed(),
                path.dimmed(),
                "not renamed".dimmed()
            ),
            RenameOutcome::Failed(error) => {
                format!("   {} {} - {}", "✗".red(), path, error.red())
            }
        }
    }

    pub fn format_tally(&self, summary: &RenameSummary) -> String {
        format!(
            "{}: {} renamed, {} not renamed, {} failed",
            "Summary".bold(),
            summary.renamed.to_string().green(),
            summary.declined.to_string().yellow(),
            summary.failed.to_string().red()
        )
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

fn display_replacement(replacement: &str) -> String {
    if replacement.is_empty() {
        "(nothing)".to_string()
    } else {
        replacement.escape_debug().to_string()
    }
}

fn format_group_counts(groups: &[GroupCount]) -> String {
    if groups.is_empty() {
        return format!(" - {}\n", "none".dimmed());
    }

    groups
        .iter()
        .map(|g| {
            format!(
                " - {} {} {}\n",
                g.rules.to_string().green(),
                "contains".blue(),
                g.count.to_string().cyan()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{Entry, EntryKind, Inventory};
    use crate::rules::{RuleKey, RuleSet, RuleSetBuilder};

    fn sample() -> (Inventory, RenamePlan) {
        let rules = RuleSet::defaults();
        let mut inventory = Inventory::new();
        inventory.add(Entry::classify(EntryKind::File, Path::new("/d"), "a:b", &rules));
        inventory.add(Entry::classify(EntryKind::Directory, Path::new("/d"), "c:d", &rules));
        inventory.add(Entry::classify(EntryKind::File, Path::new("/d"), " ,", &rules));
        let plan = RenamePlan::from_inventory(&inventory, &rules);
        (inventory, plan)
    }

    #[test]
    fn test_format_rules_lists_every_rule() {
        let formatted = TerminalOutput::new().format_rules(RuleSet::defaults().iter());
        assert!(formatted.contains("Forbidden characters are"));
        assert!(formatted.contains("\\r"));
        assert!(formatted.contains("(nothing)"));
        assert!(formatted.contains("termination"));
        assert_eq!(formatted.lines().count(), RuleSet::defaults().len() + 1);
    }

    #[test]
    fn test_format_rules_shows_edits() {
        let mut builder = RuleSetBuilder::with_defaults();
        builder.set_replacement(&RuleKey::literal('*'), "star").unwrap();
        let formatted = TerminalOutput::new().format_rules(builder.iter());
        assert!(formatted.contains("star"));
    }

    #[test]
    fn test_format_summary() {
        let (inventory, _) = sample();
        let formatted =
            TerminalOutput::new().format_summary(&inventory.summary(), Duration::from_millis(5));
        assert!(formatted.contains("SCAN RESULTS"));
        assert!(formatted.contains("total files."));
        assert!(formatted.contains("problematic directories."));
        assert!(formatted.contains("[':']"));
        assert!(formatted.contains("5ms"));
    }

    #[test]
    fn test_format_plan() {
        let (_, plan) = sample();
        let formatted = TerminalOutput::new().format_plan(&plan);
        assert!(formatted.contains("PROPOSED RENAMES"));
        assert!(formatted.contains("/d/a-b"));
        assert!(formatted.contains("/d/c-d"));
        assert!(formatted.contains("empty name"));
    }

    #[test]
    fn test_format_plan_empty() {
        let formatted = TerminalOutput::new().format_plan(&RenamePlan::new());
        assert!(formatted.contains("No renames required"));
    }

    #[test]
    fn test_format_result_declined() {
        let (_, plan) = sample();
        let result = RenameResult {
            proposal: plan.proposals().next().unwrap().clone(),
            outcome: RenameOutcome::Declined,
        };
        let formatted = TerminalOutput::new().format_result(&result);
        assert!(formatted.contains("not renamed"));
        assert!(formatted.contains("/d/a:b"));
    }

    #[test]
    fn test_format_result_failed() {
        let (_, plan) = sample();
        let result = RenameResult {
            proposal: plan.proposals().next().unwrap().clone(),
            outcome: RenameOutcome::Failed("Target exists".to_string()),
        };
        let formatted = TerminalOutput::new().format_result(&result);
        assert!(formatted.contains("Target exists"));
    }

    #[test]
    fn test_format_tally() {
        let formatted = TerminalOutput::new().format_tally(&RenameSummary {
            renamed: 3,
            declined: 1,
            failed: 0,
        });
        assert!(formatted.contains("renamed"));
        assert!(formatted.contains("not renamed"));
        assert!(formatted.contains('3'));
    }
}
