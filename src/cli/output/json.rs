//! JSON output formatting

use serde::Serialize;
use std::path::Path;

use super::{ReportRenderer, ScanReport};
use crate::actions::{RenameProposal, Unresolvable};
use crate::error::RenamarionError;
use crate::inventory::InventorySummary;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    version: &'static str,
    root: &'a Path,
    duration_ms: u128,
    summary: &'a InventorySummary,
    proposals: Vec<&'a RenameProposal>,
    unresolvable: &'a [Unresolvable],
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, report: &ScanReport<'_>) -> Result<String, RenamarionError> {
        let output = ReportOutput {
            version: env!("CARGO_PKG_VERSION"),
            root: report.root,
            duration_ms: report.duration.as_millis(),
            summary: &report.summary,
            proposals: report.plan.proposals().collect(),
            unresolvable: report.plan.unresolvable(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::RenamePlan;
    use crate::inventory::{Entry, EntryKind, Inventory};
    use crate::rules::RuleSet;
    use std::time::Duration;

    #[test]
    fn test_render_report() {
        let rules = RuleSet::defaults();
        let mut inventory = Inventory::new();
        inventory.add(Entry::classify(EntryKind::File, Path::new("/d"), "a:b", &rules));
        inventory.add(Entry::classify(EntryKind::Directory, Path::new("/d"), "ok", &rules));
        let plan = RenamePlan::from_inventory(&inventory, &rules);

        let report = ScanReport {
            root: Path::new("/d"),
            summary: inventory.summary(),
            plan: &plan,
            duration: Duration::from_millis(12),
        };
        let rendered = JsonOutput::new().render_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["root"], "/d");
        assert_eq!(value["duration_ms"], 12);
        assert_eq!(value["summary"]["files"], 1);
        assert_eq!(value["summary"]["directories"], 1);
        assert_eq!(value["summary"]["invalid_files"], 1);
        assert_eq!(value["summary"]["file_groups"][0]["rules"][0], ":");
        assert_eq!(value["summary"]["file_groups"][0]["count"], 1);
        assert_eq!(value["proposals"][0]["kind"], "file");
        assert_eq!(value["proposals"][0]["original"], "/d/a:b");
        assert_eq!(value["proposals"][0]["renamed"], "/d/a-b");
        assert!(value["unresolvable"].as_array().unwrap().is_empty());
    }
}
