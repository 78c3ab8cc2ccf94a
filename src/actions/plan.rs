//! Rename plan structures

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::inventory::{EntryKind, Inventory};
use crate::rules::{NameResolver, RuleSet, ViolationSet};

/// A proposed rename of one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameProposal {
    kind: EntryKind,
    original: PathBuf,
    renamed: PathBuf,
    violated: ViolationSet,
}

impl RenameProposal {
    /// Create a new proposal
    pub fn new(
        kind: EntryKind,
        original: impl Into<PathBuf>,
        renamed: impl Into<PathBuf>,
        violated: ViolationSet,
    ) -> Self {
        Self {
            kind,
            original: original.into(),
            renamed: renamed.into(),
            violated,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Get the current path
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Get the proposed path
    pub fn renamed(&self) -> &Path {
        &self.renamed
    }

    /// Rules that motivated the rename
    pub fn violated(&self) -> &ViolationSet {
        &self.violated
    }
}

/// Proposals for every entry of one kind sharing a rule combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedGroup {
    kind: EntryKind,
    violated: ViolationSet,
    proposals: Vec<RenameProposal>,
}

impl PlannedGroup {
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn violated(&self) -> &ViolationSet {
        &self.violated
    }

    pub fn proposals(&self) -> &[RenameProposal] {
        &self.proposals
    }
}

/// An invalid entry for which no rename can be proposed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unresolvable {
    pub kind: EntryKind,
    pub path: PathBuf,
    pub reason: String,
}

/// Every rename to offer the operator, in processing order.
///
/// File groups come before directory groups, so a file is proposed while
/// its parent directory still carries the name recorded during the scan.
/// Within a kind, groups follow first appearance in the inventory and
/// members follow traversal order.
///
/// Directory groups are keyed by rule combination, not by depth. A parent
/// directory in an earlier group can therefore be renamed before an
/// invalid subdirectory in a later group; the subdirectory's planned path
/// then no longer exists and its rename fails. Such failures are reported
/// per item and left for a later run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenamePlan {
    groups: Vec<PlannedGroup>,
    unresolvable: Vec<Unresolvable>,
}

impl RenamePlan {
    /// Create a new empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every invalid entry of the inventory
    pub fn from_inventory(inventory: &Inventory, rules: &RuleSet) -> Self {
        let resolver = NameResolver::new(rules);
        let mut plan = Self::new();

        for kind in [EntryKind::File, EntryKind::Directory] {
            for group in inventory.problem_groups_for(kind) {
                let mut proposals = Vec::with_capacity(group.count());
                for entry in group.entries() {
                    match resolver.resolve(entry) {
                        Ok(renamed) => proposals.push(RenameProposal::new(
                            kind,
                            entry.path(),
                            renamed,
                            entry.violated().clone(),
                        )),
                        Err(e) => {
                            warn!(path = %entry.path().display(), error = %e, "No rename proposed");
                            plan.unresolvable.push(Unresolvable {
                                kind,
                                path: entry.path().to_path_buf(),
                                reason: e.to_string(),
                            });
                        }
                    }
                }

                if !proposals.is_empty() {
                    plan.groups.push(PlannedGroup {
                        kind,
                        violated: group.violated().clone(),
                        proposals,
                    });
                }
            }
        }

        plan
    }

    /// Get all groups
    pub fn groups(&self) -> &[PlannedGroup] {
        &self.groups
    }

    /// Entries that were invalid but could not be resolved
    pub fn unresolvable(&self) -> &[Unresolvable] {
        &self.unresolvable
    }

    /// All proposals in processing order
    pub fn proposals(&self) -> impl Iterator<Item = &RenameProposal> {
        self.groups.iter().flat_map(|g| g.proposals.iter())
    }

    /// Check if the plan proposes nothing
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get the number of proposals
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.proposals.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Entry;

    fn inventory(items: &[(EntryKind, &str)]) -> Inventory {
        let rules = RuleSet::defaults();
        let mut inventory = Inventory::new();
        for (kind, name) in items {
            inventory.add(Entry::classify(*kind, Path::new("/data"), name, &rules));
        }
        inventory
    }

    #[test]
    fn test_plan_from_inventory() {
        let inv = inventory(&[
            (EntryKind::File, "foo<bar>.txt"),
            (EntryKind::File, "plain.txt"),
            (EntryKind::File, "notes, "),
        ]);
        let plan = RenamePlan::from_inventory(&inv, &RuleSet::defaults());

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.groups().len(), 2);
        let first = &plan.groups()[0].proposals()[0];
        assert_eq!(first.original(), Path::new("/data/foo<bar>.txt"));
        assert_eq!(first.renamed(), Path::new("/data/foo(bar).txt"));
        let second = &plan.groups()[1].proposals()[0];
        assert_eq!(second.renamed(), Path::new("/data/notes"));
    }

    #[test]
    fn test_plan_orders_files_before_directories() {
        let inv = inventory(&[
            (EntryKind::Directory, "a:b"),
            (EntryKind::File, "c:d"),
        ]);
        let plan = RenamePlan::from_inventory(&inv, &RuleSet::defaults());

        let kinds: Vec<EntryKind> = plan.groups().iter().map(PlannedGroup::kind).collect();
        assert_eq!(kinds, vec![EntryKind::File, EntryKind::Directory]);
    }

    #[test]
    fn test_plan_keeps_group_membership() {
        let inv = inventory(&[
            (EntryKind::File, "a<b>"),
            (EntryKind::File, "x:y"),
            (EntryKind::File, ">c<"),
        ]);
        let plan = RenamePlan::from_inventory(&inv, &RuleSet::defaults());

        assert_eq!(plan.groups()[0].proposals().len(), 2);
        assert_eq!(plan.groups()[1].proposals().len(), 1);
    }

    #[test]
    fn test_plan_records_unresolvable_entries() {
        let inv = inventory(&[(EntryKind::File, " , ")]);
        let plan = RenamePlan::from_inventory(&inv, &RuleSet::defaults());

        assert!(plan.is_empty());
        assert_eq!(plan.unresolvable().len(), 1);
        assert_eq!(plan.unresolvable()[0].path, Path::new("/data/ , "));
    }

    #[test]
    fn test_empty_plan_for_valid_tree() {
        let inv = inventory(&[(EntryKind::File, "fine.txt")]);
        let plan = RenamePlan::from_inventory(&inv, &RuleSet::defaults());
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
        assert_eq!(plan.proposals().count(), 0);
    }
}
