//! # Inventory
//!
//! Collects classified entries in traversal order and derives, on demand,
//! the counts and problem groups used for reporting and for driving the
//! rename pass.
//!
//! A problem group is the set of invalid entries sharing exactly the same
//! violated rules. Groups are keyed by [`ViolationSet`], which compares as a
//! set, so `{<, >}` and `{>, <}` land in the same group. Only combinations
//! actually observed produce a group, in order of first appearance.
//!
//! ```rust
//! use std::path::Path;
//! use renamarion::inventory::{Entry, EntryKind, Inventory};
//! use renamarion::rules::RuleSet;
//!
//! let rules = RuleSet::defaults();
//! let mut inventory = Inventory::new();
//! inventory.add(Entry::classify(EntryKind::File, Path::new("/d"), "a:b", &rules));
//! inventory.add(Entry::classify(EntryKind::Directory, Path::new("/d"), "c:d", &rules));
//!
//! let groups = inventory.problem_groups();
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].count(), 2);
//! ```

mod entry;

pub use entry::{Entry, EntryKind};

use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

use crate::rules::{RuleSet, ViolationSet};
use crate::scanner::ScannedItem;

/// Invalid entries sharing one violated-rule combination
#[derive(Debug, Clone)]
pub struct ProblemGroup<'a> {
    violated: &'a ViolationSet,
    entries: Vec<&'a Entry>,
}

impl<'a> ProblemGroup<'a> {
    pub fn violated(&self) -> &'a ViolationSet {
        self.violated
    }

    /// Members in traversal order
    pub fn entries(&self) -> &[&'a Entry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Count of entries for one rule combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub rules: ViolationSet,
    pub count: usize,
}

/// Aggregate counts of a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub files: usize,
    pub directories: usize,
    pub invalid_files: usize,
    pub invalid_directories: usize,
    /// Entries whose names could not be read as UTF-8
    pub skipped: usize,
    pub file_groups: Vec<GroupCount>,
    pub directory_groups: Vec<GroupCount>,
}

impl InventorySummary {
    pub fn invalid_total(&self) -> usize {
        self.invalid_files + self.invalid_directories
    }
}

/// Ordered collection of scanned entries
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    entries: Vec<Entry>,
    skipped: Vec<PathBuf>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already classified entry
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Classify a traversal item and append it.
    ///
    /// Names that are not valid UTF-8 cannot be checked textually; they are
    /// recorded as skipped instead.
    pub fn record(&mut self, item: ScannedItem, rules: &RuleSet) {
        match item.name.to_str() {
            Some(name) => self.add(Entry::classify(item.kind, &item.parent, name, rules)),
            None => {
                let path = item.parent.join(&item.name);
                warn!(path = %path.display(), "Skipping entry with non UTF-8 name");
                self.skipped.push(path);
            }
        }
    }

    /// All entries in traversal order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Paths skipped because their names are not UTF-8
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    pub fn of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.kind() == kind)
    }

    pub fn invalid_of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &Entry> {
        self.of_kind(kind).filter(|e| e.is_invalid())
    }

    pub fn count(&self, kind: EntryKind) -> usize {
        self.of_kind(kind).count()
    }

    pub fn invalid_count(&self, kind: EntryKind) -> usize {
        self.invalid_of_kind(kind).count()
    }

    /// Problem groups across files and directories
    pub fn problem_groups(&self) -> Vec<ProblemGroup<'_>> {
        group(self.entries.iter().filter(|e| e.is_invalid()))
    }

    /// Problem groups restricted to one kind
    pub fn problem_groups_for(&self, kind: EntryKind) -> Vec<ProblemGroup<'_>> {
        group(self.invalid_of_kind(kind))
    }

    pub fn summary(&self) -> InventorySummary {
        let counts = |kind: EntryKind| -> Vec<GroupCount> {
            self.problem_groups_for(kind)
                .iter()
                .map(|g| GroupCount {
                    rules: g.violated().clone(),
                    count: g.count(),
                })
                .collect()
        };

        InventorySummary {
            files: self.count(EntryKind::File),
            directories: self.count(EntryKind::Directory),
            invalid_files: self.invalid_count(EntryKind::File),
            invalid_directories: self.invalid_count(EntryKind::Directory),
            skipped: self.skipped.len(),
            file_groups: counts(EntryKind::File),
            directory_groups: counts(EntryKind::Directory),
        }
    }
}

fn group<'a>(entries: impl Iterator<Item = &'a Entry>) -> Vec<ProblemGroup<'a>> {
    let mut groups: IndexMap<&'a ViolationSet, Vec<&'a Entry>> = IndexMap::new();
    for entry in entries {
        groups.entry(entry.violated()).or_default().push(entry);
    }

    groups
        .into_iter()
        .map(|(violated, entries)| ProblemGroup { violated, entries })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleKey;
    use pretty_assertions::assert_eq;
    use std::ffi::OsString;
    use std::path::Path;

    fn violation(labels: &[&str]) -> ViolationSet {
        labels.iter().map(|l| RuleKey::new(*l)).collect()
    }

    fn sample() -> Inventory {
        let rules = RuleSet::defaults();
        let root = Path::new("/root");
        let mut inventory = Inventory::new();
        inventory.add(Entry::classify(EntryKind::File, root, "ok.txt", &rules));
        inventory.add(Entry::classify(EntryKind::File, root, "a<b>.txt", &rules));
        inventory.add(Entry::classify(EntryKind::File, root, "c:d", &rules));
        inventory.add(Entry::classify(EntryKind::Directory, root, "e:f", &rules));
        inventory.add(Entry::classify(EntryKind::Directory, root, "music", &rules));
        inventory.add(Entry::classify(EntryKind::File, root, ">g<", &rules));
        inventory
    }

    #[test]
    fn test_counts() {
        let inventory = sample();
        assert_eq!(inventory.count(EntryKind::File), 4);
        assert_eq!(inventory.count(EntryKind::Directory), 2);
        assert_eq!(inventory.invalid_count(EntryKind::File), 3);
        assert_eq!(inventory.invalid_count(EntryKind::Directory), 1);
    }

    #[test]
    fn test_groups_use_set_equality() {
        let inventory = sample();
        let groups = inventory.problem_groups_for(EntryKind::File);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].violated(), &violation(&["<", ">"]));
        assert_eq!(groups[0].count(), 2);
        assert_eq!(groups[0].entries()[0].name(), "a<b>.txt");
        assert_eq!(groups[0].entries()[1].name(), ">g<");
        assert_eq!(groups[1].violated(), &violation(&[":"]));
    }

    #[test]
    fn test_subset_combination_is_a_distinct_group() {
        let rules = RuleSet::defaults();
        let mut inventory = Inventory::new();
        inventory.add(Entry::classify(EntryKind::File, Path::new("/"), "a<", &rules));
        inventory.add(Entry::classify(EntryKind::File, Path::new("/"), "a<>", &rules));

        assert_eq!(inventory.problem_groups().len(), 2);
    }

    #[test]
    fn test_file_and_directory_share_a_group() {
        let inventory = sample();
        let groups = inventory.problem_groups();
        let colon = groups
            .iter()
            .find(|g| g.violated() == &violation(&[":"]))
            .unwrap();
        assert_eq!(colon.count(), 2);
        assert_eq!(colon.entries()[0].kind(), EntryKind::File);
        assert_eq!(colon.entries()[1].kind(), EntryKind::Directory);
    }

    #[test]
    fn test_no_groups_when_everything_is_valid() {
        let rules = RuleSet::defaults();
        let mut inventory = Inventory::new();
        inventory.add(Entry::classify(EntryKind::File, Path::new("/"), "fine", &rules));
        assert!(inventory.problem_groups().is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.files, 4);
        assert_eq!(summary.invalid_total(), 4);
        assert_eq!(
            summary.directory_groups,
            vec![GroupCount {
                rules: violation(&[":"]),
                count: 1
            }]
        );
        assert_eq!(summary.file_groups.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_record_skips_non_utf8_names() {
        use std::os::unix::ffi::OsStringExt;

        let mut inventory = Inventory::new();
        inventory.record(
            ScannedItem {
                parent: PathBuf::from("/root"),
                name: OsString::from_vec(vec![0x66, 0xff, 0x6f]),
                kind: EntryKind::File,
            },
            &RuleSet::defaults(),
        );
        inventory.record(
            ScannedItem {
                parent: PathBuf::from("/root"),
                name: OsString::from("x|y"),
                kind: EntryKind::File,
            },
            &RuleSet::defaults(),
        );

        assert_eq!(inventory.entries().len(), 1);
        assert_eq!(inventory.skipped().len(), 1);
        assert_eq!(inventory.summary().skipped, 1);
    }
}
