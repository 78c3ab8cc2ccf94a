//! Scanned filesystem entries

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::rules::{RuleSet, ViolationSet};

/// Whether an entry is a file or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Directory",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            EntryKind::File => "files",
            EntryKind::Directory => "directories",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scanned item with its classification outcome.
///
/// Entries are immutable once created; the violated set is empty iff the
/// entry is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    kind: EntryKind,
    path: PathBuf,
    name: String,
    violated: ViolationSet,
}

impl Entry {
    /// Build an entry from an already computed violated set
    pub fn new(kind: EntryKind, parent: &Path, name: &str, violated: ViolationSet) -> Self {
        Self {
            kind,
            path: parent.join(name),
            name: name.to_string(),
            violated,
        }
    }

    /// Classify `name` and build the entry
    pub fn classify(kind: EntryKind, parent: &Path, name: &str, rules: &RuleSet) -> Self {
        let violated = rules.classify(name).into_violated();
        Self::new(kind, parent, name, violated)
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Full original path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory containing the entry
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn is_invalid(&self) -> bool {
        !self.violated.is_empty()
    }

    pub fn violated(&self) -> &ViolationSet {
        &self.violated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_classify_invalid() {
        let entry = Entry::classify(
            EntryKind::File,
            Path::new("/data"),
            "a:b.txt",
            &RuleSet::defaults(),
        );
        assert!(entry.is_invalid());
        assert_eq!(entry.path(), Path::new("/data/a:b.txt"));
        assert_eq!(entry.parent(), Path::new("/data"));
        assert_eq!(entry.name(), "a:b.txt");
        assert_eq!(entry.violated().len(), 1);
    }

    #[test]
    fn test_entry_classify_valid() {
        let entry = Entry::classify(
            EntryKind::Directory,
            Path::new("/data"),
            "photos",
            &RuleSet::defaults(),
        );
        assert!(!entry.is_invalid());
        assert!(entry.violated().is_empty());
    }

    #[test]
    fn test_entry_kind_serializes_lowercase() {
        let json = serde_json::to_string(&EntryKind::Directory).unwrap();
        assert_eq!(json, "\"directory\"");
    }
}
