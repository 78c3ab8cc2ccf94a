//! Scanner module - Directory traversal
//!
//! The scanner turns a root directory into a stream of [`ScannedItem`]
//! triples and feeds them through a [`RuleSet`] into an [`Inventory`].
//! A directory that cannot be read aborts the whole scan: a partial
//! inventory would report misleading counts.

mod filesystem;
mod progress;

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use progress::ScanProgress;

use crate::error::ScanError;
use crate::inventory::{EntryKind, Inventory};
use crate::rules::RuleSet;

/// One filesystem entry found under the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedItem {
    /// Directory containing the entry
    pub parent: PathBuf,
    /// Final path component, as stored on disk
    pub name: OsString,
    pub kind: EntryKind,
}

/// Main scanner for a directory tree
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Create a scanner, checking that `root` is an existing directory
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let root = root.into();
        let metadata = match std::fs::metadata(&root) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ScanError::RootNotFound { path: root });
            }
            Err(source) => return Err(ScanError::RootUnreadable { path: root, source }),
        };
        if !metadata.is_dir() {
            return Err(ScanError::RootNotDirectory { path: root });
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every entry under the root, contents before their directory
    pub fn walk(&self) -> impl Iterator<Item = Result<ScannedItem, ScanError>> {
        filesystem::walk_directory(&self.root)
    }

    /// Walk the tree and classify every entry
    pub fn scan(&self, rules: &RuleSet, progress: &ScanProgress) -> Result<Inventory, ScanError> {
        info!(root = %self.root.display(), "Starting scan");
        scan_items(self.walk(), rules, progress)
    }
}

/// Classify a stream of traversal items into an inventory.
///
/// The first `Err` aborts the scan and no inventory is returned.
pub fn scan_items<I>(
    items: I,
    rules: &RuleSet,
    progress: &ScanProgress,
) -> Result<Inventory, ScanError>
where
    I: IntoIterator<Item = Result<ScannedItem, ScanError>>,
{
    let mut inventory = Inventory::new();
    for item in items {
        let item = item?;
        debug!(parent = %item.parent.display(), name = ?item.name, kind = %item.kind, "Scanned");
        inventory.record(item, rules);
        progress.tick();
    }

    info!(
        files = inventory.count(EntryKind::File),
        directories = inventory.count(EntryKind::Directory),
        invalid_files = inventory.invalid_count(EntryKind::File),
        invalid_directories = inventory.invalid_count(EntryKind::Directory),
        "Scan complete"
    );

    Ok(inventory)
}
