//! File system traversal

use std::path::Path;
use walkdir::WalkDir;

use super::ScannedItem;
use crate::error::ScanError;
use crate::inventory::EntryKind;

/// Walk `root` and yield one item per entry below it.
///
/// Entries are sorted by name within a directory and a directory is
/// yielded after its contents. Symbolic links are not followed and are
/// reported as files. The first unreadable entry ends the walk with an error.
pub fn walk_directory(root: &Path) -> impl Iterator<Item = Result<ScannedItem, ScanError>> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .contents_first(true)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            let entry = entry.map_err(|e| ScanError::Walk {
                path: e.path().map(Path::to_path_buf).unwrap_or_default(),
                source: e,
            })?;

            let kind = if entry.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            let parent = entry
                .path()
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();

            Ok(ScannedItem {
                parent,
                name: entry.file_name().to_os_string(),
                kind,
            })
        })
}
