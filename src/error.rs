//! Error types for Renamarion
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Renamarion
#[derive(Error, Debug)]
pub enum RenamarionError {
    /// Rule set construction or edit errors
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Scan-related errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Name resolution errors
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Rename errors surfaced at the apply boundary
    #[error("Rename error: {0}")]
    Rename(#[from] RenameError),

    /// Interactive prompt failures (no terminal, interrupted input)
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Report serialization failures
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while building or editing a rule set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A replacement would reintroduce a forbidden character
    #[error("Replacement {replacement:?} for rule '{key}' contains forbidden character {offending:?}")]
    ForbiddenReplacement {
        /// Key of the rule being edited
        key: String,
        /// The rejected replacement string
        replacement: String,
        /// First forbidden character found in the replacement
        offending: char,
    },

    /// A replacement ending the name would leave a forbidden trailing character
    #[error("Replacement {replacement:?} for rule '{key}' ends with trailing character {trailing:?}")]
    TrailingReplacement {
        /// Key of the rule being edited
        key: String,
        /// The rejected replacement string
        replacement: String,
        /// The trailing character the replacement ends with
        trailing: char,
    },

    /// No rule with this key exists in the set
    #[error("Unknown rule '{key}'")]
    UnknownRule {
        /// The key that was looked up
        key: String,
    },

    /// The rule exists but its transform is structural and cannot be edited
    #[error("Rule '{key}' is not editable")]
    NotEditable {
        /// Key of the fixed rule
        key: String,
    },

    /// Two rules share the same key
    #[error("Duplicate rule key '{key}'")]
    DuplicateKey {
        /// The duplicated key
        key: String,
    },
}

/// Errors that occur during directory traversal
#[derive(Error, Debug)]
pub enum ScanError {
    /// The root path does not exist
    #[error("Root path '{}' does not exist", path.display())]
    RootNotFound {
        /// The configured root
        path: PathBuf,
    },

    /// The root path is not a directory
    #[error("Root path '{}' is not a directory", path.display())]
    RootNotDirectory {
        /// The configured root
        path: PathBuf,
    },

    /// The root path exists but its metadata cannot be read
    #[error("Cannot access root path '{}': {source}", path.display())]
    RootUnreadable {
        /// The configured root
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// A directory could not be read during the walk
    #[error("Failed to read '{}': {source}", path.display())]
    Walk {
        /// The path being visited when the walk failed
        path: PathBuf,
        /// The underlying walk error
        source: walkdir::Error,
    },
}

/// Errors computing a sanitized name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Every character of the name was removed by the rule transforms
    #[error("Sanitizing '{}' leaves an empty name", path.display())]
    EmptyName {
        /// Original path of the entry
        path: PathBuf,
    },
}

/// Errors performing a single rename
#[derive(Error, Debug)]
pub enum RenameError {
    /// The target name is already taken
    #[error("Target '{}' already exists", to.display())]
    TargetExists {
        /// The target path
        to: PathBuf,
    },

    /// The filesystem refused the rename
    #[error("Failed to rename '{}' to '{}': {source}", from.display(), to.display())]
    Io {
        /// Original path
        from: PathBuf,
        /// Target path
        to: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}
