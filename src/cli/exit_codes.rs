//! Exit codes for the CLI
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | Everything renamed, nothing to do, or operator aborted |
//! | 1 | `INVALID_NAMES` | Invalid names found | `--dry-run` or `--format json` found problems |
//! | 2 | `RENAME_FAILURES` | Some renames failed | Permission denied, target already exists |
//! | 3 | `ERROR` | Runtime error | Unreadable directory during scan, prompt failure |
//! | 4 | `INVALID_ARGS` | Invalid arguments | Root path missing or not a directory |

/// Success - the run completed.
///
/// Used when:
/// - No invalid names were found
/// - All confirmed renames succeeded (declined items included)
/// - The operator declined the root path
pub const SUCCESS: i32 = 0;

/// Invalid names were found and left in place by a report-only run.
pub const INVALID_NAMES: i32 = 1;

/// At least one confirmed rename failed.
pub const RENAME_FAILURES: i32 = 2;

/// Runtime error (unreadable directory, prompt failure, etc.).
pub const ERROR: i32 = 3;

/// Invalid arguments (root path missing or not a directory).
pub const INVALID_ARGS: i32 = 4;
