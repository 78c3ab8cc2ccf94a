//! Actions module - Planned renames and execution

pub mod executor;
pub mod plan;

pub use executor::{
    FsRenamer, RenameConfirmer, RenameExecutor, RenameOutcome, RenameResult, RenameSummary,
    Renamer,
};
pub use plan::{PlannedGroup, RenamePlan, RenameProposal, Unresolvable};
