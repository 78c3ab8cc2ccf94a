//! Rename executor - Applies confirmed renames
//!
//! This module walks a [`RenamePlan`] group by group, asks a
//! [`RenameConfirmer`] about every proposal and hands confirmed ones to a
//! [`Renamer`]. The executor never touches the disk itself: the filesystem
//! mutation is the injected `Renamer`, and the operator dialogue is the
//! injected `RenameConfirmer`.
//!
//! Renames happen strictly one at a time in plan order. A failed rename is
//! recorded and processing continues with the next proposal; failures are
//! not retried.

use std::path::Path;
use tracing::{debug, info, warn};

use super::plan::{PlannedGroup, RenamePlan, RenameProposal};
use crate::error::{RenamarionError, RenameError};

/// Capability to rename one filesystem entry
pub trait Renamer {
    fn rename(&self, from: &Path, to: &Path) -> Result<(), RenameError>;
}

/// Renames on the local filesystem, refusing to replace an existing entry
#[derive(Debug, Clone, Copy, Default)]
pub struct FsRenamer;

impl Renamer for FsRenamer {
    fn rename(&self, from: &Path, to: &Path) -> Result<(), RenameError> {
        if to.symlink_metadata().is_ok() {
            return Err(RenameError::TargetExists {
                to: to.to_path_buf(),
            });
        }

        std::fs::rename(from, to).map_err(|source| RenameError::Io {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
    }
}

/// Per-item operator dialogue during the rename pass
pub trait RenameConfirmer {
    /// Called once before the proposals of a group
    fn begin_group(&mut self, _group: &PlannedGroup) {}

    /// Whether the proposal may be applied
    fn confirm(&mut self, proposal: &RenameProposal) -> Result<bool, RenamarionError>;

    /// Called once the outcome of a proposal is known
    fn report(&mut self, _result: &RenameResult) {}
}

/// What happened to a single proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    /// The operator declined; the entry was left untouched
    Declined,
    /// The rename was attempted and failed
    Failed(String),
}

/// Result of processing a single proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameResult {
    pub proposal: RenameProposal,
    pub outcome: RenameOutcome,
}

/// Tally of a rename pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub declined: usize,
    pub failed: usize,
}

impl RenameSummary {
    pub fn from_results(results: &[RenameResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                match result.outcome {
                    RenameOutcome::Renamed => summary.renamed += 1,
                    RenameOutcome::Declined => summary.declined += 1,
                    RenameOutcome::Failed(_) => summary.failed += 1,
                }
                summary
            })
    }
}

/// Executes the proposals of a rename plan
pub struct RenameExecutor<R> {
    renamer: R,
}

impl<R: Renamer> RenameExecutor<R> {
    pub fn new(renamer: R) -> Self {
        Self { renamer }
    }

    /// Process every proposal of the plan in order.
    ///
    /// # Errors
    ///
    /// Only a failing confirmer aborts the pass; rename failures are
    /// reported in the returned results.
    pub fn execute<C>(
        &self,
        plan: &RenamePlan,
        confirmer: &mut C,
    ) -> Result<Vec<RenameResult>, RenamarionError>
    where
        C: RenameConfirmer + ?Sized,
    {
        let mut results = Vec::with_capacity(plan.len());

        for group in plan.groups() {
            debug!(kind = %group.kind(), rules = %group.violated(), "Processing group");
            confirmer.begin_group(group);

            for proposal in group.proposals() {
                let outcome = if confirmer.confirm(proposal)? {
                    self.apply(proposal)
                } else {
                    debug!(path = %proposal.original().display(), "Rename declined");
                    RenameOutcome::Declined
                };

                let result = RenameResult {
                    proposal: proposal.clone(),
                    outcome,
                };
                confirmer.report(&result);
                results.push(result);
            }
        }

        let summary = RenameSummary::from_results(&results);
        info!(
            renamed = summary.renamed,
            declined = summary.declined,
            failed = summary.failed,
            "Rename pass complete"
        );

        Ok(results)
    }

    fn apply(&self, proposal: &RenameProposal) -> RenameOutcome {
        info!(
            from = %proposal.original().display(),
            to = %proposal.renamed().display(),
            "Renaming"
        );

        match self.renamer.rename(proposal.original(), proposal.renamed()) {
            Ok(()) => RenameOutcome::Renamed,
            Err(e) => {
                warn!(error = %e, "Rename failed");
                RenameOutcome::Failed(e.to_string())
            }
        }
    }
}
