//! Sanitized name computation
//!
//! The resolver applies, in rule-set order, the transform of every rule an
//! entry violated, each one working on the previous output. It makes a
//! single pass over the violations captured at classification time: when one
//! transform exposes a violation of a different rule (a trailing space left
//! behind by an empty replacement, for instance) the result is not
//! re-classified. Running the tool again picks such names up.

use std::path::PathBuf;

use super::classifier::ViolationSet;
use super::set::RuleSet;
use crate::error::ResolveError;
use crate::inventory::Entry;

/// Computes the renamed path of invalid entries
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    rules: &'a RuleSet,
}

impl<'a> NameResolver<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Apply the transform of each violated rule to `name`.
    ///
    /// Keys absent from the rule set are ignored.
    pub fn resolve_name(&self, name: &str, violated: &ViolationSet) -> String {
        self.rules
            .iter()
            .filter(|rule| violated.contains(rule.key()))
            .fold(name.to_string(), |current, rule| rule.apply(&current))
    }

    /// Proposed path for `entry`: the original parent joined with the
    /// sanitized name. Valid entries resolve to their own path.
    pub fn resolve(&self, entry: &Entry) -> Result<PathBuf, ResolveError> {
        if !entry.is_invalid() {
            return Ok(entry.path().to_path_buf());
        }

        let renamed = self.resolve_name(entry.name(), entry.violated());
        if renamed.is_empty() {
            return Err(ResolveError::EmptyName {
                path: entry.path().to_path_buf(),
            });
        }

        Ok(entry.parent().join(renamed))
    }
}
