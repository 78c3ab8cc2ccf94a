//! Name classification
//!
//! Classification is a pure function of a name and a [`RuleSet`]: no
//! filesystem access, and the same inputs always give the same result.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::rule::RuleKey;
use super::set::RuleSet;

/// The set of rules a name violates.
///
/// Backed by an ordered set, so two sets holding the same keys compare,
/// hash and display identically whatever order the keys were inserted in.
/// This makes it usable directly as a grouping key.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ViolationSet(BTreeSet<RuleKey>);

impl ViolationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: RuleKey) -> bool {
        self.0.insert(key)
    }

    pub fn contains(&self, key: &RuleKey) -> bool {
        self.0.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Keys in canonical (sorted) order
    pub fn iter(&self) -> impl Iterator<Item = &RuleKey> {
        self.0.iter()
    }
}

impl FromIterator<RuleKey> for ViolationSet {
    fn from_iter<I: IntoIterator<Item = RuleKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ViolationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<String> = self.0.iter().map(|k| format!("'{}'", k)).collect();
        write!(f, "[{}]", keys.join(", "))
    }
}

/// Outcome of classifying one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    violated: ViolationSet,
}

impl Classification {
    /// A name is invalid iff it violates at least one rule
    pub fn is_invalid(&self) -> bool {
        !self.violated.is_empty()
    }

    pub fn violated(&self) -> &ViolationSet {
        &self.violated
    }

    pub fn into_violated(self) -> ViolationSet {
        self.violated
    }
}

/// Collect every rule `name` violates, not just the first
pub fn classify(name: &str, rules: &RuleSet) -> Classification {
    let violated = rules
        .iter()
        .filter(|rule| rule.matches(name))
        .map(|rule| rule.key().clone())
        .collect();

    Classification { violated }
}
