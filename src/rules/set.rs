//! Rule sets and the builder used to edit them before a scan
//!
//! A [`RuleSetBuilder`] starts from the defaults and accepts a bounded
//! series of edits. [`RuleSetBuilder::build`] freezes it into a [`RuleSet`],
//! which has no mutating API and is what scanning and resolution read.

use indexmap::IndexMap;
use tracing::{debug, info};

use super::classifier::{self, Classification};
use super::constants::DEFAULT_LITERAL_RULES;
use super::rule::{LiteralRule, Rule, RuleKey, TerminationRule};
use crate::error::RuleError;

/// Ordered, immutable collection of rules keyed by identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: IndexMap<RuleKey, Rule>,
}

impl RuleSet {
    /// The default rule set, unedited
    pub fn defaults() -> Self {
        RuleSetBuilder::with_defaults().build()
    }

    /// Look up a rule by key
    pub fn get(&self, key: &RuleKey) -> Option<&Rule> {
        self.rules.get(key)
    }

    /// Rules in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &RuleKey> {
        self.rules.keys()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Characters forbidden anywhere in a name
    pub fn forbidden_characters(&self) -> impl Iterator<Item = char> + '_ {
        self.rules.values().filter_map(Rule::forbidden_character)
    }

    /// Classify a single name against every rule
    pub fn classify(&self, name: &str) -> Classification {
        classifier::classify(name, self)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Editable rule set
///
/// Every mutation is validated: a literal rule's replacement may never
/// contain a character that some literal rule forbids, and may not end with
/// a character the termination rule strips, otherwise fixing one violation
/// would introduce another.
///
/// An empty replacement is always accepted. It can still leave a trailing
/// character behind (`"a \r"` becomes `"a "`); resolution is single-pass and
/// does not chase that second violation.
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    rules: IndexMap<RuleKey, Rule>,
}

impl RuleSetBuilder {
    /// An empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// The default literal rules followed by the termination rule
    pub fn with_defaults() -> Self {
        let mut rules = IndexMap::new();
        for (character, replacement) in DEFAULT_LITERAL_RULES {
            let rule = Rule::Literal(LiteralRule::new(*character, *replacement));
            rules.insert(rule.key().clone(), rule);
        }
        let termination = Rule::Termination(TerminationRule::default());
        rules.insert(termination.key().clone(), termination);

        Self { rules }
    }

    /// Add a rule, rejecting duplicate keys and replacements that would
    /// reintroduce a forbidden character
    pub fn add(&mut self, rule: Rule) -> Result<&mut Self, RuleError> {
        let key = rule.key().clone();
        if self.rules.contains_key(&key) {
            return Err(RuleError::DuplicateKey {
                key: key.to_string(),
            });
        }

        if let Rule::Literal(literal) = &rule {
            let forbidden: Vec<char> = self
                .forbidden_characters()
                .chain(std::iter::once(literal.character()))
                .collect();
            check_replacement(&key, literal.replacement(), &forbidden)?;
            check_trailing(&key, literal.replacement(), &self.trailing_characters())?;

            // The new character must not already be produced by an existing replacement
            for existing in self.rules.values() {
                if let Rule::Literal(other) = existing {
                    check_replacement(other.key(), other.replacement(), &[literal.character()])?;
                }
            }
        }

        if let Rule::Termination(termination) = &rule {
            for existing in self.rules.values() {
                if let Rule::Literal(other) = existing {
                    check_trailing(other.key(), other.replacement(), termination.trailing())?;
                }
            }
        }

        self.rules.insert(key, rule);
        Ok(self)
    }

    /// Check a proposed replacement without applying it
    pub fn validate_replacement(&self, key: &RuleKey, replacement: &str) -> Result<(), RuleError> {
        match self.rules.get(key) {
            None => Err(RuleError::UnknownRule {
                key: key.to_string(),
            }),
            Some(rule) if !rule.is_editable() => Err(RuleError::NotEditable {
                key: key.to_string(),
            }),
            Some(_) => {
                let forbidden: Vec<char> = self.forbidden_characters().collect();
                check_replacement(key, replacement, &forbidden)?;
                check_trailing(key, replacement, &self.trailing_characters())
            }
        }
    }

    /// Replace the substitution string of a literal rule
    pub fn set_replacement(
        &mut self,
        key: &RuleKey,
        replacement: impl Into<String>,
    ) -> Result<(), RuleError> {
        let replacement = replacement.into();
        self.validate_replacement(key, &replacement)?;

        if let Some(Rule::Literal(rule)) = self.rules.get_mut(key) {
            debug!(rule = %key, replacement = %replacement.escape_debug(), "Rule edited");
            rule.set_replacement(replacement);
        }
        Ok(())
    }

    /// Look up a rule by key
    pub fn get(&self, key: &RuleKey) -> Option<&Rule> {
        self.rules.get(key)
    }

    /// Rules in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    /// Keys of the rules an operator may edit
    pub fn editable_keys(&self) -> Vec<RuleKey> {
        self.rules
            .values()
            .filter(|r| r.is_editable())
            .map(|r| r.key().clone())
            .collect()
    }

    fn forbidden_characters(&self) -> impl Iterator<Item = char> + '_ {
        self.rules.values().filter_map(Rule::forbidden_character)
    }

    fn trailing_characters(&self) -> Vec<char> {
        self.rules
            .values()
            .filter_map(|rule| match rule {
                Rule::Termination(termination) => Some(termination.trailing()),
                Rule::Literal(_) => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Freeze the rules for scanning and resolution
    pub fn build(self) -> RuleSet {
        info!(rules = self.rules.len(), "Rule set frozen");
        RuleSet { rules: self.rules }
    }
}

fn check_replacement(key: &RuleKey, replacement: &str, forbidden: &[char]) -> Result<(), RuleError> {
    match replacement.chars().find(|c| forbidden.contains(c)) {
        Some(offending) => Err(RuleError::ForbiddenReplacement {
            key: key.to_string(),
            replacement: replacement.to_string(),
            offending,
        }),
        None => Ok(()),
    }
}

fn check_trailing(key: &RuleKey, replacement: &str, trailing: &[char]) -> Result<(), RuleError> {
    match replacement.chars().last() {
        Some(last) if trailing.contains(&last) => Err(RuleError::TrailingReplacement {
            key: key.to_string(),
            replacement: replacement.to_string(),
            trailing: last,
        }),
        _ => Ok(()),
    }
}
