//! # Naming Rules
//!
//! A [`Rule`] is a named check plus the transform that fixes it. Two kinds exist:
//!
//! - [`LiteralRule`] - the name contains a forbidden character; every occurrence
//!   is replaced by a configurable string.
//! - [`TerminationRule`] - the name ends with one of a fixed set of trailing
//!   characters; all of them are stripped from the end.
//!
//! Every rule upholds the same law: for any name it matches, the transformed
//! name no longer matches it.
//!
//! ```rust
//! use renamarion::rules::{LiteralRule, Rule, TerminationRule};
//!
//! let colon = Rule::Literal(LiteralRule::new(':', "-"));
//! assert!(colon.matches("12:30.txt"));
//! assert_eq!(colon.apply("12:30.txt"), "12-30.txt");
//!
//! let trailing = Rule::Termination(TerminationRule::default());
//! assert_eq!(trailing.apply("notes, "), "notes");
//! ```

use serde::Serialize;
use std::fmt;

use super::constants::{TERMINATION_KEY, TRAILING_CHARACTERS};

/// Stable identity of a rule.
///
/// Literal rules are keyed by their character, the termination rule by
/// the label `termination`. Keys order lexicographically, which gives
/// violated-rule sets a canonical order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RuleKey(String);

impl RuleKey {
    /// Create a key from an arbitrary label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Key of the literal rule for `character`
    pub fn literal(character: char) -> Self {
        Self(character.to_string())
    }

    /// Key of the termination rule
    pub fn termination() -> Self {
        Self(TERMINATION_KEY.to_string())
    }

    /// The raw label
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleKey {
    // Control characters such as CR are shown escaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_debug())
    }
}

impl From<char> for RuleKey {
    fn from(character: char) -> Self {
        Self::literal(character)
    }
}

/// Replace every occurrence of one character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralRule {
    key: RuleKey,
    character: char,
    replacement: String,
}

impl LiteralRule {
    /// Create a rule converting `character` into `replacement`
    pub fn new(character: char, replacement: impl Into<String>) -> Self {
        Self {
            key: RuleKey::literal(character),
            character,
            replacement: replacement.into(),
        }
    }

    pub fn key(&self) -> &RuleKey {
        &self.key
    }

    /// The forbidden character
    pub fn character(&self) -> char {
        self.character
    }

    /// What the character is converted to
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub(crate) fn set_replacement(&mut self, replacement: String) {
        self.replacement = replacement;
    }

    fn matches(&self, name: &str) -> bool {
        name.contains(self.character)
    }

    fn apply(&self, name: &str) -> String {
        name.replace(self.character, &self.replacement)
    }
}

/// Strip forbidden trailing characters
///
/// Stripping repeats until the name ends with an allowed character, so
/// `"a , ,"` becomes `"a"` in one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminationRule {
    key: RuleKey,
    trailing: Vec<char>,
}

impl TerminationRule {
    /// Create a rule rejecting names that end with any of `trailing`
    pub fn new(trailing: impl IntoIterator<Item = char>) -> Self {
        Self {
            key: RuleKey::termination(),
            trailing: trailing.into_iter().collect(),
        }
    }

    /// Characters a name may not end with
    pub fn trailing(&self) -> &[char] {
        &self.trailing
    }

    fn matches(&self, name: &str) -> bool {
        name.ends_with(self.trailing.as_slice())
    }

    fn apply(&self, name: &str) -> String {
        name.trim_end_matches(self.trailing.as_slice()).to_string()
    }
}

impl Default for TerminationRule {
    fn default() -> Self {
        Self::new(TRAILING_CHARACTERS.iter().copied())
    }
}

/// A single naming constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Forbidden character with a configurable replacement
    Literal(LiteralRule),
    /// Forbidden trailing characters, fixed transform
    Termination(TerminationRule),
}

impl Rule {
    /// Identity of the rule
    pub fn key(&self) -> &RuleKey {
        match self {
            Rule::Literal(rule) => &rule.key,
            Rule::Termination(rule) => &rule.key,
        }
    }

    /// Whether `name` violates this rule
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Rule::Literal(rule) => rule.matches(name),
            Rule::Termination(rule) => rule.matches(name),
        }
    }

    /// Fix the violation. Returns the name unchanged when it does not match.
    pub fn apply(&self, name: &str) -> String {
        match self {
            Rule::Literal(rule) => rule.apply(name),
            Rule::Termination(rule) => rule.apply(name),
        }
    }

    /// Only literal rules accept a new replacement
    pub fn is_editable(&self) -> bool {
        matches!(self, Rule::Literal(_))
    }

    /// The character this rule forbids anywhere in a name
    pub fn forbidden_character(&self) -> Option<char> {
        match self {
            Rule::Literal(rule) => Some(rule.character),
            Rule::Termination(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_rule_replaces_all_occurrences() {
        let rule = Rule::Literal(LiteralRule::new('<', "("));
        assert!(rule.matches("a<b<c"));
        assert_eq!(rule.apply("a<b<c"), "a(b(c");
        assert!(!rule.matches(&rule.apply("a<b<c")));
    }

    #[test]
    fn test_literal_rule_with_empty_replacement() {
        let rule = Rule::Literal(LiteralRule::new('\r', ""));
        assert_eq!(rule.apply("Icon\r"), "Icon");
    }

    #[test]
    fn test_literal_rule_apply_on_non_matching_name_is_noop() {
        let rule = Rule::Literal(LiteralRule::new('*', "x"));
        assert!(!rule.matches("plain.txt"));
        assert_eq!(rule.apply("plain.txt"), "plain.txt");
    }

    #[test]
    fn test_termination_rule_strips_repeatedly() {
        let rule = Rule::Termination(TerminationRule::default());
        assert!(rule.matches("notes, "));
        assert_eq!(rule.apply("notes, "), "notes");
        assert_eq!(rule.apply("a , ,, "), "a");
        assert!(!rule.matches(&rule.apply("a , ,, ")));
    }

    #[test]
    fn test_termination_rule_ignores_inner_characters() {
        let rule = Rule::Termination(TerminationRule::default());
        assert!(!rule.matches("a, b.txt"));
        assert_eq!(rule.apply("a, b.txt"), "a, b.txt");
    }

    #[test]
    fn test_termination_rule_can_consume_whole_name() {
        let rule = Rule::Termination(TerminationRule::default());
        assert_eq!(rule.apply(" , "), "");
    }

    #[test]
    fn test_rule_keys() {
        assert_eq!(Rule::Literal(LiteralRule::new(':', "-")).key().as_str(), ":");
        assert_eq!(
            Rule::Termination(TerminationRule::default()).key(),
            &RuleKey::termination()
        );
    }

    #[test]
    fn test_rule_key_display_escapes_control_characters() {
        assert_eq!(RuleKey::literal('\r').to_string(), "\\r");
        assert_eq!(RuleKey::literal('<').to_string(), "<");
    }

    #[test]
    fn test_only_literal_rules_are_editable() {
        assert!(Rule::Literal(LiteralRule::new('?', ".")).is_editable());
        assert!(!Rule::Termination(TerminationRule::default()).is_editable());
    }

    #[test]
    fn test_forbidden_character() {
        assert_eq!(
            Rule::Literal(LiteralRule::new('|', "_")).forbidden_character(),
            Some('|')
        );
        assert_eq!(
            Rule::Termination(TerminationRule::default()).forbidden_character(),
            None
        );
    }
}
